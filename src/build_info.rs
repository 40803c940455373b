//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "econ-balance 0.1.0 (2026-10-19, abc1234)", with the cargo profile
/// appended for non-release builds.
pub fn version_string() -> String {
    let mut version = format!(
        "econ-balance {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    );
    if BUILD_PROFILE != "release" {
        version.push_str(" [");
        version.push_str(BUILD_PROFILE);
        version.push(']');
    }
    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
        assert!(!BUILD_PROFILE.is_empty());
    }

    #[test]
    fn test_version_string_mentions_commit() {
        let version = version_string();
        assert!(version.starts_with("econ-balance "));
        assert!(version.contains(BUILD_COMMIT));
    }

    #[test]
    fn test_version_string_tags_non_release_builds() {
        let version = version_string();
        if BUILD_PROFILE == "release" {
            assert!(version.ends_with(')'));
        } else {
            assert!(version.ends_with(&format!("[{}]", BUILD_PROFILE)));
        }
    }
}
