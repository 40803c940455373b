use super::ContentSnapshot;
use crate::core::BalanceProfile;
use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn load_snapshot(path: &Path) -> Result<ContentSnapshot, StoreError> {
    let json = fs::read_to_string(path)?;
    let snapshot: ContentSnapshot = serde_json::from_str(&json)?;
    info!(
        path = %path.display(),
        races = snapshot.races.len(),
        dungeons = snapshot.dungeons.len(),
        items = snapshot.items.len(),
        "loaded content snapshot"
    );
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &ContentSnapshot) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved content snapshot");
    Ok(())
}

/// ~/.econ-balance/profile.json
pub fn default_profile_path() -> Result<PathBuf, StoreError> {
    let home_dir = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home_dir.join(".econ-balance").join("profile.json"))
}

/// Read and validate a profile file.
pub fn load_profile_file(path: &Path) -> Result<BalanceProfile, StoreError> {
    let json = fs::read_to_string(path)?;
    let profile: BalanceProfile = serde_json::from_str(&json)?;
    profile.validate()?;
    info!(path = %path.display(), "loaded balance profile");
    Ok(profile)
}

/// Resolve the profile to run with.
///
/// An explicit path must load. Otherwise the per-user profile is used if it
/// exists, and the built-in defaults if it does not.
pub fn load_profile(explicit: Option<&Path>) -> Result<BalanceProfile, StoreError> {
    if let Some(path) = explicit {
        return load_profile_file(path);
    }
    match default_profile_path() {
        Ok(path) if path.exists() => load_profile_file(&path),
        _ => {
            debug!("no profile file, using built-in defaults");
            Ok(BalanceProfile::default())
        }
    }
}

pub fn save_profile(path: &Path, profile: &BalanceProfile) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_catalog;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "econ-balance-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_snapshot_save_then_load() {
        let dir = scratch_dir("snapshot");
        let path = dir.join("content.json");
        let catalog = default_catalog();

        save_snapshot(&path, &catalog).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, catalog);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_snapshot_is_io_error() {
        let dir = scratch_dir("missing");
        let err = load_snapshot(&dir.join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_malformed_snapshot_is_json_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("content.json");
        fs::write(&path, "{ \"races\": [ { \"race\": 5 } ] }").unwrap();
        assert!(matches!(load_snapshot(&path), Err(StoreError::Json(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_profile_file_rejected() {
        let dir = scratch_dir("profile");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("profile.json");
        fs::write(&path, r#"{ "enhancement": { "growth": 0.5 } }"#).unwrap();
        assert!(matches!(
            load_profile(Some(&path)),
            Err(StoreError::Balance(_))
        ));

        let mut profile = BalanceProfile::default();
        profile.report.reference_floor = 5;
        save_profile(&path, &profile).unwrap();
        assert_eq!(load_profile(Some(&path)).unwrap(), profile);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_default_profile_path_location() {
        if let Ok(path) = default_profile_path() {
            assert!(path.ends_with(".econ-balance/profile.json"));
        }
    }
}
