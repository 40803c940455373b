//! Generates `build_info.rs` in OUT_DIR: commit, date and cargo profile.
//!
//! Each value can be pinned from the environment so release builds are
//! reproducible; otherwise it is read from git, the clock, or cargo.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const PINNED: [&str; 2] = ["BUILD_COMMIT", "BUILD_DATE"];

fn short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn pinned_or(key: &str, fallback: impl FnOnce() -> String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(fallback)
}

fn main() -> std::io::Result<()> {
    let commit = pinned_or("BUILD_COMMIT", || {
        short_commit().unwrap_or_else(|| "unknown".into())
    });
    let date = pinned_or("BUILD_DATE", || {
        chrono::Utc::now().format("%Y-%m-%d").to_string()
    });
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".into());

    // {:?} quotes and escapes, so pinned values cannot break the generated file
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {commit:?};\n\
         pub const BUILD_DATE: &str = {date:?};\n\
         pub const BUILD_PROFILE: &str = {profile:?};\n"
    );

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default());
    fs::write(out_dir.join("build_info.rs"), generated)?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    for key in PINNED {
        println!("cargo:rerun-if-env-changed={key}");
    }
    Ok(())
}
