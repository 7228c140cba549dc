//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations.

use std::path::PathBuf;

/// Name used for the configuration directory
const APP_NAME: &str = "fixture-runner";

/// Fixture directory used when neither the CLI nor the config names one
pub const DEFAULT_FIXTURE_DIR: &str = "tests/data";

/// Get the configuration directory path
///
/// - Linux: `~/.config/fixture-runner/`
/// - macOS: `~/Library/Application Support/fixture-runner/`
/// - Windows: `%APPDATA%\fixture-runner\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
