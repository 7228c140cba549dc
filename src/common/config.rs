//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::{Error, Result};
use crate::fixture::NamingConvention;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Fixture discovery settings
    #[serde(default)]
    pub fixtures: FixtureConfig,

    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Fixture discovery settings
#[derive(Debug, Deserialize, Default)]
pub struct FixtureConfig {
    /// Directory scanned when none is given on the command line
    pub directory: Option<PathBuf>,

    /// How fixture filenames are parsed
    #[serde(flatten)]
    pub naming: NamingConvention,
}

/// Console output settings
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Style warnings, errors and test names with ANSI colors
    #[serde(default)]
    pub color: bool,
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the platform config file is
    /// read if present and defaults are returned otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => match config_path() {
                Some(path) if path.exists() => Self::load_from(&path)?,
                _ => Self::default(),
            },
        };
        config.fixtures.naming.validate()?;
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.fixtures.directory.is_none());
        assert_eq!(config.fixtures.naming.extension, "txt");
        assert_eq!(config.fixtures.naming.delimiter, "-");
        assert_eq!(config.fixtures.naming.input_role, "input");
        assert_eq!(config.fixtures.naming.expected_role, "expected");
        assert!(!config.output.color);
    }

    #[test]
    fn test_partial_fixture_table() {
        let config = Config::parse(
            r#"
            [fixtures]
            directory = "cases"
            extension = "out"

            [output]
            color = true
            "#,
        )
        .unwrap();
        assert_eq!(config.fixtures.directory, Some(PathBuf::from("cases")));
        assert_eq!(config.fixtures.naming.extension, "out");
        assert_eq!(config.fixtures.naming.delimiter, "-");
        assert!(config.output.color);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = Config::parse("[fixtures\nextension = ").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_naming() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fixtures]\ndelimiter = \"\"\n").unwrap();
        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fixtures]\ndelimiter = \"_\"\n").unwrap();
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.fixtures.naming.delimiter, "_");
    }
}
