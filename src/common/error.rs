//! Error types for the fixture runner
//!
//! Fixture-level problems (orphaned or unrecognized files) are never errors:
//! they surface as anomalies through a [`Reporter`](crate::report::Reporter).
//! This type covers what can stop a whole run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fixture runner
#[derive(Error, Debug)]
pub enum Error {
    // === Discovery Errors ===
    #[error("Failed to read fixture directory '{}': {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Execution Errors ===
    #[error("{0} is not implemented yet")]
    NotImplemented(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a directory read error for `path`
    pub fn directory_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    /// Create a not implemented error for the named capability
    pub fn not_implemented(what: &str) -> Self {
        Self::NotImplemented(what.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_read_message_names_path() {
        let err = Error::directory_read(
            "tests/data",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("tests/data"));
        assert!(msg.contains("no such directory"));
    }

    #[test]
    fn test_not_implemented_message() {
        let err = Error::not_implemented("Running fixture tests");
        assert_eq!(err.to_string(), "Running fixture tests is not implemented yet");
    }
}
