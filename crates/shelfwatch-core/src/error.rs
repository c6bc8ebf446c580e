//! Error types for shelfwatch-core

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for shelfwatch operations
pub type Result<T> = std::result::Result<T, ShelfwatchError>;

/// Main error type for shelfwatch operations
#[derive(Error, Debug)]
pub enum ShelfwatchError {
    /// Configuration-related errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(String),
}

/// Snapshot decoding errors
///
/// Returned directly by [`crate::Snapshot::parse`]. The lenient path used by
/// the dashboard turns every one of them into an empty snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Body is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Body is JSON but not an object
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(String),

    /// Neither `records` nor `predictions` holds an array
    #[error("Missing record list")]
    MissingRecords,
}

impl From<std::io::Error> for ShelfwatchError {
    fn from(err: std::io::Error) -> Self {
        ShelfwatchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::InvalidJson(err.to_string())
    }
}

impl From<toml::de::Error> for ShelfwatchError {
    fn from(err: toml::de::Error) -> Self {
        ShelfwatchError::Config(ConfigError::Parse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_is_config_parse() {
        let err: ShelfwatchError = toml::from_str::<toml::Value>("[api")
            .unwrap_err()
            .into();
        assert!(matches!(err, ShelfwatchError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_io_error_message_kept() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
        let err = ShelfwatchError::from(io);
        assert_eq!(err.to_string(), "IO error: config.toml");
    }

    #[test]
    fn test_snapshot_error_messages() {
        assert_eq!(SnapshotError::MissingRecords.to_string(), "Missing record list");
        assert_eq!(
            SnapshotError::NotAnObject("array".to_string()).to_string(),
            "Expected a JSON object, got array"
        );
    }
}
