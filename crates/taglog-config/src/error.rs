//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax or unknown keys.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/path/to/taglog.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /path/to/taglog.toml"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let err = ConfigError::NotFound(PathBuf::from("x"));
        let debug = format!("{err:?}");
        assert!(debug.contains("NotFound"));
    }
}
