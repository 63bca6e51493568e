//! Configuration error types

use std::io;

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML (or has the wrong shape)
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// A value failed validation
    #[error("invalid config: {field} - {message}")]
    Invalid {
        /// The offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Create an Io error
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an Invalid error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = ConfigError::io(
            "/etc/clinsight.toml",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("/etc/clinsight.toml"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_invalid_error_names_field() {
        let err = ConfigError::invalid("api.base_url", "must not be empty");
        assert!(err.to_string().contains("api.base_url"));
        assert!(err.to_string().contains("must not be empty"));
    }
}
