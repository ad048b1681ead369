//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but could not be parsed
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Extension not recognised (or its format feature is disabled)
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Parsed values failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
