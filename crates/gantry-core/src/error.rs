//! Error types for Gantry

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GantryError
pub type Result<T> = std::result::Result<T, GantryError>;

/// Main error type for Gantry operations
#[derive(Debug, Error)]
pub enum GantryError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// URL codec errors
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required setting (e.g. no project id given on the CLI or in config)
    #[error("Missing required setting: {0}")]
    MissingField(String),

    /// Credential environment variable is unset or empty
    #[error("No GitHub token found; set {0} or pass --token")]
    MissingToken(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// URL encode/decode errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// Nothing to encode or decode
    #[error("Nothing to process: input and clipboard are both empty")]
    EmptyInput,

    /// Decoded bytes are not valid UTF-8
    #[error("Decoded text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Clipboard could not be read or written
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

impl GantryError {
    /// Whether this error comes from configuration
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
