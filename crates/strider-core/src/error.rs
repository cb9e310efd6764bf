//! Error types for Strider

use thiserror::Error;

/// The main error type for Strider operations
#[derive(Debug, Error)]
pub enum StriderError {
    #[error("Mesh error: {0}")]
    MeshError(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Strider operations
pub type Result<T> = std::result::Result<T, StriderError>;

impl From<toml::de::Error> for StriderError {
    fn from(err: toml::de::Error) -> Self {
        StriderError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for StriderError {
    fn from(err: toml::ser::Error) -> Self {
        StriderError::TomlSerError(err.to_string())
    }
}
