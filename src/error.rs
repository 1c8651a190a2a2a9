//! Crate error types.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EnhanceError>;

/// Enhancement-related errors
#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("malformed HTML: {0}")]
    Html(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}
