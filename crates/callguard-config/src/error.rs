//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Document could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON or has the wrong top-level shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
