//! Error types for CallGuard.

use callguard_config::ConfigError;
use callguard_core::ValidationError;
use thiserror::Error;

/// Errors that can occur during CallGuard operations.
#[derive(Debug, Error)]
pub enum GuardError {
    /// A call contract was violated.
    #[error("{0}")]
    InvalidParameter(#[from] ValidationError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GuardError {
    /// The contract violation, if this error is one.
    pub fn as_invalid_parameter(&self) -> Option<&ValidationError> {
        match self {
            GuardError::InvalidParameter(e) => Some(e),
            GuardError::Config(_) => None,
        }
    }
}

/// Result type for CallGuard operations.
pub type Result<T> = std::result::Result<T, GuardError>;
