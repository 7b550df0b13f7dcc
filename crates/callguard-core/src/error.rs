//! Error types for CallGuard Core.

use thiserror::Error;

/// Wire code reported for every parameter violation.
pub const INVALID_PARAMETER_CODE: &str = "Method_InvalidParameter";

/// A violated call contract.
///
/// Every variant is an `InvalidParameter` failure; the variant only records
/// which rule was broken. The `Display` output is the message handed back to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Parameter \"{name}\" is missing.")]
    Missing { name: String },

    #[error("Parameter \"{name}\" has invalid type. \"{expected}\" expected.")]
    InvalidType { name: String, expected: &'static str },

    #[error("Parameter \"{name}\" is empty.")]
    Empty { name: String },

    #[error("Parameter \"{name}\" has invalid value \"{value}\". Integer representation expected.")]
    InvalidAmount { name: String, value: String },

    #[error("Parameters \"path\" and \"coin\" do not match.")]
    CoinPathMismatch,
}

impl ValidationError {
    /// The error kind shared by all variants.
    pub const fn code(&self) -> &'static str {
        INVALID_PARAMETER_CODE
    }

    /// The offending parameter, when the violation concerns a single one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ValidationError::Missing { name }
            | ValidationError::InvalidType { name, .. }
            | ValidationError::Empty { name }
            | ValidationError::InvalidAmount { name, .. } => Some(name),
            ValidationError::CoinPathMismatch => None,
        }
    }
}

/// Result type for contract checks.
pub type Result<T> = std::result::Result<T, ValidationError>;
