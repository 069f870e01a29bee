//! Error types for optio

use thiserror::Error;

/// Errors raised when an absent value is forced out of a container
#[derive(Error, Debug)]
pub enum OptionalError {
    // Unwrap errors
    #[error("Value missing: optional is absent")]
    ValueMissing,

    // Interop errors
    #[error("Invalid JSON for optional value: {0}")]
    Json(#[from] serde_json::Error),
}

impl OptionalError {
    /// True for the error produced by forcing an absent optional
    pub fn is_value_missing(&self) -> bool {
        matches!(self, OptionalError::ValueMissing)
    }
}

/// Result type for optio operations
pub type OptionalResult<T> = Result<T, OptionalError>;
