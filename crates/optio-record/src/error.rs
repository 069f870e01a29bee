//! Mapping errors

use thiserror::Error;

/// Errors raised while mapping one record into another
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Missing source field: {0}")]
    MissingField(String),

    #[error("Field {field} is not an object (found {found})")]
    NotAnObject { field: String, found: &'static str },

    #[error("Duplicate target field: {0}")]
    DuplicateTarget(String),

    #[error("Field failed to render: {0}")]
    Render(#[from] optio_core::OptionalError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
