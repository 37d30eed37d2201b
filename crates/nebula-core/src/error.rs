//! Domain-level error types.

use thiserror::Error;

use crate::ports::KvError;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Post store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend failed: {0}")]
    Backend(#[from] KvError),

    /// The slot holds a value that does not parse as a post collection.
    /// The raw value is left in place.
    #[error("Stored collection is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
