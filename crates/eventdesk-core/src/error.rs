//! Domain error types.

use thiserror::Error;

use crate::id::EventId;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An event was not found.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
