//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Weather record could not be read from its serialized form
    #[error("Invalid weather record: {0}")]
    InvalidRecord(String),

    /// UI message envelope could not be read
    #[error("Invalid UI message: {0}")]
    InvalidMessage(String),

    /// A required display field is empty
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}
