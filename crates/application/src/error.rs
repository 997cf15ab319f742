//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No component is registered under the requested name
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// Renderer failed to produce output
    #[error("Render failed: {0}")]
    Render(String),

    /// Weather source failed to produce a record
    #[error("Weather source error: {0}")]
    Source(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
