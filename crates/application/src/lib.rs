//! Application layer - Card composition and lifecycle
//!
//! Maps condition labels to visuals, owns the reveal state machine of each
//! card, and defines the ports through which renderers and weather sources
//! are plugged in.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
