//! Domain layer for the weather card
//!
//! Contains the weather record handed in by data producers, the UI message
//! envelope it travels in, and the value objects a card derives from it.
//! This layer has no rendering or I/O concerns.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
