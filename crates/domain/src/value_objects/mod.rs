//! Value Objects - Immutable, identity-less domain primitives

mod reveal_state;
mod visual_attributes;

pub use reveal_state::RevealState;
pub use visual_attributes::VisualAttributes;
