//! Derived visual attributes of a weather condition

use serde::{Deserialize, Serialize};

/// Icon and backdrop derived from a condition label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualAttributes {
    /// Glyph shown next to the city name
    pub icon: String,
    /// Gradient descriptor for the card backdrop (e.g. `from-yellow-400 to-orange-500`)
    pub background: String,
}

impl VisualAttributes {
    /// Create visual attributes from an icon and a background descriptor
    pub fn new(icon: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            background: background.into(),
        }
    }
}
