//! Reveal state value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entrance animation state of a single card instance
///
/// A card starts `Hidden` and moves to `Visible` once, when it is mounted.
/// How the change is animated is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Pre-reveal treatment, before the card is mounted
    #[default]
    Hidden,
    /// Revealed treatment, terminal for the lifetime of the instance
    Visible,
}

impl RevealState {
    /// Whether the revealed treatment applies
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Lowercase label, as used in markup attributes
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
