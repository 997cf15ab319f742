//! Card behaviour settings

use application::CardOptions;
use serde::{Deserialize, Serialize};

use super::default_true;
use crate::templates::CardTransition;

/// Settings for card lifecycle and reveal timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Reveal transition duration in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,

    /// Easing utility class for the reveal transition
    #[serde(default = "default_easing")]
    pub easing: String,

    /// Mount cards right after creation
    #[serde(default = "default_true")]
    pub auto_mount: bool,

    /// Treat blank required fields as errors instead of warnings
    #[serde(default)]
    pub strict: bool,
}

const fn default_transition_ms() -> u32 {
    500
}

fn default_easing() -> String {
    "ease-out".to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            easing: default_easing(),
            auto_mount: true,
            strict: false,
        }
    }
}

impl CardConfig {
    /// Transition classes handed to the renderer
    #[must_use]
    pub fn transition(&self) -> CardTransition {
        CardTransition {
            duration_ms: self.transition_ms,
            easing: self.easing.clone(),
        }
    }

    /// Options for the card service
    #[must_use]
    pub const fn options(&self) -> CardOptions {
        CardOptions {
            auto_mount: self.auto_mount,
            strict: self.strict,
        }
    }
}
