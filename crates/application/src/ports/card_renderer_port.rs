//! Card renderer port
//!
//! Turns a render description into displayable output. How the reveal
//! state is animated is entirely up to the implementation.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;
use crate::services::CardRenderDescription;

/// Output produced by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Styled HTML markup
    #[default]
    Html,
    /// Plain text for terminals
    Text,
    /// The render description as JSON
    Json,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ApplicationError::Configuration(format!(
                "Invalid render format: {s}. Use 'html', 'text' or 'json'"
            ))),
        }
    }
}

/// Port for rendering cards
#[cfg_attr(test, automock)]
pub trait CardRendererPort: Send + Sync {
    /// Render one card in the requested format
    fn render(
        &self,
        card: &CardRenderDescription,
        format: RenderFormat,
    ) -> Result<String, ApplicationError>;
}
