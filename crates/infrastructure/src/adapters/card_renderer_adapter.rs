//! Card renderer adapter - Implements CardRendererPort with Tera templates

use application::error::ApplicationError;
use application::ports::{CardRendererPort, RenderFormat};
use application::services::CardRenderDescription;
use tracing::{debug, instrument};

use crate::templates::{CardTemplate, CardTransition, TemplateEngine, TemplateError};

/// Renders cards through the template engine, or as JSON
#[derive(Debug, Clone)]
pub struct TemplateCardRenderer {
    engine: TemplateEngine,
    transition: CardTransition,
}

impl TemplateCardRenderer {
    /// Create a renderer over the embedded templates
    pub fn new() -> Result<Self, ApplicationError> {
        let engine = TemplateEngine::new().map_err(Self::map_error)?;
        Ok(Self::with_engine(engine, CardTransition::default()))
    }

    /// Create a renderer over a configured engine
    #[must_use]
    pub const fn with_engine(engine: TemplateEngine, transition: CardTransition) -> Self {
        Self { engine, transition }
    }

    /// Transition applied to rendered cards
    #[must_use]
    pub const fn transition(&self) -> &CardTransition {
        &self.transition
    }

    fn map_error(err: TemplateError) -> ApplicationError {
        ApplicationError::Render(err.to_string())
    }
}

impl CardRendererPort for TemplateCardRenderer {
    #[instrument(skip(self, card), fields(city = %card.city, reveal = %card.reveal))]
    fn render(
        &self,
        card: &CardRenderDescription,
        format: RenderFormat,
    ) -> Result<String, ApplicationError> {
        let output = match format {
            RenderFormat::Html => self
                .engine
                .render_card(card, CardTemplate::Html, &self.transition)
                .map_err(Self::map_error)?,
            RenderFormat::Text => self
                .engine
                .render_card(card, CardTemplate::Text, &self.transition)
                .map_err(Self::map_error)?,
            RenderFormat::Json => serde_json::to_string_pretty(card)
                .map_err(|e| ApplicationError::Render(e.to_string()))?,
        };

        debug!(%format, bytes = output.len(), "Card rendered");
        Ok(output)
    }
}
