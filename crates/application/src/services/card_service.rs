//! Card service - Present weather records as rendered cards
//!
//! Runs the presence check, builds and mounts a card, and hands its render
//! description to the configured renderer.

use std::{fmt, sync::Arc};

use domain::WeatherRecord;
use tracing::{debug, instrument, warn};

use super::weather_card::{CardRenderDescription, WeatherCard};
use crate::{
    error::ApplicationError,
    ports::{CardRendererPort, RenderFormat, SourcedWeather, WeatherSourcePort},
};

/// How the service treats the cards it creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    /// Fire the mount trigger before rendering
    pub auto_mount: bool,
    /// Fail on records with empty required fields instead of warning
    pub strict: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            auto_mount: true,
            strict: false,
        }
    }
}

/// A card together with its rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedCard {
    /// Render description handed to the renderer
    pub description: CardRenderDescription,
    /// Renderer output
    pub output: String,
}

/// Service that turns weather records into rendered cards
pub struct CardService {
    renderer: Arc<dyn CardRendererPort>,
    source: Option<Arc<dyn WeatherSourcePort>>,
    options: CardOptions,
}

impl fmt::Debug for CardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardService")
            .field("options", &self.options)
            .field("has_source", &self.source.is_some())
            .finish_non_exhaustive()
    }
}

impl CardService {
    /// Create a card service with default options and no weather source
    pub fn new(renderer: Arc<dyn CardRendererPort>) -> Self {
        Self {
            renderer,
            source: None,
            options: CardOptions::default(),
        }
    }

    /// Attach a weather source for request-driven cards
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn WeatherSourcePort>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the card options
    #[must_use]
    pub const fn with_options(mut self, options: CardOptions) -> Self {
        self.options = options;
        self
    }

    /// Current card options
    #[must_use]
    pub const fn options(&self) -> CardOptions {
        self.options
    }

    /// Build a card for the record and render it
    #[instrument(skip(self, record), fields(city = %record.city, condition = %record.condition))]
    pub fn present(
        &self,
        record: WeatherRecord,
        format: RenderFormat,
    ) -> Result<PresentedCard, ApplicationError> {
        if let Err(e) = record.check_presence() {
            if self.options.strict {
                return Err(e.into());
            }
            warn!(missing = ?record.missing_fields(), "Rendering incomplete weather record");
        }

        let mut card = WeatherCard::new(record);
        if self.options.auto_mount {
            card.mount();
        }

        let description = card.render();
        let output = self.renderer.render(&description, format)?;
        debug!(%format, bytes = output.len(), "Card rendered");

        Ok(PresentedCard {
            description,
            output,
        })
    }

    /// Look up a record through the weather source, then present it
    pub fn present_request(
        &self,
        request: &str,
        format: RenderFormat,
    ) -> Result<(SourcedWeather, PresentedCard), ApplicationError> {
        let source = self.source.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("No weather source configured".to_string())
        })?;

        let sourced = source.lookup(request)?;
        debug!(
            requested = ?sourced.requested_city,
            city = %sourced.record.city,
            "Weather source answered"
        );

        let presented = self.present(sourced.record.clone(), format)?;
        Ok((sourced, presented))
    }
}
