//! Card host - Lifecycle harness for UI messages
//!
//! Resolves the component named by each message, keeps one card per message
//! id, and decides when a card is created, mounted, updated or dropped.

use std::collections::HashMap;

use domain::{UiMessage, WEATHER_COMPONENT, WeatherRecord};
use tracing::{debug, warn};
use uuid::Uuid;

use super::weather_card::{CardRenderDescription, WeatherCard};
use crate::error::ApplicationError;

/// Components the host knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Weather card
    Weather,
}

impl ComponentKind {
    /// Look up a component by its registered name
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            WEATHER_COMPONENT => Some(Self::Weather),
            _ => None,
        }
    }
}

/// Hosts mounted cards keyed by message id
#[derive(Debug)]
pub struct CardHost {
    cards: HashMap<Uuid, WeatherCard>,
    order: Vec<Uuid>,
    auto_mount: bool,
}

impl Default for CardHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CardHost {
    /// Create a host that mounts new cards as soon as they arrive
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: HashMap::new(),
            order: Vec::new(),
            auto_mount: true,
        }
    }

    /// Create a host that leaves mounting to explicit [`CardHost::mount`] calls
    #[must_use]
    pub fn manual_mount() -> Self {
        Self {
            auto_mount: false,
            ..Self::new()
        }
    }

    /// Apply a UI message and return the resulting render description
    ///
    /// An unseen id creates a fresh card; a known id updates the existing
    /// card's record without touching its reveal state.
    pub fn apply(&mut self, message: &UiMessage) -> Result<CardRenderDescription, ApplicationError> {
        let Some(ComponentKind::Weather) = ComponentKind::resolve(&message.name) else {
            warn!(name = %message.name, id = %message.id, "No component registered");
            return Err(ApplicationError::UnknownComponent(message.name.clone()));
        };

        let record = WeatherRecord::from_props(&message.props)?;

        if let Some(card) = self.cards.get_mut(&message.id) {
            debug!(id = %message.id, city = %record.city, "Updating mounted card");
            card.update(record);
            return Ok(card.render());
        }

        debug!(id = %message.id, city = %record.city, "Creating card");
        let mut card = WeatherCard::new(record);
        if self.auto_mount {
            card.mount();
        }
        let description = card.render();
        self.cards.insert(message.id, card);
        self.order.push(message.id);
        Ok(description)
    }

    /// Fire the mount trigger for a hosted card
    ///
    /// Returns `true` only when the card moved from `Hidden` to `Visible`.
    pub fn mount(&mut self, id: Uuid) -> bool {
        self.cards.get_mut(&id).is_some_and(WeatherCard::mount)
    }

    /// Drop a hosted card; a later message with the same id starts over
    pub fn unmount(&mut self, id: Uuid) -> bool {
        if self.cards.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        debug!(id = %id, "Card unmounted");
        true
    }

    /// Render description of one hosted card
    #[must_use]
    pub fn render(&self, id: Uuid) -> Option<CardRenderDescription> {
        self.cards.get(&id).map(WeatherCard::render)
    }

    /// Render descriptions of all hosted cards, oldest first
    #[must_use]
    pub fn cards(&self) -> Vec<CardRenderDescription> {
        self.order
            .iter()
            .filter_map(|id| self.cards.get(id))
            .map(WeatherCard::render)
            .collect()
    }

    /// Number of hosted cards
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no card is hosted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
