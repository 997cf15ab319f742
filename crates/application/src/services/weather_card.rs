//! Weather card component
//!
//! Holds one weather record, the visuals derived from its condition, and
//! the reveal state of this card instance. A card is created `Hidden`; the
//! lifecycle harness calls [`WeatherCard::mount`] once it becomes active,
//! which moves it to `Visible` for good. Feeding a new record re-derives the
//! visuals but leaves the reveal state alone.

use domain::{RevealState, VisualAttributes, WeatherRecord};
use serde::Serialize;
use tracing::debug;

use super::condition_visual_mapper::visuals_for;

/// Renderer-agnostic view of one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRenderDescription {
    /// City label
    pub city: String,
    /// Pre-formatted temperature
    pub temperature: String,
    /// Condition label as supplied
    pub condition: String,
    /// Icon derived from the condition
    pub icon: String,
    /// Backdrop gradient derived from the condition
    pub background: String,
    /// Pre-formatted humidity
    pub humidity: String,
    /// Pre-formatted wind speed
    pub wind_speed: String,
    /// Free-form description
    pub description: String,
    /// Whether the revealed treatment applies
    pub reveal: RevealState,
}

/// A single weather card instance
#[derive(Debug, Clone)]
pub struct WeatherCard {
    record: WeatherRecord,
    visuals: VisualAttributes,
    reveal: RevealState,
}

impl WeatherCard {
    /// Create a card in the `Hidden` state
    pub fn new(record: WeatherRecord) -> Self {
        let visuals = visuals_for(&record.condition);
        Self {
            record,
            visuals,
            reveal: RevealState::Hidden,
        }
    }

    /// Create a card and mount it right away
    pub fn mounted(record: WeatherRecord) -> Self {
        let mut card = Self::new(record);
        card.mount();
        card
    }

    /// Mount trigger: `Hidden -> Visible`
    ///
    /// Returns `true` if this call performed the transition. Later calls are
    /// no-ops, the card never goes back to `Hidden`.
    pub fn mount(&mut self) -> bool {
        if self.reveal.is_visible() {
            debug!(city = %self.record.city, "Card already mounted, ignoring");
            return false;
        }

        self.reveal = RevealState::Visible;
        debug!(city = %self.record.city, "Card revealed");
        true
    }

    /// Record-changed trigger: replace the record, keep the reveal state
    pub fn update(&mut self, record: WeatherRecord) {
        if record.condition != self.record.condition {
            self.visuals = visuals_for(&record.condition);
            debug!(
                from = %self.record.condition,
                to = %record.condition,
                icon = %self.visuals.icon,
                "Condition changed, visuals recomputed"
            );
        }
        self.record = record;
    }

    /// Current reveal state
    #[must_use]
    pub const fn reveal_state(&self) -> RevealState {
        self.reveal
    }

    /// Record currently shown
    #[must_use]
    pub const fn record(&self) -> &WeatherRecord {
        &self.record
    }

    /// Visuals derived from the current condition
    #[must_use]
    pub const fn visuals(&self) -> &VisualAttributes {
        &self.visuals
    }

    /// Compose the record and derived visuals into a render description
    #[must_use]
    pub fn render(&self) -> CardRenderDescription {
        CardRenderDescription {
            city: self.record.city.clone(),
            temperature: self.record.temperature.clone(),
            condition: self.record.condition.clone(),
            icon: self.visuals.icon.clone(),
            background: self.visuals.background.clone(),
            humidity: self.record.humidity.clone(),
            wind_speed: self.record.wind_speed.clone(),
            description: self.record.description.clone(),
            reveal: self.reveal,
        }
    }
}
