//! UI message entity
//!
//! Producers push `{id, name, props}` envelopes; `name` picks the component
//! and `props` carries its data. The same `id` addresses the same mounted
//! component across updates.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use super::WeatherRecord;
use crate::errors::DomainError;

/// Component name under which weather cards are registered
pub const WEATHER_COMPONENT: &str = "weather";

/// A UI component message pushed by a data producer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiMessage {
    /// Identifies the component instance this message targets
    pub id: Uuid,
    /// Registered component name
    pub name: String,
    /// Component properties
    #[serde(default)]
    pub props: Value,
}

impl UiMessage {
    /// Create a message with a fresh id
    pub fn new(name: impl Into<String>, props: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            props,
        }
    }

    /// Create a weather card message carrying the given record
    pub fn weather(record: &WeatherRecord) -> Self {
        Self::new(
            WEATHER_COMPONENT,
            json!({
                "city": record.city,
                "temperature": record.temperature,
                "condition": record.condition,
                "humidity": record.humidity,
                "windSpeed": record.wind_speed,
                "description": record.description,
            }),
        )
    }

    /// Address an existing component instance
    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Parse a batch of messages from a JSON array
    pub fn batch_from_json(json: &str) -> Result<Vec<Self>, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidMessage(e.to_string()))
    }
}
