//! Weather record entity
//!
//! The record a data producer hands to a card. Every field is an opaque,
//! pre-formatted display string; only `condition` is ever used as a key.
//!
//! # Examples
//!
//! ```
//! use domain::WeatherRecord;
//!
//! let record = WeatherRecord::from_json(r#"{"city":"北京","condition":"晴天","wind":"3km/h"}"#)
//!     .expect("valid json");
//! assert_eq!(record.wind_speed, "3km/h");
//! assert_eq!(record.temperature, "");
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DomainError;

/// Weather data for one city, as supplied by the producer
///
/// Missing or `null` fields read as empty strings. Numbers and booleans are
/// kept as their textual form, since nothing here interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct WeatherRecord {
    /// City label
    pub city: String,
    /// Pre-formatted temperature, e.g. `22°C`
    pub temperature: String,
    /// Condition label, e.g. `晴天`
    pub condition: String,
    /// Pre-formatted humidity, e.g. `45%`
    pub humidity: String,
    /// Pre-formatted wind speed, e.g. `3km/h`
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    /// Free-form description, may be empty
    pub description: String,
}

/// Wire shape of a record; `wind` is the older name of `windSpeed`
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    #[serde(deserialize_with = "display_text")]
    city: String,
    #[serde(deserialize_with = "display_text")]
    temperature: String,
    #[serde(deserialize_with = "display_text")]
    condition: String,
    #[serde(deserialize_with = "display_text")]
    humidity: String,
    #[serde(rename = "windSpeed", deserialize_with = "display_text")]
    wind_speed: String,
    #[serde(deserialize_with = "display_text")]
    wind: String,
    #[serde(deserialize_with = "display_text")]
    description: String,
}

impl From<RawRecord> for WeatherRecord {
    fn from(raw: RawRecord) -> Self {
        let wind_speed = if raw.wind_speed.is_empty() {
            raw.wind
        } else {
            raw.wind_speed
        };

        Self {
            city: raw.city,
            temperature: raw.temperature,
            condition: raw.condition,
            humidity: raw.humidity,
            wind_speed,
            description: raw.description,
        }
    }
}

impl WeatherRecord {
    /// Field names that must carry text for a complete card
    pub const REQUIRED_FIELDS: [&'static str; 5] =
        ["city", "temperature", "condition", "humidity", "windSpeed"];

    /// Create a record with a city and condition; other fields start empty
    pub fn new(city: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            condition: condition.into(),
            ..Self::default()
        }
    }

    /// Set the temperature text
    #[must_use]
    pub fn with_temperature(mut self, temperature: impl Into<String>) -> Self {
        self.temperature = temperature.into();
        self
    }

    /// Set the humidity text
    #[must_use]
    pub fn with_humidity(mut self, humidity: impl Into<String>) -> Self {
        self.humidity = humidity.into();
        self
    }

    /// Set the wind speed text
    #[must_use]
    pub fn with_wind_speed(mut self, wind_speed: impl Into<String>) -> Self {
        self.wind_speed = wind_speed.into();
        self
    }

    /// Set the description text
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parse a record from a JSON document
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidRecord(e.to_string()))?;
        Self::from_props(&value)
    }

    /// Read a record from UI message props
    ///
    /// Props must be a JSON object; `null` props read as an empty record.
    pub fn from_props(props: &Value) -> Result<Self, DomainError> {
        match props {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => {
                Self::deserialize(props).map_err(|e| DomainError::InvalidRecord(e.to_string()))
            },
            other => Err(DomainError::InvalidRecord(format!(
                "expected an object, found {}",
                json_kind(other)
            ))),
        }
    }

    /// Names of required fields that are empty or whitespace only
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.city,
            &self.temperature,
            &self.condition,
            &self.humidity,
            &self.wind_speed,
        ];

        Self::REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Presence check: fails on the first required field without text
    pub fn check_presence(&self) -> Result<(), DomainError> {
        match self.missing_fields().first().copied() {
            Some(field) => Err(DomainError::MissingField(field)),
            None => Ok(()),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accept any scalar as display text; `null` reads as empty
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected display text, found {other}"
        ))),
    }
}
