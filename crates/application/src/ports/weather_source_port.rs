//! Weather source port
//!
//! Defines how a weather record is obtained for a free-text request. Cards
//! never call this port; it only feeds the services that create them.

use domain::WeatherRecord;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Record picked by a weather source, plus the reply to show alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedWeather {
    /// Record to display
    pub record: WeatherRecord,
    /// City the request asked for, if one was recognized
    pub requested_city: Option<String>,
    /// Short reply text accompanying the card
    pub reply: String,
}

/// Port for weather record lookups
#[cfg_attr(test, automock)]
pub trait WeatherSourcePort: Send + Sync {
    /// Pick a record for a free-text request
    fn lookup(&self, request: &str) -> Result<SourcedWeather, ApplicationError>;

    /// Cities this source has records for
    fn cities(&self) -> Vec<String>;
}
