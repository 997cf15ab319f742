//! Demo weather client
//!
//! Answers free-text requests from the bundled dataset. A request naming a
//! known city gets that city's record; anything else gets a random one.

use domain::WeatherRecord;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::city_matcher::CityMatcher;
use crate::dataset::bundled_records;

/// Demo client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The client holds no records to answer with
    #[error("Dataset is empty")]
    EmptyDataset,

    /// The city matcher could not be built
    #[error("Matcher error: {0}")]
    Matcher(String),
}

/// Answer to a demo request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReply {
    /// Record picked for the request
    pub record: WeatherRecord,
    /// City recognized in the request
    pub requested_city: Option<String>,
    /// Chat-style reply text
    pub reply: String,
}

/// Weather client trait for answering requests
pub trait WeatherClient: Send + Sync {
    /// Pick a record for a free-text request
    fn lookup(&self, request: &str) -> Result<DemoReply, WeatherError>;

    /// Cities the client has records for
    fn cities(&self) -> Vec<String>;
}

/// Client backed by the bundled demo dataset
#[derive(Debug, Clone)]
pub struct DemoWeatherClient {
    records: Vec<WeatherRecord>,
    matcher: CityMatcher,
}

impl DemoWeatherClient {
    /// Create a client over the bundled dataset
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_records(bundled_records())
    }

    /// Create a client over a custom dataset
    pub fn with_records(records: Vec<WeatherRecord>) -> Result<Self, WeatherError> {
        let matcher = CityMatcher::new(records.iter().map(|r| r.city.clone()))?;
        Ok(Self { records, matcher })
    }

    /// Record for an exact city name
    #[must_use]
    pub fn record_for(&self, city: &str) -> Option<&WeatherRecord> {
        self.records.iter().find(|r| r.city == city)
    }

    fn random_record(&self) -> Result<&WeatherRecord, WeatherError> {
        if self.records.is_empty() {
            return Err(WeatherError::EmptyDataset);
        }
        let index = rand::rng().random_range(0..self.records.len());
        Ok(&self.records[index])
    }
}

impl WeatherClient for DemoWeatherClient {
    #[instrument(skip(self))]
    fn lookup(&self, request: &str) -> Result<DemoReply, WeatherError> {
        let requested_city = self.matcher.find(request).map(ToString::to_string);

        let record = match requested_city.as_deref().and_then(|city| self.record_for(city)) {
            Some(record) => record,
            None => {
                debug!("No known city in request, picking a random record");
                self.random_record()?
            },
        };

        Ok(DemoReply {
            reply: format!("🌤️ {}", record.description),
            record: record.clone(),
            requested_city,
        })
    }

    fn cities(&self) -> Vec<String> {
        self.matcher.cities().to_vec()
    }
}
