//! Weather adapter - Implements WeatherSourcePort using integration_weather

use application::error::ApplicationError;
use application::ports::{SourcedWeather, WeatherSourcePort};
use integration_weather::{DemoWeatherClient, WeatherClient, WeatherError};
use tracing::{debug, instrument};

/// Adapter over the offline demo dataset
///
/// Only feeds the demo flow; cards rendered from caller-supplied records
/// never pass through it.
#[derive(Debug, Clone)]
pub struct DemoWeatherAdapter {
    client: DemoWeatherClient,
}

impl DemoWeatherAdapter {
    /// Create an adapter over the bundled records
    pub fn new() -> Result<Self, ApplicationError> {
        let client = DemoWeatherClient::new().map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Create an adapter over an existing client
    #[must_use]
    pub const fn with_client(client: DemoWeatherClient) -> Self {
        Self { client }
    }

    fn map_error(err: WeatherError) -> ApplicationError {
        ApplicationError::Source(err.to_string())
    }
}

impl WeatherSourcePort for DemoWeatherAdapter {
    #[instrument(skip(self))]
    fn lookup(&self, request: &str) -> Result<SourcedWeather, ApplicationError> {
        let reply = self.client.lookup(request).map_err(Self::map_error)?;
        debug!(
            city = %reply.record.city,
            condition = %reply.record.condition,
            matched = reply.requested_city.is_some(),
            "Demo record selected"
        );

        Ok(SourcedWeather {
            record: reply.record,
            requested_city: reply.requested_city,
            reply: reply.reply,
        })
    }

    fn cities(&self) -> Vec<String> {
        self.client.cities()
    }
}
