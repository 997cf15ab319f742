//! Logging setup
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! human-readable or a JSON formatting layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to install the global subscriber
    #[error("Failed to initialize telemetry: {0}")]
    Init(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Configuration for logging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log filter (e.g. "info", "application=debug"); overrides the caller's default
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetryConfig {
    /// Filter directive to use, given the caller's default
    #[must_use]
    pub fn effective_filter<'a>(&'a self, default_filter: &'a str) -> &'a str {
        self.log_filter
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(default_filter)
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over everything; otherwise the configured filter, and
/// finally `default_filter`. Logs go to stderr so rendered output on stdout
/// stays clean.
pub fn init_telemetry(config: &TelemetryConfig, default_filter: &str) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_filter(default_filter)));

    let json_layer = (config.log_format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text_layer = (config.log_format == LogFormat::Text).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(format = ?config.log_format, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_text_and_caller_filter() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.effective_filter("warn"), "warn");
    }

    #[test]
    fn configured_filter_wins() {
        let config = TelemetryConfig {
            log_filter: Some("application=debug".to_string()),
            log_format: LogFormat::Json,
        };
        assert_eq!(config.effective_filter("warn"), "application=debug");
    }

    #[test]
    fn blank_filter_is_ignored() {
        let config = TelemetryConfig {
            log_filter: Some("  ".to_string()),
            ..TelemetryConfig::default()
        };
        assert_eq!(config.effective_filter("info"), "info");
    }

    #[test]
    fn second_init_fails_cleanly() {
        let config = TelemetryConfig::default();
        let first = init_telemetry(&config, "warn");
        let second = init_telemetry(&config, "warn");
        assert!(first.is_ok() || second.is_err());
        assert!(matches!(second, Err(TelemetryError::Init(_))));
    }

    #[test]
    fn log_format_deserializes_lowercase() {
        let config: TelemetryConfig =
            serde_json::from_str(r#"{"log_format": "json"}"#).expect("deserialize");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.log_filter.is_none());
    }
}
