//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Tera based card
//! renderer and the demo weather source. Also holds configuration loading
//! and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, CardConfig, Environment};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
pub use templates::{CardTemplate, CardTransition, TemplateConfig, TemplateEngine, TemplateError};
