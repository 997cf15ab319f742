//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod card_renderer_port;
mod weather_source_port;

#[cfg(test)]
pub use card_renderer_port::MockCardRendererPort;
pub use card_renderer_port::{CardRendererPort, RenderFormat};
#[cfg(test)]
pub use weather_source_port::MockWeatherSourcePort;
pub use weather_source_port::{SourcedWeather, WeatherSourcePort};
