//! Adapters implementing application ports

mod card_renderer_adapter;
mod weather_adapter;

pub use card_renderer_adapter::TemplateCardRenderer;
pub use weather_adapter::DemoWeatherAdapter;
