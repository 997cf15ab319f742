//! Domain entities - Records and envelopes passed between producers and cards

mod ui_message;
mod weather_record;

pub use ui_message::{UiMessage, WEATHER_COMPONENT};
pub use weather_record::WeatherRecord;
