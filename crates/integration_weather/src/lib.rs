//! Offline demo weather source
//!
//! A bundled dataset of five cities and a matcher that picks the city a
//! free-text request asks about. Intended for demos and offline use only;
//! cards never fall back to this data on their own.

pub mod client;
mod city_matcher;
mod dataset;

pub use city_matcher::CityMatcher;
pub use client::{DemoReply, DemoWeatherClient, WeatherClient, WeatherError};
pub use dataset::bundled_records;
