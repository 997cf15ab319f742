//! Application services - Card composition and lifecycle

mod card_host;
mod card_service;
pub mod condition_visual_mapper;
mod weather_card;

pub use card_host::{CardHost, ComponentKind};
pub use card_service::{CardOptions, CardService, PresentedCard};
pub use condition_visual_mapper::{
    DEFAULT_BACKGROUND, DEFAULT_ICON, background_for, icon_for, is_known_condition,
    known_conditions, visuals_for,
};
pub use weather_card::{CardRenderDescription, WeatherCard};
