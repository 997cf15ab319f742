//! Renderer tests through the application port
//!
//! Cards built by the application layer, rendered by the Tera adapter.

use application::{CardRendererPort, CardService, RenderFormat, WeatherCard};
use domain::{RevealState, WeatherRecord};
use infrastructure::{AppConfig, DemoWeatherAdapter, TemplateCardRenderer, TemplateEngine};
use proptest::prelude::*;
use std::sync::Arc;

fn renderer() -> TemplateCardRenderer {
    let config = AppConfig::default();
    let engine = TemplateEngine::with_config(config.templates.clone()).unwrap();
    TemplateCardRenderer::with_engine(engine, config.card.transition())
}

#[test]
fn reveal_follows_the_card_lifecycle() {
    let renderer = renderer();
    let mut card = WeatherCard::new(WeatherRecord::new("北京", "晴天"));

    let before = renderer.render(&card.render(), RenderFormat::Html).unwrap();
    assert!(before.contains(r#"data-reveal="hidden""#));

    card.mount();
    card.update(WeatherRecord::new("北京", "雪"));
    let after = renderer.render(&card.render(), RenderFormat::Html).unwrap();
    assert!(after.contains(r#"data-reveal="visible""#));
    assert!(after.contains("from-blue-200 to-white"));
    assert!(after.contains("❄️"));
}

#[test]
fn demo_flow_renders_through_service() {
    let service = CardService::new(Arc::new(renderer()))
        .with_source(Arc::new(DemoWeatherAdapter::new().unwrap()));

    let (sourced, presented) = service
        .present_request("杭州明天适合出门吗", RenderFormat::Json)
        .unwrap();

    assert_eq!(sourced.requested_city.as_deref(), Some("杭州"));
    assert_eq!(presented.description.reveal, RevealState::Visible);
    let value: serde_json::Value = serde_json::from_str(&presented.output).unwrap();
    assert_eq!(value["city"], "杭州");
    assert_eq!(value["icon"], "☀️");
}

proptest! {
    #[test]
    fn html_never_emits_raw_markup_from_fields(
        city in "[a-z<>&\"' ]{0,24}",
        description in "[a-z<>&\n ]{0,40}",
    ) {
        let record = WeatherRecord::new(format!("<i>{city}"), "多云")
            .with_description(format!("<script>{description}"));
        let html = renderer()
            .render(&WeatherCard::mounted(record).render(), RenderFormat::Html)
            .unwrap();

        prop_assert!(!html.contains("<i>"));
        prop_assert!(!html.contains("<script>"));
        prop_assert!(html.contains("&lt;i&gt;"));
    }

    #[test]
    fn text_output_always_names_the_city(city in "[\u{4e00}-\u{4e2f}]{1,4}") {
        let text = renderer()
            .render(
                &WeatherCard::mounted(WeatherRecord::new(city.clone(), "雾")).render(),
                RenderFormat::Text,
            )
            .unwrap();
        let expected = format!("🌫️ {city} (雾)");
        prop_assert!(text.starts_with(&expected));
    }
}
