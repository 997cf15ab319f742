//! Property-based tests for domain entities
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{UiMessage, WeatherRecord};
use proptest::prelude::*;
use serde_json::json;

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,16}"
}

fn filled_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9\u{4e00}-\u{4e2f}%°/]{1,12}"
}

// ============================================================================
// WeatherRecord Property Tests
// ============================================================================

mod weather_record_tests {
    use super::*;

    proptest! {
        #[test]
        fn props_pass_through_verbatim(
            city in text(),
            temperature in text(),
            condition in text(),
            humidity in text(),
            wind in text(),
            description in text()
        ) {
            let props = json!({
                "city": city,
                "temperature": temperature,
                "condition": condition,
                "humidity": humidity,
                "windSpeed": wind,
                "description": description,
            });

            let record = WeatherRecord::from_props(&props).unwrap();
            prop_assert_eq!(record.city, city);
            prop_assert_eq!(record.temperature, temperature);
            prop_assert_eq!(record.condition, condition);
            prop_assert_eq!(record.humidity, humidity);
            prop_assert_eq!(record.wind_speed, wind);
            prop_assert_eq!(record.description, description);
        }

        #[test]
        fn filled_records_pass_presence_check(
            city in filled_text(),
            temperature in filled_text(),
            condition in filled_text(),
            humidity in filled_text(),
            wind in filled_text(),
            description in text()
        ) {
            let record = WeatherRecord::new(city, condition)
                .with_temperature(temperature)
                .with_humidity(humidity)
                .with_wind_speed(wind)
                .with_description(description);

            prop_assert!(record.missing_fields().is_empty());
            prop_assert!(record.check_presence().is_ok());
        }

        #[test]
        fn blank_city_always_fails_presence_check(
            blanks in "[ \t]{0,4}",
            condition in filled_text()
        ) {
            let record = WeatherRecord::new(blanks, condition);
            prop_assert!(record.check_presence().is_err());
            prop_assert_eq!(record.missing_fields().first().copied(), Some("city"));
        }

        #[test]
        fn weather_message_preserves_record(
            city in text(),
            condition in text(),
            wind in text()
        ) {
            let record = WeatherRecord::new(city, condition).with_wind_speed(wind);
            let message = UiMessage::weather(&record);

            prop_assert_eq!(WeatherRecord::from_props(&message.props).unwrap(), record);
        }
    }
}
