//! Bundled demo records

use domain::WeatherRecord;

/// The five demo cities shipped with the client
#[must_use]
pub fn bundled_records() -> Vec<WeatherRecord> {
    vec![
        WeatherRecord::new("北京", "晴天")
            .with_temperature("22°C")
            .with_humidity("45%")
            .with_wind_speed("3km/h")
            .with_description("今天北京天气晴朗，温度适宜，适合外出活动。"),
        WeatherRecord::new("上海", "多云")
            .with_temperature("18°C")
            .with_humidity("68%")
            .with_wind_speed("5km/h")
            .with_description("上海今天多云转阴，温度稍凉，建议增添衣物。"),
        WeatherRecord::new("深圳", "小雨")
            .with_temperature("26°C")
            .with_humidity("78%")
            .with_wind_speed("7km/h")
            .with_description("深圳今天有小雨，湿度较高，出门记得带伞。"),
        WeatherRecord::new("广州", "阴天")
            .with_temperature("24°C")
            .with_humidity("72%")
            .with_wind_speed("4km/h")
            .with_description("广州今天阴天，温度舒适，适合室内活动。"),
        WeatherRecord::new("杭州", "晴天")
            .with_temperature("20°C")
            .with_humidity("55%")
            .with_wind_speed("6km/h")
            .with_description("杭州今天晴空万里，温度宜人，是游览的好天气。"),
    ]
}
