use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirQuality {
    Good,
    Moderate,
    Poor,
}

impl AirQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            AirQuality::Good => "Good",
            AirQuality::Moderate => "Moderate",
            AirQuality::Poor => "Poor",
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A row of the downloadable mock dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub date: NaiveDate,
    /// Degrees Celsius.
    pub temperature: i32,
    /// Millimeters.
    pub precipitation: i32,
    /// Kilometers per hour.
    pub wind_speed: i32,
    pub air_quality: AirQuality,
}

/// The fixed records offered for download.
pub fn mock_records() -> Vec<WeatherRecord> {
    [
        (1, 28, 45, 12, AirQuality::Good),
        (2, 30, 38, 15, AirQuality::Moderate),
        (3, 32, 52, 18, AirQuality::Good),
    ]
    .into_iter()
    .filter_map(|(month, temperature, precipitation, wind_speed, air_quality)| {
        Some(WeatherRecord {
            date: NaiveDate::from_ymd_opt(2024, month, 1)?,
            temperature,
            precipitation,
            wind_speed,
            air_quality,
        })
    })
    .collect()
}
