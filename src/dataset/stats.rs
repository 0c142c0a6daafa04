//! Mock weather statistics shown for a selected area.
//!
//! Every figure here is a fixed demonstration value; no weather data is
//! fetched or computed.

use crate::i18n::catalog::Catalog;
use crate::i18n::message_key::MessageKey;
use crate::types::selection_result::SelectionResult;
use chrono::Month;

/// Qualitative level used for hazard likelihoods and air quality badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub fn message_key(&self) -> MessageKey {
        match self {
            Level::High => MessageKey::High,
            Level::Medium => MessageKey::Medium,
            Level::Low => MessageKey::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSummary {
    pub average_c: f64,
    pub maximum_c: f64,
    pub minimum_c: f64,
}

/// One point of the temperature trend chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTemperature {
    pub month: Month,
    pub temperature_c: f64,
    /// Probability (percent) attached to the month's forecast.
    pub probability: u8,
}

/// One point of the precipitation chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPrecipitation {
    pub month: Month,
    pub rain_mm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// One of the hazard keys, e.g. [`MessageKey::ExtremeHeat`].
    pub hazard: MessageKey,
    pub likelihood: Level,
    pub probability: u8,
}

impl Prediction {
    /// Badge text such as `"High - 75%"`.
    pub fn badge(&self, catalog: &Catalog) -> String {
        format!(
            "{} - {}%",
            catalog.text(self.likelihood.message_key()),
            self.probability
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub wind_speed_kmh: f64,
    pub humidity_percent: u8,
    pub pressure_hpa: f64,
    pub air_quality: Level,
}

/// Everything the statistics sidebar displays for a selected area.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherStats {
    pub temperature: TemperatureSummary,
    pub temperature_trend: Vec<MonthlyTemperature>,
    pub precipitation: Vec<MonthlyPrecipitation>,
    pub predictions: Vec<Prediction>,
    pub conditions: Conditions,
}

const TREND_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

impl WeatherStats {
    /// The demonstration dataset.
    pub fn mock() -> Self {
        let temperatures = [15.0, 18.0, 22.0, 26.0, 30.0, 33.0];
        let probabilities = [65, 60, 55, 70, 75, 80];
        let rain = [45.0, 38.0, 52.0, 65.0, 78.0, 82.0];

        let temperature_trend = TREND_MONTHS
            .iter()
            .zip(temperatures)
            .zip(probabilities)
            .map(|((month, temperature_c), probability)| MonthlyTemperature {
                month: *month,
                temperature_c,
                probability,
            })
            .collect();
        let precipitation = TREND_MONTHS
            .iter()
            .zip(rain)
            .map(|(month, rain_mm)| MonthlyPrecipitation {
                month: *month,
                rain_mm,
            })
            .collect();

        Self {
            temperature: TemperatureSummary {
                average_c: 28.0,
                maximum_c: 35.0,
                minimum_c: 18.0,
            },
            temperature_trend,
            precipitation,
            predictions: vec![
                Prediction {
                    hazard: MessageKey::ExtremeHeat,
                    likelihood: Level::High,
                    probability: 75,
                },
                Prediction {
                    hazard: MessageKey::HeavyRain,
                    likelihood: Level::Medium,
                    probability: 45,
                },
                Prediction {
                    hazard: MessageKey::StrongWind,
                    likelihood: Level::Low,
                    probability: 20,
                },
            ],
            conditions: Conditions {
                wind_speed_kmh: 12.0,
                humidity_percent: 68,
                pressure_hpa: 1013.0,
                air_quality: Level::Medium,
            },
        }
    }

    /// Statistics for `selection`, or `None` while no area is selected.
    pub fn for_selection(selection: &SelectionResult) -> Option<Self> {
        selection.is_selected().then(Self::mock)
    }
}

/// Three-letter chart label for `month`, e.g. `"Jan"`.
pub fn month_label(month: Month) -> &'static str {
    &month.name()[..3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::bounding_box::BoundingBox;
    use crate::Language;

    #[test]
    fn test_no_stats_without_area() {
        assert!(WeatherStats::for_selection(&SelectionResult::None).is_none());
        let area = SelectionResult::Area(BoundingBox {
            min_lat: 0.0,
            min_lng: 0.0,
            max_lat: 1.0,
            max_lng: 1.0,
        });
        assert_eq!(WeatherStats::for_selection(&area), Some(WeatherStats::mock()));
    }

    #[test]
    fn test_mock_series() {
        let stats = WeatherStats::mock();
        let labels: Vec<_> = stats
            .temperature_trend
            .iter()
            .map(|t| month_label(t.month))
            .collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(stats.temperature_trend[5].temperature_c, 33.0);
        assert_eq!(stats.temperature_trend[3].probability, 70);
        assert_eq!(stats.precipitation[4].rain_mm, 78.0);
        assert_eq!(stats.temperature.average_c, 28.0);
        assert_eq!(stats.conditions.pressure_hpa, 1013.0);
    }

    #[test]
    fn test_prediction_badges() {
        let stats = WeatherStats::mock();
        let english = Catalog::new(Language::English);
        let spanish = Catalog::new(Language::Spanish);
        assert_eq!(stats.predictions[0].badge(&english), "High - 75%");
        assert_eq!(stats.predictions[1].badge(&spanish), "Media - 45%");
        assert_eq!(english.text(stats.predictions[2].hazard), "Strong Wind");
    }
}
