//! Tunable limits of the area-selection interaction.

use crate::selector::error::SelectorError;
use bon::Builder;
use std::time::Duration;

/// Default number of vertices at which a polygon is finalized.
pub const DEFAULT_MAX_POINTS: usize = 4;
/// Default auto-close radius around the first polygon vertex.
pub const DEFAULT_CLOSE_DISTANCE_KM: f64 = 50.0;
/// Default delay before the markers of a finalized polygon are removed.
pub const DEFAULT_CLEANUP_DELAY: Duration = Duration::from_millis(500);

/// Configuration for [`crate::AreaSelector`] and [`crate::selector::machine::transition`].
///
/// Built with a builder; every field has a default.
///
/// # Examples
///
/// ```
/// use areacast::SelectorConfig;
/// use std::time::Duration;
///
/// let config = SelectorConfig::builder()
///     .max_points(6)
///     .cleanup_delay(Duration::from_millis(250))
///     .build();
/// assert_eq!(config.close_distance_km, 50.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SelectorConfig {
    /// Hard cap on polygon vertices. Must be at least 3.
    #[builder(default = DEFAULT_MAX_POINTS)]
    pub max_points: usize,
    /// A polygon click within this great-circle distance of the first vertex closes it.
    #[builder(default = DEFAULT_CLOSE_DISTANCE_KM)]
    pub close_distance_km: f64,
    #[builder(default = DEFAULT_CLEANUP_DELAY)]
    pub cleanup_delay: Duration,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<(), SelectorError> {
        if self.max_points < 3 {
            return Err(SelectorError::InvalidConfig(format!(
                "max_points must be at least 3, got {}",
                self.max_points
            )));
        }
        if !self.close_distance_km.is_finite() || self.close_distance_km <= 0.0 {
            return Err(SelectorError::InvalidConfig(format!(
                "close_distance_km must be a positive distance, got {}",
                self.close_distance_km
            )));
        }
        Ok(())
    }
}
