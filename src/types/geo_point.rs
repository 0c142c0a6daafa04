//! Defines [`GeoPoint`], the latitude/longitude pair recorded for every map click.

use crate::selector::error::SelectorError;
use haversine::{distance, Location as HaversineLocation, Units};
use serde::{Deserialize, Serialize};

/// A geographical coordinate in decimal degrees.
///
/// Latitude must lie within `[-90, 90]`. Longitude only has to be finite: map
/// surfaces that wrap around the antimeridian report longitudes outside
/// `[-180, 180]`, and those are kept as delivered so that bounding boxes stay
/// consistent with what the user sees.
///
/// # Examples
///
/// ```
/// use areacast::GeoPoint;
///
/// let amsterdam = GeoPoint::new(52.37, 4.90).unwrap();
/// let utrecht = GeoPoint::new(52.09, 5.12).unwrap();
/// assert!(amsterdam.distance_km(&utrecht) < 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new `GeoPoint`, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidCoordinate`] if either value is not finite
    /// or the latitude falls outside `[-90, 90]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SelectorError> {
        if !latitude.is_finite() || !longitude.is_finite() || !(-90.0..=90.0).contains(&latitude)
        {
            return Err(SelectorError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in kilometers (haversine formula).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        distance(self.to_haversine(), other.to_haversine(), Units::Kilometers)
    }

    fn to_haversine(self) -> HaversineLocation {
        HaversineLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
