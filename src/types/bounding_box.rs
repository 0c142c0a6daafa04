//! Axis-aligned latitude/longitude box reported as the result of a selection.

use crate::types::geo_point::GeoPoint;
use rstar::AABB;
use serde::{Deserialize, Serialize};

/// The min/max latitude and longitude spanned by a set of points.
///
/// Serialized with camelCase keys (`minLat`, `minLng`, `maxLat`, `maxLng`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Computes the envelope of `points`, or `None` when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use areacast::{BoundingBox, GeoPoint};
    ///
    /// let corners = [GeoPoint::new(20.0, 10.0).unwrap(), GeoPoint::new(10.0, 20.0).unwrap()];
    /// let bbox = BoundingBox::from_points(corners.iter()).unwrap();
    /// assert_eq!(bbox.min_lat, 10.0);
    /// assert_eq!(bbox.max_lng, 20.0);
    /// ```
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let corners: Vec<[f64; 2]> = points
            .into_iter()
            .map(|p| [p.latitude(), p.longitude()])
            .collect();
        if corners.is_empty() {
            return None;
        }
        let envelope = AABB::from_points(corners.iter());
        let [min_lat, min_lng] = envelope.lower();
        let [max_lat, max_lng] = envelope.upper();
        Some(Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        })
    }

    /// Whether `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude())
            && (self.min_lng..=self.max_lng).contains(&point.longitude())
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn test_from_points_orders_corners() {
        let points = [pt(20.0, 20.0), pt(10.0, 10.0)];
        let bbox = BoundingBox::from_points(points.iter()).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_lat: 10.0,
                min_lng: 10.0,
                max_lat: 20.0,
                max_lng: 20.0,
            }
        );
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<GeoPoint> = Vec::new();
        assert!(BoundingBox::from_points(points.iter()).is_none());
    }

    #[test]
    fn test_contains_and_center() {
        let points = [pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0)];
        let bbox = BoundingBox::from_points(points.iter()).unwrap();
        assert!(bbox.contains(&pt(0.5, 0.5)));
        assert!(bbox.contains(&pt(1.0, 0.0)));
        assert!(!bbox.contains(&pt(1.5, 0.5)));
        assert_eq!(bbox.center(), (0.5, 0.5));
    }

    #[test]
    fn test_serializes_camel_case() {
        let bbox = BoundingBox {
            min_lat: 1.0,
            min_lng: 2.0,
            max_lat: 3.0,
            max_lng: 4.0,
        };
        let json = serde_json::to_value(bbox).unwrap();
        assert_eq!(json["minLat"], 1.0);
        assert_eq!(json["maxLng"], 4.0);
    }
}
