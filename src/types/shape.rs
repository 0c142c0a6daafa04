//! Shapes drawn on the map surface while and after an area is selected.

use crate::types::bounding_box::BoundingBox;
use crate::types::geo_point::GeoPoint;
use serde::{Deserialize, Serialize};

/// A selection outline.
///
/// Rectangles are defined by two opposite corners; polygons by their vertices in
/// click order. The selection result of either is its [`BoundingBox`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    Rectangle { corners: [GeoPoint; 2] },
    Polygon { vertices: Vec<GeoPoint> },
}

impl Shape {
    pub fn rectangle(first: GeoPoint, second: GeoPoint) -> Self {
        Shape::Rectangle {
            corners: [first, second],
        }
    }

    /// Builds a polygon, or `None` if fewer than three vertices are given.
    pub fn polygon(vertices: Vec<GeoPoint>) -> Option<Self> {
        (vertices.len() >= 3).then_some(Shape::Polygon { vertices })
    }

    pub fn points(&self) -> &[GeoPoint] {
        match self {
            Shape::Rectangle { corners } => corners,
            Shape::Polygon { vertices } => vertices,
        }
    }

    /// The envelope of the shape; `None` only for a polygon built without vertices.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points())
    }
}
