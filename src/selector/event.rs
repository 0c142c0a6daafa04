//! Inputs to the selection state machine.

use crate::selector::effect::CleanupTicket;
use crate::selector::error::SelectorError;
use crate::types::geo_point::GeoPoint;
use serde::{Deserialize, Serialize};

/// A click as delivered by the map surface.
///
/// Surfaces may report clicks outside the rendered map (or before their
/// projection is ready) without a coordinate, so both parts are optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClickEvent {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl ClickEvent {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// Resolves the click to a validated [`GeoPoint`].
    pub fn point(&self) -> Result<GeoPoint, SelectorError> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
            _ => Err(SelectorError::MissingCoordinate),
        }
    }
}

impl From<GeoPoint> for ClickEvent {
    fn from(point: GeoPoint) -> Self {
        ClickEvent::at(point.latitude(), point.longitude())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectorEvent {
    /// The user clicked the map.
    Click(ClickEvent),
    /// The user pressed "clear area".
    Clear,
    /// The visual-feedback delay of a finalized polygon has elapsed.
    CleanupDue(CleanupTicket),
}
