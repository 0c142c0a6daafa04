//! The explicit state of one area-selection interaction.

use crate::i18n::message_key::MessageKey;
use crate::selector::effect::{CleanupTicket, MarkerId, OverlayId};
use crate::types::geo_point::GeoPoint;
use serde::{Deserialize, Serialize};

/// Which outline the user draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// Two clicks span opposite corners of an axis-aligned rectangle.
    Rectangle,
    /// Three or more clicks outline a polygon, closed by the vertex cap or by
    /// clicking near the first vertex.
    #[default]
    Polygon,
}

impl SelectionMode {
    /// Number of points needed before a shape can be built.
    pub fn min_points(&self) -> usize {
        match self {
            SelectionMode::Rectangle => 2,
            SelectionMode::Polygon => 3,
        }
    }

    /// Message telling the user how many more points the shape needs.
    pub fn progress_message(&self) -> MessageKey {
        match self {
            SelectionMode::Rectangle => MessageKey::ClickCorner,
            SelectionMode::Polygon => MessageKey::ClickPoint,
        }
    }
}

/// Where the selector is within one selection, derived from [`SelectorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No points are buffered.
    Idle,
    /// Some points are buffered and the shape is not complete yet.
    Collecting,
    /// A polygon was finalized and its markers are still shown until the ticket is due.
    Completed(CleanupTicket),
}

/// Point buffer, marker bookkeeping and overlay of the selector.
///
/// Identifiers for markers, overlays and cleanup tickets come from one
/// monotonically increasing counter, so they never repeat within a state's
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorState {
    mode: SelectionMode,
    pub(crate) points: Vec<(MarkerId, GeoPoint)>,
    pub(crate) overlay: Option<OverlayId>,
    pub(crate) pending_cleanup: Option<CleanupTicket>,
    next_id: u64,
}

impl SelectorState {
    /// Creates an empty state.
    ///
    /// # Arguments
    ///
    /// * `mode` - The [`SelectionMode`] every click of this state is interpreted in.
    ///
    /// # Returns
    ///
    /// A state in [`Phase::Idle`] whose identifiers start at 1.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            points: Vec::new(),
            overlay: None,
            pending_cleanup: None,
            next_id: 1,
        }
    }

    /// Drops the buffered points, the overlay and any pending cleanup.
    ///
    /// The identifier counter keeps running, so markers, overlays and cleanup
    /// tickets issued after a reset never collide with earlier ones.
    pub fn reset(&mut self) {
        self.points.clear();
        self.overlay = None;
        self.pending_cleanup = None;
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        match self.pending_cleanup {
            Some(ticket) => Phase::Completed(ticket),
            None if self.points.is_empty() => Phase::Idle,
            None => Phase::Collecting,
        }
    }

    /// The buffered points in click order.
    pub fn points(&self) -> Vec<GeoPoint> {
        self.points.iter().map(|(_, point)| *point).collect()
    }

    /// Number of buffered points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Markers currently drawn for the buffered points.
    pub fn markers(&self) -> Vec<MarkerId> {
        self.points.iter().map(|(id, _)| *id).collect()
    }

    /// The overlay currently drawn, if any.
    pub fn overlay(&self) -> Option<OverlayId> {
        self.overlay
    }

    pub(crate) fn push(&mut self, point: GeoPoint) -> MarkerId {
        let id = MarkerId(self.next());
        self.points.push((id, point));
        id
    }

    pub(crate) fn take_markers(&mut self) -> Vec<MarkerId> {
        self.points.drain(..).map(|(id, _)| id).collect()
    }

    pub(crate) fn next_overlay_id(&mut self) -> OverlayId {
        OverlayId(self.next())
    }

    pub(crate) fn next_ticket(&mut self) -> CleanupTicket {
        CleanupTicket(self.next())
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}
