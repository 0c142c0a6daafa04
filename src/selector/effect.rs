//! Outputs of the selection state machine, applied by [`crate::AreaSelector`].

use crate::i18n::message_key::MessageKey;
use crate::types::geo_point::GeoPoint;
use crate::types::selection_result::SelectionResult;
use crate::types::shape::Shape;
use std::fmt;
use std::time::Duration;

/// Identifies a click marker drawn on the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Identifies a rectangle or polygon overlay drawn on the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Ties a scheduled marker cleanup to the selection that requested it.
/// A ticket that no longer matches the current selection is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CleanupTicket(pub u64);

impl fmt::Display for CleanupTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cleanup#{}", self.0)
    }
}

/// Severity of a [`Notification`], used by the [`crate::Notifier`] to style the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    /// Progress hints, e.g. how many points are still needed.
    Info,
    /// A selection was completed or a download succeeded.
    Success,
    /// An action could not be performed, e.g. downloading without a selection.
    Error,
}

/// A transient message for the user, resolved to text through [`crate::Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub key: MessageKey,
    /// Value for the `{{count}}` placeholder, if the message has one.
    pub count: Option<usize>,
}

impl Notification {
    /// Creates an [`NotificationLevel::Info`] notification for `key`.
    pub fn info(key: MessageKey) -> Self {
        Self {
            level: NotificationLevel::Info,
            key,
            count: None,
        }
    }

    pub fn success(key: MessageKey) -> Self {
        Self {
            level: NotificationLevel::Success,
            key,
            count: None,
        }
    }

    pub fn error(key: MessageKey) -> Self {
        Self {
            level: NotificationLevel::Error,
            key,
            count: None,
        }
    }

    /// Sets the value substituted for `{{count}}` when the message is rendered.
    ///
    /// # Arguments
    ///
    /// * `count` - The number shown in the message, e.g. the points still needed.
    ///
    /// # Returns
    ///
    /// The same notification with its count set.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// A side effect requested by [`crate::transition`].
///
/// Effects carry every identifier the surface needs, so applying them never
/// requires looking at the selector state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Draw a marker for a clicked point.
    AddMarker { id: MarkerId, point: GeoPoint },
    /// Remove these markers. Unknown ids are skipped by the surface.
    RemoveMarkers(Vec<MarkerId>),
    /// Draw the rectangle or polygon outline. Always preceded by the removal
    /// of the previous overlay, if there was one.
    DrawOverlay { id: OverlayId, shape: Shape },
    RemoveOverlay(OverlayId),
    /// Show a message through the [`crate::Notifier`], translated when applied.
    Notify(Notification),
    /// Report to the parent application.
    Emit(SelectionResult),
    /// Deliver [`crate::SelectorEvent::CleanupDue`] with `ticket` once `after` has elapsed.
    ScheduleCleanup { ticket: CleanupTicket, after: Duration },
}
