//! Collaborator seams of the selector: the map surface and the notification surface.

use crate::selector::effect::{MarkerId, NotificationLevel, OverlayId};
use crate::selector::event::ClickEvent;
use crate::types::geo_point::GeoPoint;
use crate::types::shape::Shape;
use log::{error, info};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

/// Handle returned by [`MapSurface::subscribe_clicks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// A rendered map that reports clicks and draws selection artifacts.
///
/// Implementations wrap the actual mapping library. Identifiers are chosen by
/// the selector; the surface only has to remember which artifact each one
/// refers to.
pub trait MapSurface: Send {
    /// Starts forwarding click events into `sink` until unsubscribed.
    fn subscribe_clicks(&mut self, sink: UnboundedSender<ClickEvent>) -> SubscriptionId;

    fn unsubscribe_clicks(&mut self, subscription: SubscriptionId);

    fn add_marker(&mut self, id: MarkerId, point: GeoPoint);

    /// Removing an unknown marker is a no-op.
    fn remove_marker(&mut self, id: MarkerId);

    fn draw_overlay(&mut self, id: OverlayId, shape: &Shape);

    /// Removing an unknown overlay is a no-op.
    fn remove_overlay(&mut self, id: OverlayId);
}

/// Displays transient messages ("toasts") to the user.
pub trait Notifier: Send {
    fn notify(&mut self, level: NotificationLevel, message: &str);
}

/// Sends notifications to the `log` facade. Used when no notifier is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info | NotificationLevel::Success => info!("{}", message),
            NotificationLevel::Error => error!("{}", message),
        }
    }
}

/// A [`Notifier`] whose clones all forward to one inner notifier.
///
/// Lets a dashboard and its selectors raise toasts on the same surface.
#[derive(Clone)]
pub struct SharedNotifier {
    inner: Arc<Mutex<Box<dyn Notifier>>>,
}

impl SharedNotifier {
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(notifier)),
        }
    }
}

impl Notifier for SharedNotifier {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.notify(level, message);
    }
}
