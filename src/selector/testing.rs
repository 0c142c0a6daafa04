//! In-memory collaborators shared by the selector and dashboard tests.

use crate::selector::area_selector::AreaSelectCallback;
use crate::selector::effect::{MarkerId, NotificationLevel, OverlayId};
use crate::selector::event::ClickEvent;
use crate::selector::surface::{MapSurface, Notifier, SubscriptionId};
use crate::types::geo_point::GeoPoint;
use crate::types::selection_result::SelectionResult;
use crate::types::shape::Shape;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Default)]
struct SurfaceRecord {
    markers: BTreeMap<MarkerId, GeoPoint>,
    overlays: BTreeMap<OverlayId, Shape>,
    subscribers: HashMap<SubscriptionId, UnboundedSender<ClickEvent>>,
    next_subscription: u64,
    max_overlays_seen: usize,
}

/// A map surface that records what is drawn on it. Clones share the record.
#[derive(Clone, Default)]
pub(crate) struct RecordingSurface {
    record: Arc<Mutex<SurfaceRecord>>,
}

impl RecordingSurface {
    /// Delivers a click to every subscriber.
    pub fn click(&self, lat: f64, lng: f64) {
        let record = self.record.lock().unwrap();
        for sink in record.subscribers.values() {
            let _ = sink.send(ClickEvent::at(lat, lng));
        }
    }

    /// Drops every subscriber's sender, ending their click streams.
    pub fn close_clicks(&self) {
        self.record.lock().unwrap().subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.record.lock().unwrap().subscribers.len()
    }

    pub fn marker_count(&self) -> usize {
        self.record.lock().unwrap().markers.len()
    }

    pub fn overlay_count(&self) -> usize {
        self.record.lock().unwrap().overlays.len()
    }

    pub fn max_overlays_seen(&self) -> usize {
        self.record.lock().unwrap().max_overlays_seen
    }
}

impl MapSurface for RecordingSurface {
    fn subscribe_clicks(&mut self, sink: UnboundedSender<ClickEvent>) -> SubscriptionId {
        let mut record = self.record.lock().unwrap();
        record.next_subscription += 1;
        let id = SubscriptionId(record.next_subscription);
        record.subscribers.insert(id, sink);
        id
    }

    fn unsubscribe_clicks(&mut self, subscription: SubscriptionId) {
        self.record.lock().unwrap().subscribers.remove(&subscription);
    }

    fn add_marker(&mut self, id: MarkerId, point: GeoPoint) {
        self.record.lock().unwrap().markers.insert(id, point);
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.record.lock().unwrap().markers.remove(&id);
    }

    fn draw_overlay(&mut self, id: OverlayId, shape: &Shape) {
        let mut record = self.record.lock().unwrap();
        record.overlays.insert(id, shape.clone());
        record.max_overlays_seen = record.max_overlays_seen.max(record.overlays.len());
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.record.lock().unwrap().overlays.remove(&id);
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(NotificationLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationLevel, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

/// Collects every result passed to an `on_area_select` callback.
#[derive(Clone, Default)]
pub(crate) struct Results {
    results: Arc<Mutex<Vec<SelectionResult>>>,
}

impl Results {
    pub fn callback(&self) -> AreaSelectCallback {
        let results = Arc::clone(&self.results);
        Box::new(move |result| results.lock().unwrap().push(result))
    }

    pub fn all(&self) -> Vec<SelectionResult> {
        self.results.lock().unwrap().clone()
    }
}
