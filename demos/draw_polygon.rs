//! Drives an area selector against a scripted map that prints what it draws.

use areacast::{
    ClickEvent, Dashboard, DashboardError, ExportFormat, GeoPoint, MapSurface, MarkerId,
    NotificationLevel, Notifier, OverlayId, SelectionMode, Shape, SubscriptionId,
};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Clicks around Madrid; the fourth one hits the vertex cap.
const CLICKS: [(f64, f64); 4] = [(40.4, -3.7), (41.6, -0.9), (39.5, -0.4), (38.3, -3.1)];

struct PrintingSurface;

impl MapSurface for PrintingSurface {
    fn subscribe_clicks(&mut self, sink: UnboundedSender<ClickEvent>) -> SubscriptionId {
        tokio::spawn(async move {
            for (lat, lng) in CLICKS {
                tokio::time::sleep(Duration::from_millis(100)).await;
                println!("click  ({lat}, {lng})");
                if sink.send(ClickEvent::at(lat, lng)).is_err() {
                    return;
                }
            }
            // Keep the stream open long enough for the markers to be cleaned up.
            tokio::time::sleep(Duration::from_millis(800)).await;
        });
        SubscriptionId(1)
    }

    fn unsubscribe_clicks(&mut self, subscription: SubscriptionId) {
        println!("unsubscribe {:?}", subscription);
    }

    fn add_marker(&mut self, id: MarkerId, point: GeoPoint) {
        println!(
            "marker {} at ({:.2}, {:.2})",
            id.0,
            point.latitude(),
            point.longitude()
        );
    }

    fn remove_marker(&mut self, id: MarkerId) {
        println!("remove marker {}", id.0);
    }

    fn draw_overlay(&mut self, id: OverlayId, shape: &Shape) {
        println!("overlay {} with {} points", id.0, shape.points().len());
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        println!("remove overlay {}", id.0);
    }
}

struct PrintingNotifier;

impl Notifier for PrintingNotifier {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        println!("[{:?}] {}", level, message);
    }
}

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    let mut dashboard = Dashboard::builder()
        .notifier(Box::new(PrintingNotifier))
        .build();
    let mut selector = dashboard
        .area_selector()
        .mode(SelectionMode::Polygon)
        .call()?;

    selector.activate(Box::new(PrintingSurface))?;
    selector.run().await?;
    selector.deactivate();

    println!("selection: {:?}", dashboard.selection());
    if let Some(stats) = dashboard.stats() {
        println!("average temperature: {}°C", stats.temperature.average_c);
    }

    let download = dashboard.download(ExportFormat::Csv)?;
    println!("{}", String::from_utf8_lossy(&download.bytes));
    Ok(())
}
