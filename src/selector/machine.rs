//! The pure transition function of the area-selection interaction.
//!
//! [`transition`] takes the current [`SelectorState`] and one [`SelectorEvent`]
//! and returns the next state along with the [`Effect`]s the caller must apply
//! to the map surface, the notifier and the parent callback. It performs no
//! I/O, which keeps every rule here testable without a rendering surface.

use crate::i18n::message_key::MessageKey;
use crate::selector::config::SelectorConfig;
use crate::selector::effect::{CleanupTicket, Effect, Notification};
use crate::selector::event::{ClickEvent, SelectorEvent};
use crate::selector::state::{SelectionMode, SelectorState};
use crate::types::geo_point::GeoPoint;
use crate::types::selection_result::SelectionResult;
use crate::types::shape::Shape;
use log::{debug, info};

/// Applies `event` to `state`.
///
/// Effects are listed in the order they have to be applied. Overlay removals
/// always precede the drawing of a replacement, so at most one overlay is
/// visible at any time.
///
/// # Examples
///
/// ```
/// use areacast::{transition, ClickEvent, Effect, SelectionMode, SelectionResult,
///     SelectorConfig, SelectorEvent, SelectorState};
///
/// let config = SelectorConfig::default();
/// let state = SelectorState::new(SelectionMode::Rectangle);
/// let (state, _) = transition(state, &SelectorEvent::Click(ClickEvent::at(10.0, 10.0)), &config);
/// let (state, effects) = transition(state, &SelectorEvent::Click(ClickEvent::at(20.0, 20.0)), &config);
///
/// assert!(state.is_empty());
/// assert!(effects.iter().any(|e| matches!(e, Effect::Emit(SelectionResult::Area(_)))));
/// ```
pub fn transition(
    mut state: SelectorState,
    event: &SelectorEvent,
    config: &SelectorConfig,
) -> (SelectorState, Vec<Effect>) {
    let mut effects = Vec::new();
    match *event {
        SelectorEvent::Click(click) => on_click(&mut state, click, config, &mut effects),
        SelectorEvent::Clear => on_clear(&mut state, &mut effects),
        SelectorEvent::CleanupDue(ticket) => on_cleanup_due(&mut state, ticket, &mut effects),
    }
    (state, effects)
}

fn on_click(
    state: &mut SelectorState,
    click: ClickEvent,
    config: &SelectorConfig,
    effects: &mut Vec<Effect>,
) {
    let point = match click.point() {
        Ok(point) => point,
        Err(e) => {
            debug!("Ignoring click: {}", e);
            return;
        }
    };
    if let Some(ticket) = state.pending_cleanup {
        debug!("Ignoring click while {} is pending", ticket);
        return;
    }
    match state.mode() {
        SelectionMode::Rectangle => on_rectangle_click(state, point, effects),
        SelectionMode::Polygon => on_polygon_click(state, point, config, effects),
    }
}

fn on_rectangle_click(state: &mut SelectorState, point: GeoPoint, effects: &mut Vec<Effect>) {
    let id = state.push(point);
    effects.push(Effect::AddMarker { id, point });

    let needed = SelectionMode::Rectangle.min_points();
    if state.len() < needed {
        notify_remaining(SelectionMode::Rectangle, needed - state.len(), effects);
        return;
    }

    let first = state.points[0].1;
    let shape = Shape::rectangle(first, point);
    let Some(bbox) = shape.bounding_box() else {
        return;
    };
    replace_overlay(state, shape, effects);
    effects.push(Effect::Emit(SelectionResult::Area(bbox)));
    effects.push(Effect::RemoveMarkers(state.take_markers()));
    effects.push(Effect::Notify(Notification::success(MessageKey::AreaSelected)));
    info!("Rectangle selection completed: {:?}", bbox);
}

fn on_polygon_click(
    state: &mut SelectorState,
    point: GeoPoint,
    config: &SelectorConfig,
    effects: &mut Vec<Effect>,
) {
    let needed = SelectionMode::Polygon.min_points();

    if state.len() >= needed {
        let first = state.points[0].1;
        let distance_km = first.distance_km(&point);
        if distance_km <= config.close_distance_km {
            debug!(
                "Click {:.1} km from the first vertex closes the polygon",
                distance_km
            );
            finalize_polygon(state, config, effects);
            return;
        }
    }

    if state.len() >= config.max_points {
        debug!("Ignoring click, polygon already has {} points", state.len());
        return;
    }

    let id = state.push(point);
    effects.push(Effect::AddMarker { id, point });

    if state.len() < needed {
        notify_remaining(SelectionMode::Polygon, needed - state.len(), effects);
        return;
    }

    if let Some(shape) = Shape::polygon(state.points()) {
        replace_overlay(state, shape, effects);
    }

    if state.len() >= config.max_points {
        finalize_polygon(state, config, effects);
    }
}

/// The overlay already shows every buffered vertex when this runs; only the
/// result is emitted and the marker cleanup scheduled.
fn finalize_polygon(state: &mut SelectorState, config: &SelectorConfig, effects: &mut Vec<Effect>) {
    let Some(shape) = Shape::polygon(state.points()) else {
        return;
    };
    let Some(bbox) = shape.bounding_box() else {
        return;
    };
    let ticket = state.next_ticket();
    state.pending_cleanup = Some(ticket);

    effects.push(Effect::Emit(SelectionResult::Area(bbox)));
    effects.push(Effect::Notify(Notification::success(MessageKey::AreaSelected)));
    effects.push(Effect::ScheduleCleanup {
        ticket,
        after: config.cleanup_delay,
    });
    info!(
        "Polygon selection with {} vertices completed: {:?}",
        state.len(),
        bbox
    );
}

fn on_clear(state: &mut SelectorState, effects: &mut Vec<Effect>) {
    let markers = state.take_markers();
    if !markers.is_empty() {
        effects.push(Effect::RemoveMarkers(markers));
    }
    if let Some(id) = state.overlay.take() {
        effects.push(Effect::RemoveOverlay(id));
    }
    if let Some(ticket) = state.pending_cleanup.take() {
        debug!("Clear supersedes {}", ticket);
    }
    effects.push(Effect::Emit(SelectionResult::None));
}

fn on_cleanup_due(state: &mut SelectorState, ticket: CleanupTicket, effects: &mut Vec<Effect>) {
    if state.pending_cleanup != Some(ticket) {
        debug!("Ignoring stale {}", ticket);
        return;
    }
    state.pending_cleanup = None;
    let markers = state.take_markers();
    if !markers.is_empty() {
        effects.push(Effect::RemoveMarkers(markers));
    }
}

fn replace_overlay(state: &mut SelectorState, shape: Shape, effects: &mut Vec<Effect>) {
    if let Some(previous) = state.overlay.take() {
        effects.push(Effect::RemoveOverlay(previous));
    }
    let id = state.next_overlay_id();
    state.overlay = Some(id);
    effects.push(Effect::DrawOverlay { id, shape });
}

fn notify_remaining(mode: SelectionMode, remaining: usize, effects: &mut Vec<Effect>) {
    effects.push(Effect::Notify(
        Notification::info(mode.progress_message()).with_count(remaining),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::effect::NotificationLevel;
    use crate::selector::state::Phase;
    use crate::types::bounding_box::BoundingBox;

    fn click(lat: f64, lng: f64) -> SelectorEvent {
        SelectorEvent::Click(ClickEvent::at(lat, lng))
    }

    /// Feeds `events` through the machine, returning the final state and the
    /// effects of every step.
    fn run(
        mode: SelectionMode,
        events: &[SelectorEvent],
        config: &SelectorConfig,
    ) -> (SelectorState, Vec<Vec<Effect>>) {
        let mut state = SelectorState::new(mode);
        let mut steps = Vec::new();
        for event in events {
            let (next, effects) = transition(state, event, config);
            state = next;
            steps.push(effects);
        }
        (state, steps)
    }

    fn emitted(effects: &[Effect]) -> Vec<SelectionResult> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Emit(result) => Some(*result),
                _ => None,
            })
            .collect()
    }

    fn bbox(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> BoundingBox {
        BoundingBox {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    #[test]
    fn test_rectangle_two_clicks() {
        let config = SelectorConfig::default();
        let (state, steps) = run(
            SelectionMode::Rectangle,
            &[click(10.0, 10.0), click(20.0, 20.0)],
            &config,
        );

        assert!(emitted(&steps[0]).is_empty());
        assert_eq!(
            emitted(&steps[1]),
            vec![SelectionResult::Area(bbox(10.0, 10.0, 20.0, 20.0))]
        );
        assert!(state.is_empty());
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.overlay().is_some());
    }

    #[test]
    fn test_rectangle_removes_both_markers() {
        let config = SelectorConfig::default();
        let (state, steps) = run(
            SelectionMode::Rectangle,
            &[click(10.0, 10.0), click(20.0, 20.0)],
            &config,
        );
        let added: Vec<_> = steps
            .iter()
            .flatten()
            .filter_map(|e| match e {
                Effect::AddMarker { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(added.len(), 2);
        assert!(steps[1].contains(&Effect::RemoveMarkers(added)));
        assert!(state.markers().is_empty());
    }

    #[test]
    fn test_rectangle_first_click_progress() {
        let config = SelectorConfig::default();
        let (_, steps) = run(SelectionMode::Rectangle, &[click(1.0, 1.0)], &config);
        assert!(steps[0].contains(&Effect::Notify(
            Notification::info(MessageKey::ClickCorner).with_count(1)
        )));
    }

    #[test]
    fn test_second_rectangle_replaces_overlay() {
        let config = SelectorConfig::default();
        let (state, steps) = run(
            SelectionMode::Rectangle,
            &[
                click(10.0, 10.0),
                click(20.0, 20.0),
                click(30.0, 30.0),
                click(40.0, 40.0),
            ],
            &config,
        );
        let first_overlay = steps[1]
            .iter()
            .find_map(|e| match e {
                Effect::DrawOverlay { id, .. } => Some(*id),
                _ => None,
            })
            .unwrap();
        let removal = steps[3]
            .iter()
            .position(|e| *e == Effect::RemoveOverlay(first_overlay))
            .expect("previous overlay must be removed");
        let draw = steps[3]
            .iter()
            .position(|e| matches!(e, Effect::DrawOverlay { .. }))
            .unwrap();
        assert!(removal < draw);
        assert_ne!(state.overlay(), Some(first_overlay));
    }

    #[test]
    fn test_polygon_progress_messages() {
        let config = SelectorConfig::default();
        let (_, steps) = run(
            SelectionMode::Polygon,
            &[click(0.0, 0.0), click(0.0, 1.0), click(1.0, 1.0)],
            &config,
        );
        let counts: Vec<Option<usize>> = steps
            .iter()
            .map(|effects| {
                effects.iter().find_map(|e| match e {
                    Effect::Notify(n) if n.key == MessageKey::ClickPoint => n.count,
                    _ => None,
                })
            })
            .collect();
        assert_eq!(counts, vec![Some(2), Some(1), None]);
        assert!(steps[2]
            .iter()
            .any(|e| matches!(e, Effect::DrawOverlay { shape: Shape::Polygon { .. }, .. })));
    }

    #[test]
    fn test_polygon_finalizes_at_cap() {
        let config = SelectorConfig::default();
        let (state, steps) = run(
            SelectionMode::Polygon,
            &[click(0.0, 0.0), click(0.0, 1.0), click(1.0, 1.0), click(1.0, 0.0)],
            &config,
        );
        for step in &steps[..3] {
            assert!(emitted(step).is_empty());
        }
        assert_eq!(
            emitted(&steps[3]),
            vec![SelectionResult::Area(bbox(0.0, 0.0, 1.0, 1.0))]
        );
        assert!(matches!(state.phase(), Phase::Completed(_)));
        assert!(steps[3]
            .iter()
            .any(|e| matches!(e, Effect::ScheduleCleanup { .. })));
        assert!(steps[3].iter().any(|e| matches!(
            e,
            Effect::Notify(Notification {
                level: NotificationLevel::Success,
                key: MessageKey::AreaSelected,
                ..
            })
        )));
    }

    #[test]
    fn test_polygon_closes_near_first_point() {
        let config = SelectorConfig::default();
        let (state, steps) = run(
            SelectionMode::Polygon,
            &[
                click(0.0, 0.0),
                click(0.0, 1.0),
                click(1.0, 1.0),
                click(0.0, 0.0001),
            ],
            &config,
        );
        assert_eq!(
            emitted(&steps[3]),
            vec![SelectionResult::Area(bbox(0.0, 0.0, 1.0, 1.0))]
        );
        // The closing click is not part of the shape.
        assert_eq!(state.len(), 3);
        assert!(!steps[3]
            .iter()
            .any(|e| matches!(e, Effect::AddMarker { .. })));
    }

    #[test]
    fn test_proximity_close_uses_first_three_points_only() {
        let config = SelectorConfig::default();
        // The closing click sits slightly outside the triangle's box.
        let (_, steps) = run(
            SelectionMode::Polygon,
            &[
                click(10.0, 10.0),
                click(10.0, 12.0),
                click(12.0, 12.0),
                click(9.9, 9.9),
            ],
            &config,
        );
        assert_eq!(
            emitted(&steps[3]),
            vec![SelectionResult::Area(bbox(10.0, 10.0, 12.0, 12.0))]
        );
    }

    #[test]
    fn test_both_completion_paths_finalize_identically() {
        let config = SelectorConfig::default();
        let (_, by_cap) = run(
            SelectionMode::Polygon,
            &[click(0.0, 0.0), click(0.0, 1.0), click(1.0, 1.0), click(1.0, 0.0)],
            &config,
        );
        let (_, by_proximity) = run(
            SelectionMode::Polygon,
            &[
                click(0.0, 0.0),
                click(0.0, 1.0),
                click(1.0, 1.0),
                click(0.0, 0.0001),
            ],
            &config,
        );
        let tail = |effects: &[Effect]| -> Vec<Effect> {
            effects
                .iter()
                .filter(|e| {
                    matches!(
                        e,
                        Effect::Emit(_) | Effect::Notify(_) | Effect::ScheduleCleanup { .. }
                    )
                })
                .cloned()
                .map(|e| match e {
                    Effect::ScheduleCleanup { after, .. } => Effect::ScheduleCleanup {
                        ticket: CleanupTicket(0),
                        after,
                    },
                    other => other,
                })
                .collect()
        };
        assert_eq!(tail(&by_cap[3]), tail(&by_proximity[3]));
    }

    #[test]
    fn test_far_fourth_point_is_required() {
        let config = SelectorConfig::default();
        // Second and third clicks land near the first point but the polygon
        // can only close once three vertices exist.
        let (state, steps) = run(
            SelectionMode::Polygon,
            &[click(0.0, 0.0), click(0.0, 0.1), click(0.1, 0.1)],
            &config,
        );
        assert!(steps.iter().all(|s| emitted(s).is_empty()));
        assert_eq!(state.len(), 3);
        assert_eq!(state.phase(), Phase::Collecting);
    }

    #[test]
    fn test_clicks_ignored_until_cleanup() {
        let config = SelectorConfig::default();
        let (state, _) = run(
            SelectionMode::Polygon,
            &[click(0.0, 0.0), click(0.0, 1.0), click(1.0, 1.0), click(1.0, 0.0)],
            &config,
        );
        let Phase::Completed(ticket) = state.phase() else {
            panic!("expected a completed selection");
        };
        let (state, effects) = transition(state, &click(5.0, 5.0), &config);
        assert!(effects.is_empty());
        assert_eq!(state.len(), 4);

        let markers = state.markers();
        let overlay = state.overlay();
        let (state, effects) = transition(state, &SelectorEvent::CleanupDue(ticket), &config);
        assert_eq!(effects, vec![Effect::RemoveMarkers(markers)]);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.overlay(), overlay);

        let (state, effects) = transition(state, &click(5.0, 5.0), &config);
        assert_eq!(state.len(), 1);
        assert!(matches!(effects[0], Effect::AddMarker { .. }));
    }

    #[test]
    fn test_stale_cleanup_ticket_is_ignored() {
        let config = SelectorConfig::default();
        let (state, _) = run(
            SelectionMode::Polygon,
            &[click(0.0, 0.0), click(0.0, 1.0), click(1.0, 1.0), click(1.0, 0.0)],
            &config,
        );
        let Phase::Completed(ticket) = state.phase() else {
            panic!("expected a completed selection");
        };
        let (state, _) = transition(state, &SelectorEvent::Clear, &config);
        let (state, _) = transition(state, &click(3.0, 3.0), &config);
        let (state, effects) = transition(state, &SelectorEvent::CleanupDue(ticket), &config);
        assert!(effects.is_empty());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_clear_when_idle_only_emits() {
        let config = SelectorConfig::default();
        let (state, effects) = transition(
            SelectorState::new(SelectionMode::Polygon),
            &SelectorEvent::Clear,
            &config,
        );
        assert_eq!(effects, vec![Effect::Emit(SelectionResult::None)]);
        let (_, effects) = transition(state, &SelectorEvent::Clear, &config);
        assert_eq!(effects, vec![Effect::Emit(SelectionResult::None)]);
    }

    #[test]
    fn test_clear_while_collecting() {
        let config = SelectorConfig::default();
        let (state, _) = run(
            SelectionMode::Polygon,
            &[click(0.0, 0.0), click(0.0, 1.0), click(1.0, 1.0)],
            &config,
        );
        let markers = state.markers();
        let overlay = state.overlay().unwrap();
        let (state, effects) = transition(state, &SelectorEvent::Clear, &config);
        assert_eq!(
            effects,
            vec![
                Effect::RemoveMarkers(markers),
                Effect::RemoveOverlay(overlay),
                Effect::Emit(SelectionResult::None),
            ]
        );
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.overlay().is_none());
    }

    #[test]
    fn test_malformed_clicks_change_nothing() {
        let config = SelectorConfig::default();
        let state = SelectorState::new(SelectionMode::Polygon);
        let before = state.clone();
        let events = [
            SelectorEvent::Click(ClickEvent::default()),
            SelectorEvent::Click(ClickEvent {
                lat: Some(f64::NAN),
                lng: Some(0.0),
            }),
            SelectorEvent::Click(ClickEvent::at(123.0, 0.0)),
        ];
        let mut state = state;
        for event in &events {
            let (next, effects) = transition(state, event, &config);
            assert!(effects.is_empty());
            state = next;
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_custom_cap() {
        let config = SelectorConfig::builder().max_points(5).build();
        let (state, steps) = run(
            SelectionMode::Polygon,
            &[
                click(0.0, 0.0),
                click(0.0, 2.0),
                click(2.0, 2.0),
                click(2.0, 0.0),
                click(3.0, -1.0),
            ],
            &config,
        );
        assert!(emitted(&steps[3]).is_empty());
        assert_eq!(
            emitted(&steps[4]),
            vec![SelectionResult::Area(bbox(0.0, -1.0, 3.0, 2.0))]
        );
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_buffer_never_exceeds_cap() {
        let config = SelectorConfig::default();
        // Deterministic pseudo-random walk mixing clicks, clears and due tickets.
        let mut seed: u64 = 0x5eed;
        let mut next = || {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (seed >> 33) as f64 / (1u64 << 31) as f64
        };
        for mode in [SelectionMode::Rectangle, SelectionMode::Polygon] {
            let mut state = SelectorState::new(mode);
            let mut due = Vec::new();
            for _ in 0..2_000 {
                let roll = next();
                let event = if roll < 0.05 {
                    SelectorEvent::Clear
                } else if roll < 0.15 && !due.is_empty() {
                    SelectorEvent::CleanupDue(due.remove(0))
                } else {
                    SelectorEvent::Click(ClickEvent::at(next() * 4.0 - 2.0, next() * 4.0 - 2.0))
                };
                let (next_state, effects) = transition(state, &event, &config);
                state = next_state;
                for effect in &effects {
                    if let Effect::ScheduleCleanup { ticket, .. } = effect {
                        due.push(*ticket);
                    }
                }
                assert!(emitted(&effects).len() <= 1);
                assert!(state.len() <= config.max_points);
            }
        }
    }
}
