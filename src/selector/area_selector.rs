//! Drives the selection state machine against a live map surface.

use crate::i18n::catalog::{Catalog, SharedCatalog};
use crate::i18n::language::Language;
use crate::selector::config::SelectorConfig;
use crate::selector::effect::{CleanupTicket, Effect};
use crate::selector::error::SelectorError;
use crate::selector::event::{ClickEvent, SelectorEvent};
use crate::selector::machine::transition;
use crate::selector::state::{SelectionMode, SelectorState};
use crate::selector::surface::{LogNotifier, MapSurface, Notifier, SubscriptionId};
use crate::types::selection_result::SelectionResult;
use bon::bon;
use log::{debug, info, warn};
use std::mem;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

/// Callback receiving every completed or cleared selection.
pub type AreaSelectCallback = Box<dyn FnMut(SelectionResult) + Send>;

/// A map surface together with the click subscription held on it.
struct Attachment {
    surface: Box<dyn MapSurface>,
    subscription: SubscriptionId,
    clicks: UnboundedReceiver<ClickEvent>,
}

impl Attachment {
    fn attach(mut surface: Box<dyn MapSurface>) -> Self {
        let (sink, clicks) = mpsc::unbounded_channel();
        let subscription = surface.subscribe_clicks(sink);
        debug!("Subscribed to map clicks ({:?})", subscription);
        Self {
            surface,
            subscription,
            clicks,
        }
    }

    fn detach(mut self) -> Box<dyn MapSurface> {
        self.surface.unsubscribe_clicks(self.subscription);
        debug!("Unsubscribed from map clicks ({:?})", self.subscription);
        self.surface
    }
}

/// The area-selection component.
///
/// Owns the [`SelectorState`], feeds events through [`transition`] and applies
/// the resulting effects: drawing on the attached [`MapSurface`], raising
/// notifications through the [`Notifier`] (texts resolved via a [`SharedCatalog`]
/// in the language current when the notification is raised) and
/// reporting results to the `on_area_select` callback.
///
/// The click subscription lives exactly as long as the surface is attached:
/// it is taken in [`AreaSelector::activate`] and released in
/// [`AreaSelector::deactivate`] or when the selector is dropped. Deferred
/// marker cleanups are tokio tasks bound to a cancellation token that is
/// cancelled on both of those paths, so a cleanup never touches a surface that
/// has gone away.
///
/// # Examples
///
/// ```
/// use areacast::{AreaSelector, SelectionMode, SelectionResult};
///
/// let mut selector = AreaSelector::builder()
///     .mode(SelectionMode::Rectangle)
///     .on_area_select(Box::new(|result: SelectionResult| println!("{:?}", result)))
///     .build()
///     .unwrap();
///
/// // Without a surface the click handler is inert.
/// assert!(!selector.is_active());
/// ```
pub struct AreaSelector {
    config: SelectorConfig,
    state: SelectorState,
    attachment: Option<Attachment>,
    notifier: Box<dyn Notifier>,
    catalog: SharedCatalog,
    on_area_select: AreaSelectCallback,
    timers: CancellationToken,
    due_tx: UnboundedSender<CleanupTicket>,
    due_rx: UnboundedReceiver<CleanupTicket>,
}

#[bon]
impl AreaSelector {
    /// Creates a selector that is not yet attached to a surface.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidConfig`] if `config` fails validation.
    #[builder]
    pub fn new(
        #[builder(default)] mode: SelectionMode,
        #[builder(default)] config: SelectorConfig,
        #[builder(default = Box::new(LogNotifier) as Box<dyn Notifier>)] notifier: Box<dyn Notifier>,
        #[builder(default)] catalog: SharedCatalog,
        on_area_select: AreaSelectCallback,
    ) -> Result<Self, SelectorError> {
        config.validate()?;
        let (due_tx, due_rx) = mpsc::unbounded_channel();
        Ok(Self {
            config,
            state: SelectorState::new(mode),
            attachment: None,
            notifier,
            catalog,
            on_area_select,
            timers: CancellationToken::new(),
            due_tx,
            due_rx,
        })
    }
}

impl AreaSelector {
    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// The catalog in the current language.
    pub fn catalog(&self) -> Catalog {
        self.catalog.current()
    }

    /// Switches the language of notifications. The switch is shared with
    /// every holder of the same [`SharedCatalog`].
    pub fn set_language(&self, language: Language) {
        self.catalog.set_language(language);
    }

    pub fn is_active(&self) -> bool {
        self.attachment.is_some()
    }

    /// Attaches the selector to `surface` and subscribes to its clicks.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::AlreadyActive`] if a surface is already attached;
    /// `surface` is dropped in that case.
    pub fn activate(&mut self, surface: Box<dyn MapSurface>) -> Result<(), SelectorError> {
        if self.attachment.is_some() {
            return Err(SelectorError::AlreadyActive);
        }
        self.attachment = Some(Attachment::attach(surface));
        info!("Area selector activated in {:?} mode", self.state.mode());
        Ok(())
    }

    /// Unsubscribes from the attached surface and hands it back.
    ///
    /// Pending cleanups are cancelled and the selection state is reset, since
    /// the markers and overlays it refers to belong to the detached surface.
    pub fn deactivate(&mut self) -> Option<Box<dyn MapSurface>> {
        let attachment = self.attachment.take()?;
        self.cancel_timers();
        self.state.reset();
        info!("Area selector deactivated");
        Some(attachment.detach())
    }

    /// Handles a single click. Inert while no surface is attached.
    pub fn click(&mut self, click: ClickEvent) {
        self.handle(SelectorEvent::Click(click));
    }

    /// Resets the selection and reports [`SelectionResult::None`].
    pub fn clear(&mut self) {
        self.handle(SelectorEvent::Clear);
    }

    pub fn handle(&mut self, event: SelectorEvent) {
        if matches!(event, SelectorEvent::Click(_)) && self.attachment.is_none() {
            debug!("Ignoring click, no map surface attached");
            return;
        }
        let state = mem::take(&mut self.state);
        let (state, effects) = transition(state, &event, &self.config);
        self.state = state;
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Processes every click the surface has delivered so far. Returns the
    /// number of clicks handled.
    pub fn pump_clicks(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let next = match self.attachment.as_mut() {
                Some(attachment) => attachment.clicks.try_recv(),
                None => return handled,
            };
            match next {
                Ok(click) => {
                    self.click(click);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return handled,
            }
        }
    }

    /// Applies every cleanup whose delay has elapsed. Returns the number of
    /// tickets processed.
    pub fn pump_deferred(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(ticket) = self.due_rx.try_recv() {
            self.handle(SelectorEvent::CleanupDue(ticket));
            handled += 1;
        }
        handled
    }

    /// Processes clicks and due cleanups in delivery order until the surface
    /// stops delivering clicks.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::SurfaceUnavailable`] if no surface is attached.
    pub async fn run(&mut self) -> Result<(), SelectorError> {
        loop {
            let next = {
                let Some(attachment) = self.attachment.as_mut() else {
                    return Err(SelectorError::SurfaceUnavailable);
                };
                tokio::select! {
                    click = attachment.clicks.recv() => click.map(SelectorEvent::Click),
                    Some(ticket) = self.due_rx.recv() => Some(SelectorEvent::CleanupDue(ticket)),
                }
            };
            match next {
                Some(event) => self.handle(event),
                None => {
                    debug!("Map surface closed its click stream");
                    return Ok(());
                }
            }
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::AddMarker { id, point } => {
                if let Some(surface) = self.surface_mut() {
                    surface.add_marker(id, point);
                }
            }
            Effect::RemoveMarkers(ids) => {
                if let Some(surface) = self.surface_mut() {
                    for id in ids {
                        surface.remove_marker(id);
                    }
                }
            }
            Effect::DrawOverlay { id, shape } => {
                if let Some(surface) = self.surface_mut() {
                    surface.draw_overlay(id, &shape);
                }
            }
            Effect::RemoveOverlay(id) => {
                if let Some(surface) = self.surface_mut() {
                    surface.remove_overlay(id);
                }
            }
            Effect::Notify(notification) => {
                let message = self
                    .catalog
                    .current()
                    .render(notification.key, notification.count);
                self.notifier.notify(notification.level, &message);
            }
            Effect::Emit(result) => {
                info!("Area selection changed: {:?}", result);
                (self.on_area_select)(result);
            }
            Effect::ScheduleCleanup { ticket, after } => self.schedule_cleanup(ticket, after),
        }
    }

    fn surface_mut(&mut self) -> Option<&mut Box<dyn MapSurface>> {
        self.attachment.as_mut().map(|attachment| &mut attachment.surface)
    }

    fn schedule_cleanup(&self, ticket: CleanupTicket, after: Duration) {
        let token = self.timers.child_token();
        let due = self.due_tx.clone();
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::select! {
                        _ = token.cancelled() => debug!("Cancelled {}", ticket),
                        _ = tokio::time::sleep(after) => {
                            // The selector may be gone by now; nothing to clean then.
                            let _ = due.send(ticket);
                        }
                    }
                });
            }
            Err(_) => {
                warn!("No tokio runtime, {} is due immediately", ticket);
                let _ = due.send(ticket);
            }
        }
    }

    fn cancel_timers(&mut self) {
        self.timers.cancel();
        self.timers = CancellationToken::new();
        while self.due_rx.try_recv().is_ok() {}
    }
}

impl Drop for AreaSelector {
    fn drop(&mut self) {
        self.timers.cancel();
        if let Some(attachment) = self.attachment.take() {
            attachment.detach();
        }
    }
}
