//! The dashboard page: the single current selection, its statistics, the
//! download actions, the forecast date and the display language.

use crate::dataset::error::ExportError;
use crate::dataset::export::{Download, ExportFormat};
use crate::dataset::records::mock_records;
use crate::dataset::stats::WeatherStats;
use crate::error::DashboardError;
use crate::i18n::catalog::{Catalog, SharedCatalog};
use crate::i18n::language::Language;
use crate::i18n::message_key::MessageKey;
use crate::selector::area_selector::{AreaSelectCallback, AreaSelector};
use crate::selector::config::SelectorConfig;
use crate::selector::effect::Notification;
use crate::selector::state::SelectionMode;
use crate::selector::surface::{LogNotifier, Notifier, SharedNotifier};
use crate::types::selection_result::SelectionResult;
use bon::bon;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;
use tokio::sync::watch;

/// Holds at most one [`SelectionResult`] at a time, published by the area
/// selector through [`Dashboard::area_callback`].
///
/// Selectors built with [`Dashboard::area_selector`] share the dashboard's
/// language and notifier: a later [`Dashboard::set_language`] changes their
/// messages too.
///
/// # Examples
///
/// ```
/// use areacast::{Dashboard, ExportFormat, Language, SelectionMode};
///
/// let mut dashboard = Dashboard::builder().language(Language::English).build();
/// let selector = dashboard.area_selector().mode(SelectionMode::Rectangle).call().unwrap();
///
/// assert!(!dashboard.has_area());
/// assert!(dashboard.stats().is_none());
/// assert!(dashboard.download(ExportFormat::Csv).is_err());
/// # drop(selector);
/// ```
pub struct Dashboard {
    publisher: Arc<watch::Sender<SelectionResult>>,
    selection: watch::Receiver<SelectionResult>,
    catalog: SharedCatalog,
    notifier: SharedNotifier,
    date: Option<NaiveDate>,
}

#[bon]
impl Dashboard {
    #[builder]
    pub fn new(
        #[builder(default)] language: Language,
        #[builder(default = Box::new(LogNotifier) as Box<dyn Notifier>)] notifier: Box<dyn Notifier>,
    ) -> Self {
        let (publisher, selection) = watch::channel(SelectionResult::None);
        Self {
            publisher: Arc::new(publisher),
            selection,
            catalog: SharedCatalog::new(language),
            notifier: SharedNotifier::new(notifier),
            date: None,
        }
    }

    /// Builds an [`AreaSelector`] reporting into this dashboard.
    ///
    /// # Arguments
    ///
    /// * `mode` - The [`SelectionMode`] to draw in. Defaults to polygons.
    /// * `config` - Point cap, closing distance and cleanup delay.
    /// * `notifier` - Where the selector's messages go. Defaults to the
    ///   dashboard's own notifier.
    ///
    /// # Returns
    ///
    /// A selector that follows the dashboard's language, or
    /// [`DashboardError::Selector`] if `config` is invalid.
    #[builder]
    pub fn area_selector(
        &self,
        #[builder(default)] mode: SelectionMode,
        #[builder(default)] config: SelectorConfig,
        notifier: Option<Box<dyn Notifier>>,
    ) -> Result<AreaSelector, DashboardError> {
        let notifier: Box<dyn Notifier> = match notifier {
            Some(notifier) => notifier,
            None => Box::new(self.notifier.clone()),
        };
        Ok(AreaSelector::builder()
            .mode(mode)
            .config(config)
            .notifier(notifier)
            .catalog(self.catalog.clone())
            .on_area_select(self.area_callback())
            .build()?)
    }
}

impl Dashboard {
    /// A callback that replaces the dashboard's current selection.
    pub fn area_callback(&self) -> AreaSelectCallback {
        let publisher = Arc::clone(&self.publisher);
        Box::new(move |result| {
            publisher.send_replace(result);
        })
    }

    /// A receiver that observes every selection change.
    pub fn subscribe(&self) -> watch::Receiver<SelectionResult> {
        self.publisher.subscribe()
    }

    pub fn selection(&self) -> SelectionResult {
        *self.selection.borrow()
    }

    pub fn has_area(&self) -> bool {
        self.selection().is_selected()
    }

    /// Statistics for the selected area, `None` while nothing is selected.
    pub fn stats(&self) -> Option<WeatherStats> {
        WeatherStats::for_selection(&self.selection())
    }

    /// Text shown in place of the statistics before an area is selected.
    pub fn instructions(&self) -> &'static str {
        self.catalog.current().text(MessageKey::Instructions)
    }

    /// Encodes the mock dataset for the selected area.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoData`] (wrapped) if no area is selected. The
    /// user is notified of both outcomes.
    pub fn download(&mut self, format: ExportFormat) -> Result<Download, DashboardError> {
        if !self.has_area() {
            self.raise(Notification::error(MessageKey::NoData));
            return Err(ExportError::NoData.into());
        }
        let download = Download::encode(format, &mock_records())?;
        info!("Prepared {} export ({} bytes)", format, download.bytes.len());
        self.raise(Notification::success(format.success_message()));
        Ok(download)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Sets the forecast date. Dates before `today` are rejected; `None`
    /// clears the date.
    pub fn select_date(
        &mut self,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), DashboardError> {
        if let Some(date) = date {
            if date < today {
                return Err(DashboardError::DateInPast { date, today });
            }
        }
        self.date = date;
        Ok(())
    }

    /// The catalog in the current language.
    pub fn catalog(&self) -> Catalog {
        self.catalog.current()
    }

    pub fn language(&self) -> Language {
        self.catalog.language()
    }

    /// Switches the language of the dashboard and of every selector it built.
    pub fn set_language(&self, language: Language) {
        info!("Switching language to {}", language);
        self.catalog.set_language(language);
    }

    /// A receiver notified on every language switch.
    pub fn subscribe_language(&self) -> watch::Receiver<Language> {
        self.catalog.subscribe()
    }

    /// Switches language from a tag such as `"es"` or `"en-US"`.
    pub fn set_language_tag(&self, tag: &str) -> Result<(), DashboardError> {
        self.set_language(tag.parse()?);
        Ok(())
    }

    fn raise(&mut self, notification: Notification) {
        let message = self
            .catalog
            .current()
            .render(notification.key, notification.count);
        self.notifier.notify(notification.level, &message);
    }
}
