mod dashboard;
mod dataset;
mod error;
mod i18n;
mod selector;
mod types;
mod utils;

pub use dashboard::Dashboard;
pub use error::DashboardError;

pub use types::bounding_box::BoundingBox;
pub use types::geo_point::GeoPoint;
pub use types::selection_result::SelectionResult;
pub use types::shape::Shape;

pub use selector::area_selector::{AreaSelectCallback, AreaSelector};
pub use selector::config::*;
pub use selector::effect::*;
pub use selector::error::SelectorError;
pub use selector::event::{ClickEvent, SelectorEvent};
pub use selector::machine::transition;
pub use selector::state::{Phase, SelectionMode, SelectorState};
pub use selector::surface::{LogNotifier, MapSurface, Notifier, SharedNotifier, SubscriptionId};

pub use i18n::catalog::{Catalog, SharedCatalog};
pub use i18n::language::{Language, UnsupportedLanguage};
pub use i18n::message_key::MessageKey;

pub use dataset::error::ExportError;
pub use dataset::export::{Download, ExportFormat};
pub use dataset::records::{mock_records, AirQuality, WeatherRecord};
pub use dataset::stats::*;
