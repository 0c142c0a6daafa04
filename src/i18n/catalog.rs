//! Static English and Spanish string tables and `{{placeholder}}` interpolation.

use crate::i18n::language::Language;
use crate::i18n::message_key::MessageKey;
use std::sync::Arc;
use tokio::sync::watch;

/// Resolves [`MessageKey`]s to text in one [`Language`].
///
/// # Examples
///
/// ```
/// use areacast::{Catalog, Language, MessageKey};
///
/// let catalog = Catalog::new(Language::Spanish);
/// assert_eq!(catalog.text(MessageKey::ClearArea), "Limpiar Área");
/// assert_eq!(
///     catalog.render(MessageKey::ClickPoint, Some(2)),
///     "Haz clic 2 punto(s) más para completar el polígono"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The raw template for `key`, placeholders untouched.
    pub fn text(&self, key: MessageKey) -> &'static str {
        match self.language {
            Language::English => english(key),
            Language::Spanish => spanish(key),
        }
    }

    /// The template for `key` with `{{count}}` replaced by `count`.
    pub fn render(&self, key: MessageKey, count: Option<usize>) -> String {
        let template = self.text(key);
        match count {
            Some(count) => template.replace("{{count}}", &count.to_string()),
            None => template.to_string(),
        }
    }
}

/// A [`Catalog`] whose language is shared by every clone.
///
/// A dashboard and the selectors it builds hold clones of one handle, so a
/// language switch on any of them is seen by all. Each lookup reads the
/// language current at that moment.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    language: Arc<watch::Sender<Language>>,
}

impl SharedCatalog {
    pub fn new(language: Language) -> Self {
        Self {
            language: Arc::new(watch::Sender::new(language)),
        }
    }

    /// A snapshot of the catalog in the current language.
    pub fn current(&self) -> Catalog {
        Catalog::new(self.language())
    }

    pub fn language(&self) -> Language {
        *self.language.borrow()
    }

    /// Switches the language for every holder of this handle.
    pub fn set_language(&self, language: Language) {
        self.language.send_replace(language);
    }

    /// A receiver notified on every language switch.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.language.subscribe()
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "NASA Weather Dashboard",
        MessageKey::Subtitle => "Interactive weather predictions using NASA Earth observation data",
        MessageKey::DrawArea => "Draw Area",
        MessageKey::ClearArea => "Clear Area",
        MessageKey::Location => "Location",
        MessageKey::SelectArea => "Select an area on the map",
        MessageKey::WeatherConditions => "Weather Conditions",
        MessageKey::Temperature => "Temperature",
        MessageKey::Precipitation => "Precipitation",
        MessageKey::WindSpeed => "Wind Speed",
        MessageKey::AirQuality => "Air Quality",
        MessageKey::Humidity => "Humidity",
        MessageKey::Pressure => "Atmospheric Pressure",
        MessageKey::HistoricalData => "Historical Data",
        MessageKey::Predictions => "Predictions",
        MessageKey::Probability => "Probability",
        MessageKey::High => "High",
        MessageKey::Medium => "Medium",
        MessageKey::Low => "Low",
        MessageKey::DownloadData => "Download Data",
        MessageKey::DownloadCsv => "Download CSV",
        MessageKey::DownloadJson => "Download JSON",
        MessageKey::Statistics => "Statistics",
        MessageKey::Average => "Average",
        MessageKey::Maximum => "Maximum",
        MessageKey::Minimum => "Minimum",
        MessageKey::SelectDate => "Select Date",
        MessageKey::Loading => "Loading...",
        MessageKey::NoData => "No data available",
        MessageKey::ExtremeHeat => "Extreme Heat",
        MessageKey::ExtremeCold => "Extreme Cold",
        MessageKey::HeavyRain => "Heavy Rain",
        MessageKey::StrongWind => "Strong Wind",
        MessageKey::PoorAirQuality => "Poor Air Quality",
        MessageKey::Instructions => {
            "Click on the map to draw a boundary area and view weather statistics"
        }
        MessageKey::ClickPoint => "Click {{count}} more point(s) to complete the polygon",
        MessageKey::ClickCorner => "Click {{count}} more point(s) to complete the rectangle",
        MessageKey::AreaSelected => "Area selected! Viewing weather data...",
        MessageKey::CsvDownloaded => "CSV downloaded successfully",
        MessageKey::JsonDownloaded => "JSON downloaded successfully",
    }
}

fn spanish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Dashboard Meteorológico NASA",
        MessageKey::Subtitle => {
            "Predicciones meteorológicas interactivas usando datos de observación terrestre de la NASA"
        }
        MessageKey::DrawArea => "Dibujar Área",
        MessageKey::ClearArea => "Limpiar Área",
        MessageKey::Location => "Ubicación",
        MessageKey::SelectArea => "Selecciona un área en el mapa",
        MessageKey::WeatherConditions => "Condiciones Meteorológicas",
        MessageKey::Temperature => "Temperatura",
        MessageKey::Precipitation => "Precipitación",
        MessageKey::WindSpeed => "Velocidad del Viento",
        MessageKey::AirQuality => "Calidad del Aire",
        MessageKey::Humidity => "Humedad",
        MessageKey::Pressure => "Presión Atmosférica",
        MessageKey::HistoricalData => "Datos Históricos",
        MessageKey::Predictions => "Predicciones",
        MessageKey::Probability => "Probabilidad",
        MessageKey::High => "Alta",
        MessageKey::Medium => "Media",
        MessageKey::Low => "Baja",
        MessageKey::DownloadData => "Descargar Datos",
        MessageKey::DownloadCsv => "Descargar CSV",
        MessageKey::DownloadJson => "Descargar JSON",
        MessageKey::Statistics => "Estadísticas",
        MessageKey::Average => "Promedio",
        MessageKey::Maximum => "Máximo",
        MessageKey::Minimum => "Mínimo",
        MessageKey::SelectDate => "Seleccionar Fecha",
        MessageKey::Loading => "Cargando...",
        MessageKey::NoData => "No hay datos disponibles",
        MessageKey::ExtremeHeat => "Calor Extremo",
        MessageKey::ExtremeCold => "Frío Extremo",
        MessageKey::HeavyRain => "Lluvia Intensa",
        MessageKey::StrongWind => "Viento Fuerte",
        MessageKey::PoorAirQuality => "Mala Calidad del Aire",
        MessageKey::Instructions => {
            "Haz clic en el mapa para dibujar un área y ver las estadísticas meteorológicas"
        }
        MessageKey::ClickPoint => "Haz clic {{count}} punto(s) más para completar el polígono",
        MessageKey::ClickCorner => "Haz clic {{count}} punto(s) más para completar el rectángulo",
        MessageKey::AreaSelected => "¡Área seleccionada! Viendo datos meteorológicos...",
        MessageKey::CsvDownloaded => "CSV descargado correctamente",
        MessageKey::JsonDownloaded => "JSON descargado correctamente",
    }
}
