use std::fmt;

/// Every user-facing string of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    Subtitle,
    DrawArea,
    ClearArea,
    Location,
    SelectArea,
    WeatherConditions,
    Temperature,
    Precipitation,
    WindSpeed,
    AirQuality,
    Humidity,
    Pressure,
    HistoricalData,
    Predictions,
    Probability,
    High,
    Medium,
    Low,
    DownloadData,
    DownloadCsv,
    DownloadJson,
    Statistics,
    Average,
    Maximum,
    Minimum,
    SelectDate,
    Loading,
    NoData,
    ExtremeHeat,
    ExtremeCold,
    HeavyRain,
    StrongWind,
    PoorAirQuality,
    Instructions,
    /// Takes a `{{count}}` of remaining points.
    ClickPoint,
    /// Rectangle counterpart of [`MessageKey::ClickPoint`].
    ClickCorner,
    AreaSelected,
    CsvDownloaded,
    JsonDownloaded,
}

impl MessageKey {
    pub const ALL: [MessageKey; 40] = [
        MessageKey::Title,
        MessageKey::Subtitle,
        MessageKey::DrawArea,
        MessageKey::ClearArea,
        MessageKey::Location,
        MessageKey::SelectArea,
        MessageKey::WeatherConditions,
        MessageKey::Temperature,
        MessageKey::Precipitation,
        MessageKey::WindSpeed,
        MessageKey::AirQuality,
        MessageKey::Humidity,
        MessageKey::Pressure,
        MessageKey::HistoricalData,
        MessageKey::Predictions,
        MessageKey::Probability,
        MessageKey::High,
        MessageKey::Medium,
        MessageKey::Low,
        MessageKey::DownloadData,
        MessageKey::DownloadCsv,
        MessageKey::DownloadJson,
        MessageKey::Statistics,
        MessageKey::Average,
        MessageKey::Maximum,
        MessageKey::Minimum,
        MessageKey::SelectDate,
        MessageKey::Loading,
        MessageKey::NoData,
        MessageKey::ExtremeHeat,
        MessageKey::ExtremeCold,
        MessageKey::HeavyRain,
        MessageKey::StrongWind,
        MessageKey::PoorAirQuality,
        MessageKey::Instructions,
        MessageKey::ClickPoint,
        MessageKey::ClickCorner,
        MessageKey::AreaSelected,
        MessageKey::CsvDownloaded,
        MessageKey::JsonDownloaded,
    ];

    /// The lookup key used by translation resources.
    pub fn name(&self) -> &'static str {
        match self {
            MessageKey::Title => "title",
            MessageKey::Subtitle => "subtitle",
            MessageKey::DrawArea => "drawArea",
            MessageKey::ClearArea => "clearArea",
            MessageKey::Location => "location",
            MessageKey::SelectArea => "selectArea",
            MessageKey::WeatherConditions => "weatherConditions",
            MessageKey::Temperature => "temperature",
            MessageKey::Precipitation => "precipitation",
            MessageKey::WindSpeed => "windSpeed",
            MessageKey::AirQuality => "airQuality",
            MessageKey::Humidity => "humidity",
            MessageKey::Pressure => "pressure",
            MessageKey::HistoricalData => "historicalData",
            MessageKey::Predictions => "predictions",
            MessageKey::Probability => "probability",
            MessageKey::High => "high",
            MessageKey::Medium => "medium",
            MessageKey::Low => "low",
            MessageKey::DownloadData => "downloadData",
            MessageKey::DownloadCsv => "downloadCSV",
            MessageKey::DownloadJson => "downloadJSON",
            MessageKey::Statistics => "statistics",
            MessageKey::Average => "average",
            MessageKey::Maximum => "maximum",
            MessageKey::Minimum => "minimum",
            MessageKey::SelectDate => "selectDate",
            MessageKey::Loading => "loading",
            MessageKey::NoData => "noData",
            MessageKey::ExtremeHeat => "extremeHeat",
            MessageKey::ExtremeCold => "extremeCold",
            MessageKey::HeavyRain => "heavyRain",
            MessageKey::StrongWind => "strongWind",
            MessageKey::PoorAirQuality => "poorAirQuality",
            MessageKey::Instructions => "instructions",
            MessageKey::ClickPoint => "clickPoint",
            MessageKey::ClickCorner => "clickCorner",
            MessageKey::AreaSelected => "areaSelected",
            MessageKey::CsvDownloaded => "csvDownloaded",
            MessageKey::JsonDownloaded => "jsonDownloaded",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        MessageKey::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
