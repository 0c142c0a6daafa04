//! CSV and JSON encodings of the mock dataset, and writing them to disk.

use crate::dataset::error::ExportError;
use crate::dataset::records::WeatherRecord;
use crate::i18n::message_key::MessageKey;
use crate::utils::{ensure_dir_exists, get_download_dir};
use log::info;
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Location label written into JSON exports.
const EXPORT_LOCATION: &str = "Selected Area";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "weather-data.csv",
            ExportFormat::Json => "weather-data.json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Message shown after a successful download.
    pub fn success_message(&self) -> MessageKey {
        match self {
            ExportFormat::Csv => MessageKey::CsvDownloaded,
            ExportFormat::Json => MessageKey::JsonDownloaded,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

/// An encoded export, ready to be handed to the browser or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Encodes `records` in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::CsvEncode`] or [`ExportError::JsonEncode`] if encoding fails.
    pub fn encode(format: ExportFormat, records: &[WeatherRecord]) -> Result<Self, ExportError> {
        let bytes = match format {
            ExportFormat::Csv => encode_csv(records)?,
            ExportFormat::Json => encode_json(records)?,
        };
        Ok(Self {
            file_name: format.file_name().to_string(),
            mime_type: format.mime_type().to_string(),
            bytes,
        })
    }

    /// Writes the export into `dir`, creating the directory if needed, and
    /// returns the path of the written file.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        ensure_dir_exists(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|e| ExportError::FileWrite(path.clone(), e))?;
        info!("Wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }

    /// Writes the export into the user's download directory.
    pub async fn save_to_download_dir(&self) -> Result<PathBuf, ExportError> {
        let dir = get_download_dir()?;
        self.save_to(&dir).await
    }
}

fn records_to_frame(records: &[WeatherRecord]) -> PolarsResult<DataFrame> {
    let dates: Vec<String> = records
        .iter()
        .map(|r| r.date.format("%Y-%m-%d").to_string())
        .collect();
    let temperatures: Vec<i32> = records.iter().map(|r| r.temperature).collect();
    let precipitation: Vec<i32> = records.iter().map(|r| r.precipitation).collect();
    let wind_speeds: Vec<i32> = records.iter().map(|r| r.wind_speed).collect();
    let air_quality: Vec<&str> = records.iter().map(|r| r.air_quality.as_str()).collect();

    df!(
        "Date" => dates,
        "Temperature" => temperatures,
        "Precipitation" => precipitation,
        "Wind Speed" => wind_speeds,
        "Air Quality" => air_quality,
    )
}

fn encode_csv(records: &[WeatherRecord]) -> Result<Vec<u8>, ExportError> {
    let mut frame = records_to_frame(records).map_err(ExportError::CsvEncode)?;
    let mut bytes = Vec::new();
    CsvWriter::new(&mut bytes)
        .include_header(true)
        .finish(&mut frame)
        .map_err(ExportError::CsvEncode)?;
    Ok(bytes)
}

#[derive(Serialize)]
struct JsonExport<'a> {
    location: &'a str,
    data: &'a [WeatherRecord],
}

fn encode_json(records: &[WeatherRecord]) -> Result<Vec<u8>, ExportError> {
    let export = JsonExport {
        location: EXPORT_LOCATION,
        data: records,
    };
    Ok(serde_json::to_vec_pretty(&export)?)
}
