use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No area selected, nothing to export")]
    NoData,

    #[error("Failed to encode CSV export")]
    CsvEncode(#[source] PolarsError),

    #[error("Failed to encode JSON export")]
    JsonEncode(#[from] serde_json::Error),

    #[error("Failed to determine download directory")]
    DownloadDirResolution,

    #[error("Download path exists but is not a directory: '{0}'")]
    NotADirectory(PathBuf),

    #[error("Failed to create download directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write export file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),
}
