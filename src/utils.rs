use crate::dataset::error::ExportError;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

/// The user's download directory, falling back to the home directory.
pub fn get_download_dir() -> Result<PathBuf, ExportError> {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or(ExportError::DownloadDirResolution)
}

pub async fn ensure_dir_exists(path: &Path) -> Result<(), ExportError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(ExportError::NotADirectory(path.to_path_buf()));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating directory: {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| ExportError::DirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(ExportError::DirCreation(path.to_path_buf(), e)),
    }
}
