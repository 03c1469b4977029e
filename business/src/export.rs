//! PNG export of a rendered QR code and hand-off to a share dispatcher.
//!
//! Every export writes the same file, `<cache>/qr_images/shared_qr.png`,
//! replacing whatever the previous share left there. Concurrent exports
//! are not coordinated: the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StudioConfig;
use crate::pixel_grid::PixelGrid;
use crate::share::{ContentRef, DispatchError, ShareDispatcher, ShareRequest};

pub const EXPORT_DIR_NAME: &str = "qr_images";
pub const EXPORT_FILE_NAME: &str = "shared_qr.png";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create export directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Export path {} is outside the cache root", .path.display())]
    OutsideRoot { path: PathBuf },
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// The file written by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub content: ContentRef,
    pub bytes_written: usize,
}

impl ExportArtifact {
    pub fn path(&self) -> &Path {
        self.content.path()
    }
}

/// Writes rendered images into the app cache and shares them.
#[derive(Debug, Clone)]
pub struct ShareExporter {
    cache_dir: PathBuf,
    authority: String,
}

impl ShareExporter {
    pub fn new(cache_dir: impl Into<PathBuf>, authority: impl Into<String>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            authority: authority.into(),
        }
    }

    pub fn from_config(config: &StudioConfig) -> Self {
        Self::new(config.cache_dir.clone(), config.authority.clone())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.cache_dir.join(EXPORT_DIR_NAME)
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_dir().join(EXPORT_FILE_NAME)
    }

    /// Encodes `grid` as PNG and writes it to the fixed export file.
    pub fn export(&self, grid: &PixelGrid) -> Result<ExportArtifact, ExportError> {
        let dir = self.export_dir();
        fs::create_dir_all(&dir).map_err(|source| ExportError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let bytes = grid.encode_png()?;
        let path = dir.join(EXPORT_FILE_NAME);
        fs::write(&path, &bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        let content = ContentRef::for_file(&self.authority, &self.cache_dir, &path)
            .ok_or_else(|| ExportError::OutsideRoot { path: path.clone() })?;

        log::debug!(
            "exported qr image path={} bytes={}",
            path.display(),
            bytes.len()
        );

        Ok(ExportArtifact {
            content,
            bytes_written: bytes.len(),
        })
    }

    /// Exports `grid` and dispatches a PNG share request for it.
    pub fn share(
        &self,
        grid: &PixelGrid,
        dispatcher: &dyn ShareDispatcher,
    ) -> Result<ShareRequest, ShareError> {
        let artifact = self.export(grid)?;
        let request = ShareRequest::png(artifact.content);
        dispatcher.dispatch(&request)?;
        log::info!("Shared QR code via {}", request.content.uri());
        Ok(request)
    }
}

/// Shares `grid`, logging any failure instead of returning it.
///
/// Returns whether the share was dispatched. Failed shares are not retried.
pub fn share_bitmap(
    exporter: &ShareExporter,
    grid: &PixelGrid,
    dispatcher: &dyn ShareDispatcher,
) -> bool {
    match exporter.share(grid, dispatcher) {
        Ok(_) => true,
        Err(e) => {
            log::error!("Failed to share QR code: {e}");
            false
        }
    }
}
