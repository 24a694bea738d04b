use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::row::MeasurementRow;

/// Fixed name of the shared measurement file.
pub const MEASUREMENTS_FILENAME: &str = "Measurements.csv";

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = ';';

/// Where the measurement file lives relative to the source image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreMode {
    /// Next to the image.
    #[default]
    ImageDir,
    /// In the directory above the image folder, so several image folders
    /// share one file (the legacy "top" store).
    ParentDir,
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("cannot resolve a measurement directory for {0}")]
    NoDirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Resolve the measurement file path for a source image.
pub fn measurements_path(source_image: &Path, mode: StoreMode) -> Result<PathBuf, ExportError> {
    let image_dir = source_image
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .ok_or_else(|| ExportError::NoDirectory(source_image.to_path_buf()))?;

    let dir = match mode {
        StoreMode::ImageDir => image_dir,
        // Fall back to the image folder itself at the filesystem root.
        StoreMode::ParentDir => image_dir.parent().unwrap_or(image_dir),
    };
    Ok(dir.join(MEASUREMENTS_FILENAME))
}

/// Append one record to the measurement file, creating it with a header row
/// on first use.
///
/// The header is written only when the file is created; later rows are
/// appended as-is even when their column set differs (ragged schema, see the
/// crate docs). Header and row are flushed in a single `write_all` on an
/// append-mode handle so a failure never leaves a half-written row.
pub fn append_row(
    row: &MeasurementRow,
    source_image: &Path,
    mode: StoreMode,
    separator: char,
) -> Result<PathBuf, ExportError> {
    let path = measurements_path(source_image, mode)?;
    let fresh = !path.exists();

    let mut buffer = String::new();
    if fresh {
        buffer.push_str(&row.header_line(separator));
        buffer.push('\n');
    }
    buffer.push_str(&row.data_line(separator));
    buffer.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(buffer.as_bytes())?;

    info!(
        "appended measurement row to {} ({})",
        path.display(),
        if fresh { "new file" } else { "existing file" }
    );
    Ok(path)
}
