//! End-to-end save pipeline: finalize, export, burn in.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use image::RgbImage;
use log::info;

use endo_measure_core::{AnnotationSession, FinalizeError};
use endo_measure_export::{append_row, ExportError, MeasurementRow};
use endo_measure_render::burn_in;

use crate::config::AppConfig;
use crate::io::{save_rgb, EncodeError};

/// Paths produced by a successful save.
#[derive(Clone, Debug)]
pub struct SaveOutcome {
    pub csv_path: PathBuf,
    /// Absent when the burned-in copy is disabled in the config.
    pub image_path: Option<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Finalize(#[from] FinalizeError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("could not write the burned-in copy: {0}")]
    Encode(#[from] EncodeError),
    #[error("source image path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// File name of the burned-in artifact for a given save instant.
pub fn artifact_file_name(now: DateTime<Local>, original_name: &str) -> String {
    format!("Measured-{}-{original_name}", now.format("%Y%m%d-%H%M%S"))
}

/// Save the session at the current wall-clock instant.
///
/// See [`save_session_at`] for the pipeline contract.
pub fn save_session(
    session: &mut AnnotationSession,
    base: &RgbImage,
    source_image: &Path,
    config: &AppConfig,
) -> Result<SaveOutcome, SaveError> {
    save_session_at(session, base, source_image, config, Local::now())
}

/// Save the session as of `now`: finalize the record (stamping the
/// timestamp, clearing guide circles), append the CSV row, then write the
/// burned-in copy alongside the original image.
///
/// The CSV append lands before the artifact; an encode failure does not roll
/// it back. The measurement file is a shared append-only resource and a
/// partial retry would duplicate the row.
pub fn save_session_at(
    session: &mut AnnotationSession,
    base: &RgbImage,
    source_image: &Path,
    config: &AppConfig,
    now: DateTime<Local>,
) -> Result<SaveOutcome, SaveError> {
    let record = session.finalize(&now.format("%Y-%m-%d %H:%M:%S").to_string())?;

    let row = MeasurementRow::from_record(&record, source_image);
    let csv_path = append_row(&row, source_image, config.store_mode, config.csv_separator)?;

    let image_path = if config.save_scored_copy {
        let original_name = source_image
            .file_name()
            .ok_or_else(|| SaveError::NoFileName(source_image.to_path_buf()))?;
        let path =
            source_image.with_file_name(artifact_file_name(now, &original_name.to_string_lossy()));
        let burned = burn_in(base, session.record().sites());
        save_rgb(&burned, &path)?;
        Some(path)
    } else {
        None
    };

    info!(
        "saved root ({} sites) to {}",
        record.sites.len(),
        csv_path.display()
    );
    Ok(SaveOutcome {
        csv_path,
        image_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn artifact_name_carries_stamp_and_original_base_name() {
        let now = Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 5).unwrap();
        assert_eq!(
            artifact_file_name(now, "molar.png"),
            "Measured-20260806-093005-molar.png"
        );
    }
}
