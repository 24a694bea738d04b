//! Application configuration.
//!
//! Loaded from a JSON file; every field has a standalone default so a partial
//! config (or none at all) still yields a working setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use endo_measure_core::DEFAULT_PIXELS_PER_MM;
use endo_measure_export::{StoreMode, DEFAULT_SEPARATOR};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_operator() -> String {
    std::env::var("USER").unwrap_or_else(|_| "Unknown".to_owned())
}

fn default_pixels_per_mm() -> f32 {
    DEFAULT_PIXELS_PER_MM
}

fn default_csv_separator() -> char {
    DEFAULT_SEPARATOR
}

fn default_save_scored_copy() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Operator name recorded in every exported row.
    #[serde(default = "default_operator")]
    pub operator: String,
    /// Calibration constant; fixed per deployment, not read from images.
    #[serde(default = "default_pixels_per_mm")]
    pub pixels_per_mm: f32,
    #[serde(default)]
    pub store_mode: StoreMode,
    #[serde(default = "default_csv_separator")]
    pub csv_separator: char,
    /// Whether saving also writes the burned-in image copy.
    #[serde(default = "default_save_scored_copy")]
    pub save_scored_copy: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            operator: default_operator(),
            pixels_per_mm: default_pixels_per_mm(),
            store_mode: StoreMode::default(),
            csv_separator: default_csv_separator(),
            save_scored_copy: default_save_scored_copy(),
        }
    }
}

impl AppConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_field_wise() {
        let cfg: AppConfig = serde_json::from_str(r#"{"operator": "GT"}"#).unwrap();
        assert_eq!(cfg.operator, "GT");
        assert_eq!(cfg.pixels_per_mm, DEFAULT_PIXELS_PER_MM);
        assert_eq!(cfg.store_mode, StoreMode::ImageDir);
        assert_eq!(cfg.csv_separator, ';');
        assert!(cfg.save_scored_copy);
    }

    #[test]
    fn round_trips_through_json() {
        let mut cfg = AppConfig::default();
        cfg.operator = "GT".to_owned();
        cfg.store_mode = StoreMode::ParentDir;
        cfg.pixels_per_mm = 25.0;

        let json = serde_json::to_string(&cfg).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operator, "GT");
        assert_eq!(back.store_mode, StoreMode::ParentDir);
        assert_eq!(back.pixels_per_mm, 25.0);
    }

    #[test]
    fn load_and_write_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("endo-measure.json");

        let cfg = AppConfig::default();
        cfg.write_json(&path).unwrap();
        let back = AppConfig::load_json(&path).unwrap();
        assert_eq!(back.csv_separator, cfg.csv_separator);
    }
}
