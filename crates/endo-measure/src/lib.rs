//! High-level facade crate for the `endo-measure-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying member crates
//! - the application configuration
//! - (feature-gated) image collaborators and the end-to-end save pipeline
//!   that turns a finished annotation session into a CSV row and a burned-in
//!   image artifact.
//!
//! ## Quickstart
//!
//! ```no_run
//! use endo_measure::core::{AnnotationSession, ViewportTransform};
//! use endo_measure::{save_session, AppConfig};
//! use nalgebra::Point2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = endo_measure::io::load_rgb("radiograph.png")?;
//! let mut session = AnnotationSession::new([base.width(), base.height()], "GT");
//!
//! let view = ViewportTransform::new([800.0, 600.0], [800.0, 600.0], 1.0);
//! session.press(Point2::new(400.0, 300.0), &view)?;
//! session.assign_site("Apex")?;
//!
//! let source = std::path::Path::new("radiograph.png");
//! let outcome = save_session(&mut session, &base, source, &AppConfig::default())?;
//! println!("saved {}", outcome.csv_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `endo_measure::core`: session, record, sites, guide rules, viewport
//!   mapping, clinical catalogs and calculations.
//! - `endo_measure::export`: the append-only `Measurements.csv` contract.
//! - `endo_measure::render` (feature `image`): overlay and burn-in rendering.
//! - `endo_measure::{io, filter, save}` (feature `image`): image decode and
//!   encode, brightness/contrast, and the save pipeline.

pub use endo_measure_core as core;
pub use endo_measure_export as export;
#[cfg(feature = "image")]
pub use endo_measure_render as render;

pub mod config;
#[cfg(feature = "image")]
pub mod filter;
#[cfg(feature = "image")]
pub mod io;
#[cfg(feature = "image")]
pub mod save;

pub use config::{AppConfig, ConfigError};
pub use endo_measure_core::{AnnotationSession, RootRecord, SessionError, ViewportTransform};
#[cfg(feature = "image")]
pub use save::{save_session, save_session_at, SaveError, SaveOutcome};
