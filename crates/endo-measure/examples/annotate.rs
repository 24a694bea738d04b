//! End-to-end annotation run on a synthetic radiograph.
//!
//! Writes a gray test image into a scratch directory, records an apex and a
//! CEJ site on it the way a UI shell would, and saves: one row in
//! `Measurements.csv` plus the burned-in `Measured-*` copy.

use std::error::Error;
use std::fs;

use image::{Rgb, RgbImage};
use log::{info, LevelFilter};
use nalgebra::Point2;

use endo_measure::core::{
    init_with_level, AnnotationSession, ImageType, Quadrant, RootName, Tooth, ViewportTransform,
};
use endo_measure::io::save_rgb;
use endo_measure::{save_session, AppConfig};

fn main() -> Result<(), Box<dyn Error>> {
    init_with_level(LevelFilter::Info)?;

    let dir = std::env::temp_dir().join("endo-measure-demo");
    fs::create_dir_all(&dir)?;
    let source = dir.join("radiograph.png");

    // Synthetic 400x300 radiograph with a soft vertical gradient.
    let base = RgbImage::from_fn(400, 300, |_, y| {
        let v = 60 + (y / 4) as u8;
        Rgb([v, v, v])
    });
    save_rgb(&base, &source)?;

    let config = AppConfig::default();
    let mut session = AnnotationSession::new([base.width(), base.height()], config.operator.clone())
        .with_calibration(config.pixels_per_mm);

    // The shell reports clicks in viewport coordinates; here the image is
    // shown 1:1 in a larger window, so the mapping only removes centering.
    let view = ViewportTransform::new([600.0, 400.0], [400.0, 300.0], 1.0);

    session.press(Point2::new(300.0, 230.0), &view)?;
    session.assign_site("Apex")?;
    info!("guide circles active: {}", session.guides().len());

    session.press(Point2::new(280.0, 120.0), &view)?;
    session.assign_site("CEJ M")?;

    // What the operator would see right now: sites, guide circles, and a
    // fresh pending point, at the current zoom.
    session.press(Point2::new(150.0, 100.0), &view)?;
    let preview = endo_measure::render::render_overlay(
        &base,
        session.record().sites(),
        session.guides(),
        session.pending(),
        1.0,
    );
    save_rgb(&preview, &dir.join("overlay-preview.png"))?;
    session.assign_site("Lesion periphery")?;

    let record = session.record_mut();
    record.set_identification(
        Quadrant::UpperLeft,
        Tooth::FirstMolar,
        RootName::MesioBuccal,
        ImageType::Preop,
    );
    record.set_observation("PAI", "2");
    record.set_comments("demo run");

    let outcome = save_session(&mut session, &base, &source, &config)?;
    info!("measurements: {}", outcome.csv_path.display());
    if let Some(artifact) = outcome.image_path {
        info!("burned-in copy: {}", artifact.display());
    }
    Ok(())
}
