use image::{Rgb, RgbImage};
use log::debug;
use nalgebra::Point2;

use endo_measure_core::{GuideCircle, SiteRegistry};

use crate::draw::{draw_circle_outline, draw_cross, draw_disc};
use crate::font::draw_text;

/// Confirmed sites and guide circles draw in red.
pub const SITE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// The unconfirmed pending point draws in green so it reads as provisional.
pub const PENDING_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Marker half-length in image pixels for the current zoom: the marker keeps
/// a roughly constant apparent size on screen, with a floor so it never
/// vanishes at high zoom.
fn display_radius(scale: f32) -> i32 {
    (5.0 / scale).max(2.0).round() as i32
}

/// Label magnification for the current zoom, clamped to stay legible.
fn label_scale(scale: f32) -> u32 {
    (2.0 / scale).round().clamp(1.0, 4.0) as u32
}

/// Render the live display overlay: confirmed sites as labelled crosses,
/// guide circles, and the pending (unconfirmed) point in a distinct color.
///
/// Returns a new image; the base is never mutated.
pub fn render_overlay(
    base: &RgbImage,
    sites: &SiteRegistry,
    guides: &[GuideCircle],
    pending: Option<Point2<f32>>,
    scale: f32,
) -> RgbImage {
    let mut out = base.clone();
    let radius = display_radius(scale);
    let text_scale = label_scale(scale);

    for circle in guides {
        draw_circle_outline(
            &mut out,
            (circle.center.x.round() as i32, circle.center.y.round() as i32),
            circle.radius.round() as i32,
            SITE_COLOR,
        );
    }

    for (name, point) in sites.iter() {
        let center = (point.x.round() as i32, point.y.round() as i32);
        draw_cross(&mut out, center, radius, SITE_COLOR);
        draw_text(
            &mut out,
            center.0 + radius + 2,
            center.1 + radius + 2,
            name,
            SITE_COLOR,
            text_scale,
        );
    }

    if let Some(p) = pending {
        draw_cross(
            &mut out,
            (p.x.round() as i32, p.y.round() as i32),
            radius,
            PENDING_COLOR,
        );
    }

    debug!(
        "overlay rendered: {} sites, {} guides, pending={}",
        sites.len(),
        guides.len(),
        pending.is_some()
    );
    out
}

/// Marker radius for the burned-in artifact. Fixed, not zoom-dependent: the
/// artifact targets the full-resolution image.
const BURN_IN_RADIUS: i32 = 5;
const BURN_IN_LABEL_OFFSET: i32 = 10;

/// Produce the persistable copy with confirmed sites drawn in permanently.
///
/// Guide circles and any pending point are deliberately absent: only what
/// the operator confirmed belongs in the saved artifact. The base image is
/// never mutated.
pub fn burn_in(base: &RgbImage, sites: &SiteRegistry) -> RgbImage {
    let mut out = base.clone();

    for (name, point) in sites.iter() {
        let center = (point.x.round() as i32, point.y.round() as i32);
        draw_disc(&mut out, center, BURN_IN_RADIUS, SITE_COLOR);
        draw_text(
            &mut out,
            center.0 + BURN_IN_LABEL_OFFSET,
            center.1,
            name,
            SITE_COLOR,
            1,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn registry() -> SiteRegistry {
        let mut reg = SiteRegistry::new();
        reg.record("Apex", Point2::new(60.0, 60.0));
        reg
    }

    #[test]
    fn marker_size_tracks_zoom_with_floor() {
        assert_eq!(display_radius(1.0), 5);
        assert_eq!(display_radius(0.5), 10);
        assert_eq!(display_radius(10.0), 2);
    }

    #[test]
    fn overlay_draws_sites_guides_and_pending() {
        let base = RgbImage::new(200, 200);
        let guides = [GuideCircle {
            center: Point2::new(60.0, 60.0),
            radius: 40.0,
        }];
        let out = render_overlay(
            &base,
            &registry(),
            &guides,
            Some(Point2::new(150.0, 150.0)),
            1.0,
        );

        // Cross center at the site, green cross at the pending point.
        assert_eq!(*out.get_pixel(60, 60), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(150, 150), Rgb([0, 255, 0]));
        // Guide circle rim, 40 px right of the center.
        assert_eq!(*out.get_pixel(100, 60), Rgb([255, 0, 0]));
    }

    #[test]
    fn overlay_leaves_base_untouched() {
        let base = RgbImage::new(200, 200);
        let _ = render_overlay(&base, &registry(), &[], None, 1.0);
        assert!(base.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn burn_in_contains_sites_but_no_guides() {
        let base = RgbImage::new(200, 200);
        let out = burn_in(&base, &registry());

        // Filled dot at the site.
        assert_eq!(*out.get_pixel(60, 60), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(63, 60), Rgb([255, 0, 0]));
        // Where the live guide circle rim would be: untouched.
        assert_eq!(*out.get_pixel(100, 60), BLACK);
        // Label area to the lower-right has painted pixels.
        let label_painted = (70..120)
            .flat_map(|x| (55..70).map(move |y| (x, y)))
            .any(|(x, y)| *out.get_pixel(x, y) != BLACK);
        assert!(label_painted);
    }

    #[test]
    fn burn_in_ignores_markers_near_the_border_gracefully() {
        let base = RgbImage::new(50, 50);
        let mut reg = SiteRegistry::new();
        reg.record("CEJ D", Point2::new(49.0, 49.0));
        let out = burn_in(&base, &reg);
        assert_eq!(*out.get_pixel(49, 49), Rgb([255, 0, 0]));
    }
}
