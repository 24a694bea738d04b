//! Brightness/contrast adjustment for display.
//!
//! Stateless pixel transform applied to the decoded image before rendering;
//! annotation coordinates always refer to the unfiltered image geometry.

use image::RgbImage;

/// Apply `output = clamp(alpha * input + beta)` channel-wise, with
/// `alpha = (contrast + 100) / 100` and `beta = brightness`.
///
/// Both inputs live on the operator's `[-100, 100]` slider range and are
/// clamped to it. Returns a new buffer.
pub fn apply_brightness_contrast(image: &RgbImage, brightness: i32, contrast: i32) -> RgbImage {
    let alpha = (contrast.clamp(-100, 100) + 100) as f32 / 100.0;
    let beta = brightness.clamp(-100, 100) as f32;

    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = (alpha * *channel as f32 + beta).clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gray(value: u8) -> RgbImage {
        RgbImage::from_pixel(4, 4, Rgb([value, value, value]))
    }

    #[test]
    fn identity_at_zero_zero() {
        let img = gray(120);
        let out = apply_brightness_contrast(&img, 0, 0);
        assert_eq!(out, img);
    }

    #[test]
    fn brightness_shifts_and_clamps() {
        let out = apply_brightness_contrast(&gray(200), 100, 0);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255]);

        let out = apply_brightness_contrast(&gray(40), -100, 0);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn contrast_scales_around_zero() {
        // alpha = 2.0 at full contrast
        let out = apply_brightness_contrast(&gray(100), 0, 100);
        assert_eq!(out.get_pixel(0, 0).0, [200, 200, 200]);

        // alpha = 0.5 at half negative contrast
        let out = apply_brightness_contrast(&gray(100), 0, -50);
        assert_eq!(out.get_pixel(0, 0).0, [50, 50, 50]);
    }

    #[test]
    fn inputs_beyond_the_slider_range_are_clamped() {
        let a = apply_brightness_contrast(&gray(100), 1000, 0);
        let b = apply_brightness_contrast(&gray(100), 100, 0);
        assert_eq!(a, b);
    }
}
