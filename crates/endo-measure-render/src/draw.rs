//! Bounds-checked raster primitives on `RgbImage` buffers.

use image::{Rgb, RgbImage};

#[inline]
fn put(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < image.width() as i32 && y < image.height() as i32 {
        image.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line segment between two pixel positions.
pub fn draw_line(image: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(image, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Cross marker: two perpendicular segments of half-length `radius` through
/// the center.
pub fn draw_cross(image: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    let (cx, cy) = center;
    draw_line(image, (cx - radius, cy), (cx + radius, cy), color);
    draw_line(image, (cx, cy - radius), (cx, cy + radius), color);
}

/// Midpoint-circle outline.
pub fn draw_circle_outline(image: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    if radius <= 0 {
        return;
    }
    let (cx, cy) = center;
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx - x, cy + y),
            (cx - x, cy - y),
            (cx - y, cy - x),
            (cx + y, cy - x),
            (cx + x, cy - y),
        ] {
            put(image, px, py, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Filled dot of the given radius.
pub fn draw_disc(image: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    let (cx, cy) = center;
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put(image, cx + dx, cy + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    #[test]
    fn line_connects_endpoints() {
        let mut img = RgbImage::new(20, 20);
        draw_line(&mut img, (2, 3), (15, 11), RED);
        assert_eq!(*img.get_pixel(2, 3), RED);
        assert_eq!(*img.get_pixel(15, 11), RED);
    }

    #[test]
    fn cross_marks_center_and_arms() {
        let mut img = RgbImage::new(20, 20);
        draw_cross(&mut img, (10, 10), 4, RED);
        assert_eq!(*img.get_pixel(10, 10), RED);
        assert_eq!(*img.get_pixel(6, 10), RED);
        assert_eq!(*img.get_pixel(10, 14), RED);
        // Diagonal stays untouched.
        assert_eq!(*img.get_pixel(7, 7), Rgb([0, 0, 0]));
    }

    #[test]
    fn circle_outline_is_hollow() {
        let mut img = RgbImage::new(40, 40);
        draw_circle_outline(&mut img, (20, 20), 10, RED);
        assert_eq!(*img.get_pixel(30, 20), RED);
        assert_eq!(*img.get_pixel(20, 10), RED);
        assert_eq!(*img.get_pixel(20, 20), Rgb([0, 0, 0]));
    }

    #[test]
    fn disc_is_filled() {
        let mut img = RgbImage::new(20, 20);
        draw_disc(&mut img, (10, 10), 3, RED);
        assert_eq!(*img.get_pixel(10, 10), RED);
        assert_eq!(*img.get_pixel(12, 10), RED);
        assert_eq!(*img.get_pixel(14, 10), Rgb([0, 0, 0]));
    }

    #[test]
    fn drawing_off_canvas_does_not_panic() {
        let mut img = RgbImage::new(10, 10);
        draw_cross(&mut img, (-5, -5), 4, RED);
        draw_circle_outline(&mut img, (9, 9), 30, RED);
        draw_disc(&mut img, (0, 0), 8, RED);
    }
}
