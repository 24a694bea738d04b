use nalgebra::Point2;

/// Result of mapping a pointer position into image-pixel space.
///
/// `Outside` carries the raw mapped coordinate so callers can report it
/// ("Click out of bounds: (x, y)") without recording anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MappedPoint {
    Inside(Point2<f32>),
    Outside(Point2<f32>),
}

impl MappedPoint {
    /// The mapped coordinate if it landed inside the image extent.
    pub fn inside(self) -> Option<Point2<f32>> {
        match self {
            MappedPoint::Inside(p) => Some(p),
            MappedPoint::Outside(_) => None,
        }
    }

    /// The raw mapped coordinate regardless of bounds.
    pub fn raw(self) -> Point2<f32> {
        match self {
            MappedPoint::Inside(p) | MappedPoint::Outside(p) => p,
        }
    }
}

/// Display-space state of the viewer at the moment of a pointer event.
///
/// The displayed (scaled) image is centered in a possibly larger viewport;
/// `scale` is the current zoom factor relative to image pixels.
#[derive(Clone, Copy, Debug)]
pub struct ViewportTransform {
    pub viewport: [f32; 2],
    pub displayed: [f32; 2],
    pub scale: f32,
}

impl ViewportTransform {
    pub fn new(viewport: [f32; 2], displayed: [f32; 2], scale: f32) -> Self {
        Self {
            viewport,
            displayed,
            scale,
        }
    }

    /// Centering offset of the displayed image inside the viewport, per axis.
    fn offset(&self) -> [f32; 2] {
        [
            (self.viewport[0] - self.displayed[0]) / 2.0,
            (self.viewport[1] - self.displayed[1]) / 2.0,
        ]
    }

    /// Map a pointer position in viewport space to image-pixel space.
    ///
    /// Subtracts the centering offset, then divides by the zoom factor. The
    /// result is bounds-tested against `[0, w) x [0, h)`; out-of-bounds
    /// pointers must not be recorded as sites.
    pub fn to_image_space(&self, pointer: Point2<f32>, image_size: [u32; 2]) -> MappedPoint {
        let offset = self.offset();
        let x = (pointer.x - offset[0]) / self.scale;
        let y = (pointer.y - offset[1]) / self.scale;
        let p = Point2::new(x, y);

        let in_x = x >= 0.0 && x < image_size[0] as f32;
        let in_y = y >= 0.0 && y < image_size[1] as f32;
        if in_x && in_y {
            MappedPoint::Inside(p)
        } else {
            MappedPoint::Outside(p)
        }
    }

    /// Inverse of [`to_image_space`](Self::to_image_space): image pixels back
    /// to viewport coordinates.
    pub fn to_display_space(&self, p: Point2<f32>) -> Point2<f32> {
        let offset = self.offset();
        Point2::new(p.x * self.scale + offset[0], p.y * self.scale + offset[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn view(scale: f32) -> ViewportTransform {
        // 100x80 image displayed at `scale` inside an 800x600 viewport.
        ViewportTransform::new([800.0, 600.0], [100.0 * scale, 80.0 * scale], scale)
    }

    #[test]
    fn maps_viewport_center_to_image_center() {
        let v = view(2.0);
        let mapped = v.to_image_space(Point2::new(400.0, 300.0), [100, 80]);
        let p = mapped.inside().expect("center is inside");
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 40.0);
    }

    #[test]
    fn round_trips_within_tolerance() {
        for scale in [0.5, 1.0, 1.1, 3.7] {
            let v = view(scale);
            for p in [
                Point2::new(0.0_f32, 0.0),
                Point2::new(12.25, 63.5),
                Point2::new(99.0, 79.0),
            ] {
                let display = v.to_display_space(p);
                let back = v.to_image_space(display, [100, 80]);
                let q = back.inside().expect("forward-mapped point maps back inside");
                assert_relative_eq!(q.x, p.x, epsilon = 1e-3);
                assert_relative_eq!(q.y, p.y, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn flags_points_outside_the_image() {
        let v = view(1.0);
        // Viewport corner lands well outside the centered 100x80 image.
        let mapped = v.to_image_space(Point2::new(0.0, 0.0), [100, 80]);
        assert!(mapped.inside().is_none());
        let raw = mapped.raw();
        assert!(raw.x < 0.0 && raw.y < 0.0);
    }

    #[test]
    fn image_extent_is_half_open() {
        let v = ViewportTransform::new([100.0, 80.0], [100.0, 80.0], 1.0);
        assert!(v
            .to_image_space(Point2::new(99.9, 79.9), [100, 80])
            .inside()
            .is_some());
        assert!(v
            .to_image_space(Point2::new(100.0, 0.0), [100, 80])
            .inside()
            .is_none());
    }
}
