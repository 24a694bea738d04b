//! Distance and canal-curvature calculations on recorded sites.

use nalgebra::Point2;

/// Euclidean distance between two image points, in pixels.
pub fn distance_px(a: Point2<f32>, b: Point2<f32>) -> f32 {
    nalgebra::distance(&a, &b)
}

/// Euclidean distance in millimetres under the given calibration constant.
pub fn distance_mm(a: Point2<f32>, b: Point2<f32>, px_per_mm: f32) -> f32 {
    distance_px(a, b) / px_per_mm
}

/// Schneider angle of canal curvature, in degrees.
///
/// `alpha = 180 - beta`, where `beta` is the angle at the curvature point
/// between the canal entrance and the apex gutta-percha point (law of
/// cosines). Returns `None` when any two of the points coincide, which would
/// leave the angle undefined.
pub fn schneider_angle_deg(
    apex_gp: Point2<f32>,
    curvature: Point2<f32>,
    entrance: Point2<f32>,
) -> Option<f32> {
    let a = distance_px(curvature, apex_gp);
    let b = distance_px(entrance, apex_gp);
    let c = distance_px(entrance, curvature);
    if a == 0.0 || c == 0.0 {
        return None;
    }

    // Floating-point noise can push the cosine a hair outside [-1, 1].
    let cos_beta = ((a * a + c * c - b * b) / (2.0 * a * c)).clamp(-1.0, 1.0);
    let beta = cos_beta.acos().to_degrees();
    Some(180.0 - beta)
}
