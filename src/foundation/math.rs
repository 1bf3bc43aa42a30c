use crate::foundation::core::{Point, Vec2};

/// Golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Point on a circle of `radius` around `center` at `angle` radians.
///
/// Screen convention: y grows downward, so `angle = PI / 2` points straight down.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

/// Offset of length `distance` perpendicular to the segment `a -> b`.
///
/// The offset is the segment direction turned a quarter turn clockwise on screen (y down),
/// so a positive distance on a left-to-right segment points downward. A zero-length segment
/// has no direction and yields `Vec2::ZERO`.
pub fn perpendicular_offset(a: Point, b: Point, distance: f64) -> Vec2 {
    let d = b - a;
    let len = d.hypot();
    if len <= f64::EPSILON || !len.is_finite() {
        return Vec2::ZERO;
    }
    Vec2::new(-d.y, d.x) * (distance / len)
}

/// Direction of the segment `a -> b` in radians (atan2 convention).
pub fn segment_angle(a: Point, b: Point) -> f64 {
    (b - a).atan2()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
