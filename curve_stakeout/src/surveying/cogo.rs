//! Basic coordinate geometry (COGO) on the north/east grid.

use crate::geometry::Point;
use crate::units::normalize_azimuth;

/// Azimuth from `a` to `b`, clockwise from north, in `[0, 2π)`.
///
/// Coincident points give `0`.
pub fn azimuth(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    normalize_azimuth(dy.atan2(dx))
}

/// Computes a new point from a starting point, an azimuth and a distance.
pub fn forward(start: Point, azimuth: f64, distance: f64) -> Point {
    let (sin, cos) = azimuth.sin_cos();
    Point::new(start.x + distance * cos, start.y + distance * sin)
}
