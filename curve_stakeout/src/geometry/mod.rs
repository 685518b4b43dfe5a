//! Basic geometry primitives for curve layout.

pub mod point;
pub use point::Point;

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Places a point given in a local frame (`along` the heading, `across` to
/// its right) into global coordinates. The frame sits at `origin` and is
/// oriented by the clockwise-from-north `azimuth`.
pub fn local_to_global(origin: Point, azimuth: f64, along: f64, across: f64) -> Point {
    let (sin, cos) = azimuth.sin_cos();
    Point::new(
        origin.x + along * cos - across * sin,
        origin.y + along * sin + across * cos,
    )
}

/// Rounds `value` to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn distance_works() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn local_frame_heading_north() {
        let p = local_to_global(Point::new(10.0, 20.0), 0.0, 5.0, 2.0);
        assert!((p.x - 15.0).abs() < 1e-9);
        assert!((p.y - 22.0).abs() < 1e-9);
    }

    #[test]
    fn local_frame_heading_east() {
        // Heading east, the right-hand side points south.
        let p = local_to_global(Point::new(0.0, 0.0), FRAC_PI_2, 5.0, 2.0);
        assert!((p.x + 2.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn round_to_three_places() {
        assert!((round_to(1.23456, 3) - 1.235).abs() < 1e-12);
        assert!((round_to(-2.0004, 3) + 2.0).abs() < 1e-12);
        let p = Point::new(1.00049, 2.99951).rounded(3);
        assert_eq!(p, Point::new(1.0, 3.0));
    }
}
