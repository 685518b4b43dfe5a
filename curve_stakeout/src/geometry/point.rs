//! Basic 2D point type used throughout the crate.

/// Representation of a 2D point.
///
/// `x` is the northing and `y` the easting, so azimuths measured clockwise
/// from north come out of `atan2(dy, dx)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rounds both coordinates to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self::new(
            super::round_to(self.x, decimals),
            super::round_to(self.y, decimals),
        )
    }
}
