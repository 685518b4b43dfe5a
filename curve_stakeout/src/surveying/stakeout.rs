use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::cogo::{azimuth, forward};
use crate::curve::StationCoordinate;
use crate::geometry::{distance, Point};
use crate::units::normalize_azimuth;

/// Targets closer than this to the instrument give a zero layout element.
pub const COINCIDENT_TOLERANCE: f64 = 1e-6;

/// Side of the centreline, looking forward along increasing chainage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Point `distance` metres off the centreline, square to the forward
/// azimuth of `center`.
pub fn side_stake(center: &StationCoordinate, distance: f64, side: Side) -> Point {
    let normal = match side {
        Side::Left => center.azimuth - FRAC_PI_2,
        Side::Right => center.azimuth + FRAC_PI_2,
    };
    forward(center.point, normalize_azimuth(normal), distance)
}

/// Polar stake-out values of a target seen from an instrument station.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutElement {
    /// Azimuth from the instrument to the target.
    pub azimuth: f64,
    /// Clockwise angle to turn from the backsight direction.
    pub horizontal_angle: f64,
    pub distance: f64,
}

impl LayoutElement {
    /// True for the all-zero element returned for a target on the station.
    pub fn is_degenerate(&self) -> bool {
        self.distance == 0.0 && self.azimuth == 0.0 && self.horizontal_angle == 0.0
    }
}

/// Azimuth, turned angle and distance from `instrument` to `target` with the
/// instrument oriented on `backsight_azimuth`.
///
/// A target on top of the instrument yields the zero element instead of an
/// undefined azimuth.
pub fn polar_layout_elements(
    target: Point,
    instrument: Point,
    backsight_azimuth: f64,
) -> LayoutElement {
    let dist = distance(instrument, target);
    if dist < COINCIDENT_TOLERANCE {
        return LayoutElement::default();
    }
    let az = azimuth(instrument, target);
    LayoutElement {
        azimuth: az,
        horizontal_angle: normalize_azimuth(az - backsight_azimuth),
        distance: dist,
    }
}

/// Backsight azimuth from the instrument to a known reference point.
pub fn backsight_azimuth(instrument: Point, backsight: Point) -> f64 {
    azimuth(instrument, backsight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Segment;
    use std::f64::consts::PI;

    fn heading_north() -> StationCoordinate {
        StationCoordinate {
            point: Point::new(100.0, 50.0),
            azimuth: 0.0,
            segment: Segment::Straight,
        }
    }

    #[test]
    fn left_of_north_is_west() {
        let p = side_stake(&heading_north(), 5.0, Side::Left);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 45.0).abs() < 1e-9);
        let p = side_stake(&heading_north(), 5.0, Side::Right);
        assert!((p.y - 55.0).abs() < 1e-9);
    }

    #[test]
    fn side_stake_is_perpendicular() {
        let c = StationCoordinate {
            point: Point::new(0.0, 0.0),
            azimuth: 1.1,
            segment: Segment::Circular,
        };
        let p = side_stake(&c, 7.5, Side::Right);
        assert!((distance(c.point, p) - 7.5).abs() < 1e-9);
        assert!((azimuth(c.point, p) - (1.1 + PI / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn polar_elements() {
        let station = Point::new(0.0, 0.0);
        let target = Point::new(0.0, 10.0);
        let el = polar_layout_elements(target, station, PI);
        assert!((el.azimuth - PI / 2.0).abs() < 1e-12);
        assert!((el.horizontal_angle - 1.5 * PI).abs() < 1e-12);
        assert!((el.distance - 10.0).abs() < 1e-12);
        assert!(!el.is_degenerate());
    }

    #[test]
    fn coincident_target_is_zero() {
        let p = Point::new(12.0, 34.0);
        let el = polar_layout_elements(p, p, 2.5);
        assert_eq!(el, LayoutElement::default());
        assert!(el.is_degenerate());
    }

    #[test]
    fn backsight_from_points() {
        let az = backsight_azimuth(Point::new(0.0, 0.0), Point::new(-5.0, 0.0));
        assert!((az - PI).abs() < 1e-12);
    }
}
