//! Station table rows handed to reports and file writers.

use serde::{Deserialize, Serialize};

use crate::curve::{MainPointKind, Segment, StationCoordinate};
use crate::geometry::{round_to, Point};
use crate::surveying::{polar_layout_elements, side_stake, LayoutElement, Side};
use crate::units::format_station;

/// One evaluated centreline station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPoint {
    pub index: usize,
    /// Control label (`ZH`, `HY`, ...) or the formatted chainage.
    pub point_name: String,
    pub station: f64,
    pub x: f64,
    pub y: f64,
    pub azimuth: f64,
    pub segment: Segment,
    pub remark: String,
}

impl StationPoint {
    pub fn new(
        index: usize,
        station: f64,
        coord: &StationCoordinate,
        control: Option<MainPointKind>,
    ) -> Self {
        let (point_name, remark) = match control {
            Some(kind) => (kind.label().to_string(), kind.description().to_string()),
            None => (format_station(station), String::new()),
        };
        Self {
            index,
            point_name,
            station,
            x: coord.point.x,
            y: coord.point.y,
            azimuth: coord.azimuth,
            segment: coord.segment,
            remark,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn coordinate(&self) -> StationCoordinate {
        StationCoordinate {
            point: self.point(),
            azimuth: self.azimuth,
            segment: self.segment,
        }
    }

    /// Copy with station and coordinates rounded to `decimals` and the
    /// azimuth to `angle_decimals` places.
    pub fn rounded(&self, decimals: u32, angle_decimals: u32) -> Self {
        Self {
            station: round_to(self.station, decimals),
            x: round_to(self.x, decimals),
            y: round_to(self.y, decimals),
            azimuth: round_to(self.azimuth, angle_decimals),
            ..self.clone()
        }
    }
}

/// Offset stakes either side of a centreline station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideStakeRow {
    pub center: StationPoint,
    pub offset: f64,
    pub left: Point,
    pub right: Point,
}

/// Builds left and right stakes `offset` metres from every row.
pub fn side_stake_rows(points: &[StationPoint], offset: f64) -> Vec<SideStakeRow> {
    points
        .iter()
        .map(|p| {
            let coord = p.coordinate();
            SideStakeRow {
                center: p.clone(),
                offset,
                left: side_stake(&coord, offset, Side::Left),
                right: side_stake(&coord, offset, Side::Right),
            }
        })
        .collect()
}

/// Polar stake-out values for the centre stake and optional side stakes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeoutRow {
    pub center: StationPoint,
    pub center_layout: LayoutElement,
    pub left_layout: Option<LayoutElement>,
    pub right_layout: Option<LayoutElement>,
}

/// Computes polar stake-out values from `instrument` for every row.
///
/// Side stakes are included when `offset` is given.
pub fn stakeout_rows(
    points: &[StationPoint],
    instrument: Point,
    backsight_azimuth: f64,
    offset: Option<f64>,
) -> Vec<StakeoutRow> {
    points
        .iter()
        .map(|p| {
            let coord = p.coordinate();
            let layout =
                |target: Point| polar_layout_elements(target, instrument, backsight_azimuth);
            StakeoutRow {
                center: p.clone(),
                center_layout: layout(coord.point),
                left_layout: offset.map(|d| layout(side_stake(&coord, d, Side::Left))),
                right_layout: offset.map(|d| layout(side_stake(&coord, d, Side::Right))),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;

    fn row(name: Option<MainPointKind>) -> StationPoint {
        let coord = StationCoordinate {
            point: Point::new(10.12345, 20.98765),
            azimuth: 0.1234567891,
            segment: Segment::Circular,
        };
        StationPoint::new(3, 1020.0004, &coord, name)
    }

    #[test]
    fn names_and_remarks() {
        let plain = row(None);
        assert_eq!(plain.point_name, "K1+20.000");
        assert!(plain.remark.is_empty());
        let control = row(Some(MainPointKind::Qz));
        assert_eq!(control.point_name, "QZ");
        assert_eq!(control.remark, "mid curve");
    }

    #[test]
    fn rounding_policy() {
        let r = row(None).rounded(3, 6);
        assert!((r.x - 10.123).abs() < 1e-12);
        assert!((r.y - 20.988).abs() < 1e-12);
        assert!((r.station - 1020.0).abs() < 1e-12);
        assert!((r.azimuth - 0.123457).abs() < 1e-12);
        assert_eq!(r.index, 3);
    }

    #[test]
    fn side_rows_are_symmetric() {
        let rows = side_stake_rows(&[row(None)], 4.0);
        let r = &rows[0];
        let c = r.center.point();
        assert!((distance(c, r.left) - 4.0).abs() < 1e-9);
        assert!((distance(c, r.right) - 4.0).abs() < 1e-9);
        assert!((distance(r.left, r.right) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn stakeout_rows_from_instrument() {
        let rows = stakeout_rows(&[row(None)], Point::new(10.12345, 20.98765), 0.0, Some(2.0));
        let r = &rows[0];
        assert!(r.center_layout.is_degenerate());
        let left = r.left_layout.unwrap();
        assert!((left.distance - 2.0).abs() < 1e-9);
        assert!(stakeout_rows(&[row(None)], Point::new(0.0, 0.0), 0.0, None)[0]
            .left_layout
            .is_none());
    }
}
