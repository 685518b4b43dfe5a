//! Coordinates and azimuth of any station along the curve.

use serde::{Deserialize, Serialize};

use super::{CurveElements, MainPoints, TurnDirection};
use crate::error::CurveError;
use crate::geometry::{local_to_global, Point};
use crate::units::normalize_azimuth;

/// Longitudinal segment a station falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Segment {
    Straight,
    EntrySpiral,
    Circular,
    ExitSpiral,
}

impl Segment {
    pub fn label(self) -> &'static str {
        match self {
            Segment::Straight => "straight",
            Segment::EntrySpiral => "entrySpiral",
            Segment::Circular => "circular",
            Segment::ExitSpiral => "exitSpiral",
        }
    }
}

/// Position and forward azimuth of a centreline station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationCoordinate {
    pub point: Point,
    pub azimuth: f64,
    pub segment: Segment,
}

impl StationCoordinate {
    pub fn is_finite(&self) -> bool {
        self.point.is_finite() && self.azimuth.is_finite()
    }
}

/// Clothoid position `l` metres into a spiral of length `ls` that reaches
/// `radius` at its end.
///
/// Returns the distance along the tangent, the unsigned distance across it
/// and the unsigned tangent deflection.
pub fn spiral_local(l: f64, radius: f64, ls: f64) -> (f64, f64, f64) {
    if l <= 0.0 || ls <= 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let rl = radius * ls;
    let along = l - l.powi(5) / (40.0 * rl * rl);
    let across = l.powi(3) / (6.0 * rl) - l.powi(7) / (336.0 * rl.powi(3));
    let beta = l * l / (2.0 * rl);
    (along, across, beta)
}

/// Evaluates `station` on the curve described by `elements` and `points`.
///
/// Stations before ZH or after HZ continue along the tangents.
pub fn evaluate_station(
    station: f64,
    elements: &CurveElements,
    points: &MainPoints,
    turn: TurnDirection,
) -> Result<StationCoordinate, CurveError> {
    if !station.is_finite() {
        return Err(CurveError::InvalidStation(station.to_string()));
    }
    let cc = turn.sign();
    let r = elements.radius;
    let ls = elements.transition_length;
    let (zh, hy, yh, hz) = (&points.zh, &points.hy, &points.yh, &points.hz);

    let (point, azimuth, segment) = if station < zh.station {
        let l = zh.station - station;
        (
            local_to_global(zh.point, zh.azimuth, -l, 0.0),
            zh.azimuth,
            Segment::Straight,
        )
    } else if station > hz.station {
        let l = station - hz.station;
        (
            local_to_global(hz.point, hz.azimuth, l, 0.0),
            hz.azimuth,
            Segment::Straight,
        )
    } else if station <= hy.station {
        let (x, y, beta) = spiral_local(station - zh.station, r, ls);
        (
            local_to_global(zh.point, zh.azimuth, x, cc * y),
            zh.azimuth + cc * beta,
            Segment::EntrySpiral,
        )
    } else if station <= yh.station {
        let phi = (station - hy.station) / r;
        (
            local_to_global(hy.point, hy.azimuth, r * phi.sin(), cc * r * (1.0 - phi.cos())),
            hy.azimuth + cc * phi,
            Segment::Circular,
        )
    } else {
        // Exit spiral, measured backwards from HZ. The curve stays on the
        // centre side of the exit tangent, hence `-x` but `+cc*y`.
        let (x, y, beta) = spiral_local(hz.station - station, r, ls);
        (
            local_to_global(hz.point, hz.azimuth, -x, cc * y),
            hz.azimuth - cc * beta,
            Segment::ExitSpiral,
        )
    };

    Ok(StationCoordinate {
        point,
        azimuth: normalize_azimuth(azimuth),
        segment,
    })
}
