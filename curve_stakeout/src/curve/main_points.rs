//! The five control points ZH, HY, QZ, YH and HZ.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::{evaluate_station, CurveElements, TurnDirection};
use crate::error::CurveError;
use crate::geometry::{local_to_global, Point};
use crate::units::normalize_azimuth;

/// Canonical control point labels in stationing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainPointKind {
    #[serde(rename = "ZH")]
    Zh,
    #[serde(rename = "HY")]
    Hy,
    #[serde(rename = "QZ")]
    Qz,
    #[serde(rename = "YH")]
    Yh,
    #[serde(rename = "HZ")]
    Hz,
}

impl MainPointKind {
    pub const ALL: [MainPointKind; 5] = [
        MainPointKind::Zh,
        MainPointKind::Hy,
        MainPointKind::Qz,
        MainPointKind::Yh,
        MainPointKind::Hz,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainPointKind::Zh => "ZH",
            MainPointKind::Hy => "HY",
            MainPointKind::Qz => "QZ",
            MainPointKind::Yh => "YH",
            MainPointKind::Hz => "HZ",
        }
    }

    /// Remark used in station tables.
    pub fn description(self) -> &'static str {
        match self {
            MainPointKind::Zh => "tangent to spiral",
            MainPointKind::Hy => "spiral to curve",
            MainPointKind::Qz => "mid curve",
            MainPointKind::Yh => "curve to spiral",
            MainPointKind::Hz => "spiral to tangent",
        }
    }
}

/// One control point with its chainage and forward azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub kind: MainPointKind,
    pub station: f64,
    pub point: Point,
    pub azimuth: f64,
}

impl ControlPoint {
    fn new(kind: MainPointKind, station: f64, point: Point, azimuth: f64) -> Self {
        Self {
            kind,
            station,
            point,
            azimuth: normalize_azimuth(azimuth),
        }
    }
}

/// Where the curve sits: intersection point, incoming azimuth, turn side
/// and the chainage of the intersection point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub intersection: Point,
    pub start_azimuth: f64,
    pub turn: TurnDirection,
    pub intersection_station: f64,
}

impl Placement {
    fn validate(&self) -> Result<(), CurveError> {
        if !self.intersection.is_finite() {
            return Err(CurveError::placement(format!(
                "intersection point ({}, {}) is not finite",
                self.intersection.x, self.intersection.y
            )));
        }
        if !self.start_azimuth.is_finite() {
            return Err(CurveError::placement("start azimuth is not finite"));
        }
        if !self.intersection_station.is_finite() {
            return Err(CurveError::placement("intersection station is not finite"));
        }
        Ok(())
    }
}

/// Control points of a located curve, in stationing order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainPoints {
    pub zh: ControlPoint,
    pub hy: ControlPoint,
    pub qz: ControlPoint,
    pub yh: ControlPoint,
    pub hz: ControlPoint,
}

impl MainPoints {
    /// Locates the control points of `elements` placed by `placement`.
    ///
    /// ZH and HZ are projected from the intersection point. HY, QZ and YH
    /// are first placed with the closed-form offsets and then re-evaluated
    /// through [`evaluate_station`] against the final ZH/HZ, so the table
    /// and the control points come from the same equations.
    pub fn locate(elements: &CurveElements, placement: &Placement) -> Result<Self, CurveError> {
        elements.check_complete()?;
        placement.validate()?;

        let cc = placement.turn.sign();
        let e = elements;
        let jd = placement.intersection;
        let az = normalize_azimuth(placement.start_azimuth);
        let az_exit = normalize_azimuth(az + cc * e.alpha);

        let zh_station = placement.intersection_station - e.tangent;
        let hy_station = zh_station + e.transition_length;
        let qz_station = zh_station + e.total_length / 2.0;
        let yh_station = hy_station + e.arc_length;
        let hz_station = zh_station + e.total_length;

        let zh_point = local_to_global(jd, az, -e.tangent, 0.0);
        let hz_point = local_to_global(jd, az_exit, e.tangent, 0.0);
        let bisector = az + cc * (FRAC_PI_2 + e.alpha / 2.0);

        let draft = MainPoints {
            zh: ControlPoint::new(MainPointKind::Zh, zh_station, zh_point, az),
            hy: ControlPoint::new(
                MainPointKind::Hy,
                hy_station,
                local_to_global(zh_point, az, e.x0, cc * e.y0),
                az + cc * e.beta0,
            ),
            qz: ControlPoint::new(
                MainPointKind::Qz,
                qz_station,
                local_to_global(jd, bisector, e.external, 0.0),
                az + cc * e.alpha / 2.0,
            ),
            yh: ControlPoint::new(
                MainPointKind::Yh,
                yh_station,
                local_to_global(hz_point, az_exit, -e.x0, cc * e.y0),
                az_exit - cc * e.beta0,
            ),
            hz: ControlPoint::new(MainPointKind::Hz, hz_station, hz_point, az_exit),
        };

        let mut points = draft;
        points.hy = refine(points.hy, e, &points, placement.turn);
        points.qz = refine(points.qz, e, &points, placement.turn);
        points.yh = refine(points.yh, e, &points, placement.turn);
        log::debug!(
            "main points: ZH={:.3} HY={:.3} QZ={:.3} YH={:.3} HZ={:.3}",
            points.zh.station,
            points.hy.station,
            points.qz.station,
            points.yh.station,
            points.hz.station
        );
        Ok(points)
    }

    /// Control points in stationing order.
    pub fn as_array(&self) -> [ControlPoint; 5] {
        [self.zh, self.hy, self.qz, self.yh, self.hz]
    }

    pub fn get(&self, kind: MainPointKind) -> &ControlPoint {
        match kind {
            MainPointKind::Zh => &self.zh,
            MainPointKind::Hy => &self.hy,
            MainPointKind::Qz => &self.qz,
            MainPointKind::Yh => &self.yh,
            MainPointKind::Hz => &self.hz,
        }
    }

    /// Control point sitting at `station`, within a millimetre.
    pub fn at_station(&self, station: f64) -> Option<&ControlPoint> {
        MainPointKind::ALL
            .iter()
            .map(|k| self.get(*k))
            .find(|p| (p.station - station).abs() < 1e-3)
    }
}

/// Re-derives a draft control point through the station evaluator. The
/// draft is kept when the evaluator does not give a finite answer.
fn refine(
    draft: ControlPoint,
    elements: &CurveElements,
    points: &MainPoints,
    turn: TurnDirection,
) -> ControlPoint {
    match evaluate_station(draft.station, elements, points, turn) {
        Ok(coord) if coord.is_finite() => ControlPoint {
            point: coord.point,
            azimuth: coord.azimuth,
            ..draft
        },
        Ok(_) | Err(_) => {
            log::warn!(
                "keeping closed-form {} at station {:.3}; evaluator result not usable",
                draft.kind.label(),
                draft.station
            );
            draft
        }
    }
}
