//! Curve design requests: one set of inputs in, elements and control
//! points out, then per-station queries against the result.

use serde::{Deserialize, Serialize};

use super::{
    evaluate_station, CurveElements, MainPoints, Placement, StationCoordinate, TurnDirection,
};
use crate::error::CurveError;
use crate::geometry::Point;
use crate::sequence::{station_sequence, SequenceMethod};
use crate::table::StationPoint;
use crate::units::parse_station;

/// Inputs of a curve design. Angles are radians, the intersection station
/// is a chainage string such as `K1+000.000`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveDesignRequest {
    pub deflection_angle: f64,
    pub radius: f64,
    pub transition_length: f64,
    pub intersection_x: f64,
    pub intersection_y: f64,
    pub start_azimuth: f64,
    /// `+1` for a right deflection, `-1` for a left one.
    pub deflection_direction: i32,
    pub intersection_station: String,
}

impl CurveDesignRequest {
    fn placement(&self) -> Result<Placement, CurveError> {
        let turn = TurnDirection::from_sign(self.deflection_direction)?;
        if let Some(implied) = TurnDirection::from_deflection(self.deflection_angle) {
            if implied != turn {
                return Err(CurveError::placement(format!(
                    "deflection angle {} turns {:?} but deflection direction is {}",
                    self.deflection_angle, implied, self.deflection_direction
                )));
            }
        }
        let intersection_station = parse_station(&self.intersection_station).map_err(|e| {
            CurveError::placement(format!("intersection station: {e}"))
        })?;
        Ok(Placement {
            intersection: Point::new(self.intersection_x, self.intersection_y),
            start_azimuth: self.start_azimuth,
            turn,
            intersection_station,
        })
    }
}

/// A computed curve: elements plus located control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveDesign {
    pub elements: CurveElements,
    pub main_points: MainPoints,
    pub placement: Placement,
}

impl CurveDesign {
    pub fn new(elements: CurveElements, placement: Placement) -> Result<Self, CurveError> {
        let main_points = MainPoints::locate(&elements, &placement)?;
        Ok(Self {
            elements,
            main_points,
            placement,
        })
    }

    /// Validates and computes a full design from a request.
    pub fn from_request(request: &CurveDesignRequest) -> Result<Self, CurveError> {
        let elements = CurveElements::compute(
            request.deflection_angle,
            request.radius,
            request.transition_length,
        )?;
        let placement = request.placement()?;
        Self::new(elements, placement)
    }

    pub fn turn(&self) -> TurnDirection {
        self.placement.turn
    }

    /// Coordinates and azimuth of `station`.
    pub fn point_at(&self, station: f64) -> Result<StationCoordinate, CurveError> {
        evaluate_station(station, &self.elements, &self.main_points, self.turn())
    }

    /// Stations to lay out at `interval` metres, control stations included.
    pub fn stations(&self, interval: f64, method: SequenceMethod) -> Result<Vec<f64>, CurveError> {
        station_sequence(&self.main_points, interval, method)
    }

    /// Evaluates every station into a table row, numbered from 1.
    pub fn station_points(&self, stations: &[f64]) -> Result<Vec<StationPoint>, CurveError> {
        stations
            .iter()
            .enumerate()
            .map(|(i, &station)| {
                let coord = self.point_at(station)?;
                Ok(StationPoint::new(
                    i + 1,
                    station,
                    &coord,
                    self.main_points.at_station(station).map(|p| p.kind),
                ))
            })
            .collect()
    }
}
