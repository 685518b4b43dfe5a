//! Spiral-circular-spiral curve geometry: elements, control points and
//! per-station coordinates.

pub mod design;
pub mod elements;
pub mod evaluator;
pub mod main_points;

pub use design::{CurveDesign, CurveDesignRequest};
pub use elements::CurveElements;
pub use evaluator::{evaluate_station, spiral_local, Segment, StationCoordinate};
pub use main_points::{ControlPoint, MainPointKind, MainPoints, Placement};

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Side the route turns towards at the intersection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    Right,
    Left,
}

impl TurnDirection {
    /// `+1` for a right deflection, `-1` for a left one.
    pub fn sign(self) -> f64 {
        match self {
            TurnDirection::Right => 1.0,
            TurnDirection::Left => -1.0,
        }
    }

    /// Accepts the `±1` convention used in design requests.
    pub fn from_sign(sign: i32) -> Result<Self, CurveError> {
        match sign {
            1 => Ok(TurnDirection::Right),
            -1 => Ok(TurnDirection::Left),
            other => Err(CurveError::placement(format!(
                "deflection direction must be +1 or -1, got {other}"
            ))),
        }
    }

    /// Direction implied by a signed deflection angle. A positive angle is
    /// read as a bare magnitude and implies nothing.
    pub fn from_deflection(angle: f64) -> Option<Self> {
        (angle < 0.0).then_some(TurnDirection::Left)
    }
}

impl std::str::FromStr for TurnDirection {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "r" | "+1" | "1" => Ok(TurnDirection::Right),
            "left" | "l" | "-1" => Ok(TurnDirection::Left),
            _ => Err(CurveError::placement(format!(
                "unknown deflection direction '{s}'"
            ))),
        }
    }
}
