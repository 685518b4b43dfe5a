//! Error types for curve design and stake-out computations.
//!
//! Every public operation of the crate returns `Result<_, CurveError>`.
//! [`Outcome`] wraps such a result into the flat `{success, data, error}`
//! shape handed to report writers and the command line JSON output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure raised while validating inputs or computing curve geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Deflection angle, radius or transition length out of range.
    #[error("invalid curve parameter: {reason}")]
    InvalidCurveParameter {
        /// Which check failed.
        reason: String,
    },

    /// A derived curve element evaluated to NaN or infinity.
    #[error("curve computation produced non-finite values for: {}", .fields.join(", "))]
    CurveComputation {
        /// Names of the offending elements, in computation order.
        fields: Vec<&'static str>,
    },

    /// Curve elements handed to the point locator are not all finite.
    #[error("incomplete curve elements: {}", .fields.join(", "))]
    IncompleteCurveElements {
        /// Names of the missing or non-finite elements.
        fields: Vec<&'static str>,
    },

    /// Intersection point, start azimuth, turn direction or station unusable.
    #[error("invalid placement parameter: {reason}")]
    InvalidPlacementParameter {
        /// Which placement value was rejected.
        reason: String,
    },

    /// Chainage string that does not follow the `K{km}+{m}` grammar.
    #[error("invalid station '{0}'")]
    InvalidStation(String),

    /// Angle string that does not follow the `dd.mmsss` grammar.
    #[error("invalid angle '{0}'")]
    InvalidAngle(String),

    /// Station interval that is zero, negative or not finite.
    #[error("invalid station interval {0}")]
    InvalidInterval(f64),
}

impl CurveError {
    pub(crate) fn curve_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidCurveParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn placement(reason: impl Into<String>) -> Self {
        Self::InvalidPlacementParameter {
            reason: reason.into(),
        }
    }

    /// Stable machine readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            CurveError::InvalidCurveParameter { .. } => "InvalidCurveParameter",
            CurveError::CurveComputation { .. } => "CurveComputationError",
            CurveError::IncompleteCurveElements { .. } => "IncompleteCurveElements",
            CurveError::InvalidPlacementParameter { .. } => "InvalidPlacementParameter",
            CurveError::InvalidStation(_) => "InvalidStation",
            CurveError::InvalidAngle(_) => "InvalidAngle",
            CurveError::InvalidInterval(_) => "InvalidInterval",
        }
    }
}

/// Serialisable error payload of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: String,
    pub message: String,
}

impl From<&CurveError> for ErrorReport {
    fn from(err: &CurveError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Uniform result envelope: `success` tells the caller which of `data`
/// and `error` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl<T> Outcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(err: &CurveError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorReport::from(err)),
        }
    }
}

impl<T> From<Result<T, CurveError>> for Outcome<T> {
    fn from(result: Result<T, CurveError>) -> Self {
        match result {
            Ok(data) => Outcome::ok(data),
            Err(e) => Outcome::failed(&e),
        }
    }
}
