//! Layout computations for symmetric spiral-circular-spiral road curves.
//!
//! [`curve::CurveElements`] derives the curve geometry,
//! [`curve::MainPoints`] locates the ZH/HY/QZ/YH/HZ control points and
//! [`curve::evaluate_station`] gives coordinates for any chainage. The
//! [`surveying`] module turns those into side stakes and polar stake-out
//! values. Coordinates are northing `x` / easting `y` with azimuths
//! clockwise from north.

pub mod curve;
pub mod error;
pub mod geometry;
pub mod io;
pub mod sequence;
pub mod settings;
pub mod surveying;
pub mod table;
pub mod units;

pub use curve::{CurveDesign, CurveDesignRequest, CurveElements, MainPoints, TurnDirection};
pub use error::{CurveError, Outcome};
pub use sequence::SequenceMethod;
pub use settings::LayoutSettings;
pub use table::StationPoint;

/// Computes a design from a request, wrapped in the `{success, ...}`
/// envelope instead of a `Result`.
pub fn design_curve(request: &CurveDesignRequest) -> Outcome<CurveDesign> {
    CurveDesign::from_request(request).into()
}
