//! Chainage and angle conversions shared by the curve and stake-out code.

pub mod angle;
pub mod station;

pub use angle::{
    degrees_to_dms, dms_to_degrees, dms_to_radians, format_dms, normalize_azimuth,
    radians_to_dms,
};
pub use station::{format_station, parse_station};
