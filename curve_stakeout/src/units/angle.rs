//! Angle strings in the surveyor's `dd.mmsss` notation and azimuth helpers.
//!
//! In `dd.mmsss` the integer part holds whole degrees, the first two
//! fractional digits the minutes and the remaining three digits the seconds
//! in tenths: `45.30150` reads as 45°30'15.0".

use std::f64::consts::TAU;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CurveError;

static DMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<neg>-)?(?P<deg>\d+)(?:\.(?P<frac>\d{0,5}))?$").expect("dms pattern is valid")
});

const TENTHS_PER_DEGREE: u64 = 36_000;
const TENTHS_PER_MINUTE: u64 = 600;

/// Wraps an azimuth into `[0, 2π)`.
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    let a = azimuth.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Parses a `dd.mmsss` string into decimal degrees.
pub fn dms_to_degrees(text: &str) -> Result<f64, CurveError> {
    let trimmed = text.trim();
    let caps = DMS_RE
        .captures(trimmed)
        .ok_or_else(|| CurveError::InvalidAngle(text.to_string()))?;
    let degrees: u64 = caps["deg"]
        .parse()
        .map_err(|_| CurveError::InvalidAngle(text.to_string()))?;
    let mut frac = caps
        .name("frac")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    while frac.len() < 5 {
        frac.push('0');
    }
    // Both slices are ASCII digits checked by the pattern.
    let minutes: u64 = frac[..2].parse().unwrap_or(0);
    let tenths: u64 = frac[2..].parse().unwrap_or(0);
    if minutes >= 60 || tenths >= TENTHS_PER_MINUTE {
        return Err(CurveError::InvalidAngle(text.to_string()));
    }
    let value = degrees as f64 + minutes as f64 / 60.0 + tenths as f64 / 36_000.0;
    if caps.name("neg").is_some() {
        Ok(-value)
    } else {
        Ok(value)
    }
}

/// Parses a `dd.mmsss` string into radians.
pub fn dms_to_radians(text: &str) -> Result<f64, CurveError> {
    dms_to_degrees(text).map(f64::to_radians)
}

/// Splits decimal degrees into sign, degrees, minutes and tenths of a second
/// after rounding to the nearest 0.1".
fn split_tenths(degrees: f64) -> (bool, u64, u64, u64) {
    let total = (degrees.abs() * TENTHS_PER_DEGREE as f64).round() as u64;
    let negative = degrees < 0.0 && total > 0;
    let d = total / TENTHS_PER_DEGREE;
    let rem = total % TENTHS_PER_DEGREE;
    (negative, d, rem / TENTHS_PER_MINUTE, rem % TENTHS_PER_MINUTE)
}

/// Formats decimal degrees as `dd.mmsss`.
pub fn degrees_to_dms(degrees: f64) -> String {
    let (negative, d, m, t) = split_tenths(degrees);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{d}.{m:02}{t:03}")
}

/// Formats radians as `dd.mmsss`, rounded to 0.1".
pub fn radians_to_dms(radians: f64) -> String {
    degrees_to_dms(radians.to_degrees())
}

/// Formats decimal degrees for reports, e.g. `45°30'15.0"`.
pub fn format_dms(degrees: f64) -> String {
    let (negative, d, m, t) = split_tenths(degrees);
    let sign = if negative { "-" } else { "" };
    let seconds = t as f64 / 10.0;
    format!("{sign}{d}\u{00B0}{m}'{seconds:.1}\"")
}
