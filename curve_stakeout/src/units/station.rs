//! Chainage ("station") strings such as `K1+462.918`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CurveError;

static STATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<neg>-)?(?P<k>[Kk])?(?P<num>\d+(?:\.\d*)?)(?:\+(?P<m>\d+(?:\.\d*)?))?$")
        .expect("station pattern is valid")
});

/// Parses a chainage string into metres.
///
/// `K1+462.918` is 1 km plus 462.918 m. Without a `+` the number is taken as
/// absolute metres, with or without the leading `K`.
pub fn parse_station(text: &str) -> Result<f64, CurveError> {
    let trimmed = text.trim();
    let caps = STATION_RE
        .captures(trimmed)
        .ok_or_else(|| CurveError::InvalidStation(text.to_string()))?;
    let num = &caps["num"];
    let value = match caps.name("m") {
        Some(m) => {
            if num.contains('.') {
                return Err(CurveError::InvalidStation(text.to_string()));
            }
            let km: f64 = num
                .parse()
                .map_err(|_| CurveError::InvalidStation(text.to_string()))?;
            let metres: f64 = m
                .as_str()
                .parse()
                .map_err(|_| CurveError::InvalidStation(text.to_string()))?;
            km * 1000.0 + metres
        }
        None => num
            .parse()
            .map_err(|_| CurveError::InvalidStation(text.to_string()))?,
    };
    if caps.name("neg").is_some() {
        Ok(-value)
    } else {
        Ok(value)
    }
}

/// Formats metres as `K{km}+{m:.3}`.
///
/// Rounding happens on whole millimetres so the metre part never reads
/// `1000.000`.
pub fn format_station(station: f64) -> String {
    let millimetres = (station.abs() * 1000.0).round() as u64;
    let km = millimetres / 1_000_000;
    let metres = (millimetres % 1_000_000) as f64 / 1000.0;
    let sign = if station < 0.0 && millimetres > 0 { "-" } else { "" };
    format!("{sign}K{km}+{metres:.3}")
}
