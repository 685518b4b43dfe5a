//! Stations at which a curve is laid out.

use serde::{Deserialize, Serialize};

use crate::curve::MainPoints;
use crate::error::CurveError;

/// Control stations closer than this to a generated one are not added again.
const CONTROL_TOLERANCE: f64 = 0.001;

/// How interval stations are generated between ZH and HZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceMethod {
    /// Whole multiples of the interval, restarting at every kilometre.
    #[default]
    Whole,
    /// ZH, ZH + interval, ZH + 2·interval, ...
    #[serde(alias = "increment")]
    Start,
}

impl std::str::FromStr for SequenceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole" => Ok(SequenceMethod::Whole),
            "start" | "increment" => Ok(SequenceMethod::Start),
            _ => Err(format!("unknown station method '{s}'")),
        }
    }
}

/// Builds the sorted list of stations from ZH to HZ.
///
/// Every control station missing from the generated list is appended
/// before sorting. Generated stations are not deduplicated beyond that
/// check.
pub fn station_sequence(
    points: &MainPoints,
    interval: f64,
    method: SequenceMethod,
) -> Result<Vec<f64>, CurveError> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(CurveError::InvalidInterval(interval));
    }
    let start = points.zh.station;
    let end = points.hz.station;
    let mut stations = match method {
        SequenceMethod::Whole => whole_stations(start, end, interval),
        SequenceMethod::Start => {
            let mut out = Vec::new();
            let mut k = 0u64;
            loop {
                let s = start + k as f64 * interval;
                if s > end {
                    break;
                }
                out.push(s);
                k += 1;
            }
            out
        }
    };

    for control in points.as_array() {
        if !stations
            .iter()
            .any(|s| (s - control.station).abs() < CONTROL_TOLERANCE)
        {
            stations.push(control.station);
        }
    }
    stations.sort_by(f64::total_cmp);
    log::debug!(
        "{} stations from {:.3} to {:.3} every {} m ({:?})",
        stations.len(),
        start,
        end,
        interval,
        method
    );
    Ok(stations)
}

fn whole_stations(start: f64, end: f64, interval: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let first_km = (start / 1000.0).floor() as i64;
    let last_km = (end / 1000.0).floor() as i64;
    for km in first_km..=last_km {
        let base = km as f64 * 1000.0;
        let mut k = 0u64;
        loop {
            let s = base + k as f64 * interval;
            if s >= base + 1000.0 || s > end {
                break;
            }
            if s >= start {
                out.push(s);
            }
            k += 1;
        }
    }
    out
}
