use serde::Serialize;

use crate::curve::{CurveDesign, CurveDesignRequest};

/// Reads a curve design request from a JSON file.
pub fn read_request_json(path: &str) -> std::io::Result<CurveDesignRequest> {
    let contents = crate::io::read_to_string(path)?;
    let req: CurveDesignRequest = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(req)
}

/// Writes any serialisable value as pretty JSON.
pub fn write_json<T: Serialize>(path: &str, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}

/// Writes a computed design (elements, control points, placement).
pub fn write_design_json(path: &str, design: &CurveDesign) -> std::io::Result<()> {
    write_json(path, design)
}
