//! Minimal ASCII DXF output of station tables.
//!
//! Drawing axes are east/north, so the grid easting (`y`) is written as
//! the DXF X coordinate and the northing (`x`) as the DXF Y coordinate.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::table::StationPoint;

/// Text height of the point labels in drawing units.
const LABEL_HEIGHT: f64 = 1.0;

/// Writes one `POINT` and one `TEXT` label per station.
///
/// Control points go on layer `MAIN_POINTS`, interval stations on
/// `STATIONS`.
pub fn write_station_points_dxf(
    path: &str,
    points: &[StationPoint],
    decimals: u32,
) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let d = decimals as usize;
    writeln!(w, "0\nSECTION\n2\nENTITIES")?;
    for p in points {
        let layer = if p.remark.is_empty() {
            "STATIONS"
        } else {
            "MAIN_POINTS"
        };
        writeln!(w, "0\nPOINT\n8\n{layer}\n10\n{:.d$}\n20\n{:.d$}\n30\n0.0", p.y, p.x)?;
        writeln!(
            w,
            "0\nTEXT\n8\n{layer}\n10\n{:.d$}\n20\n{:.d$}\n30\n0.0\n40\n{LABEL_HEIGHT}\n1\n{}",
            p.y, p.x, p.point_name
        )?;
    }
    writeln!(w, "0\nENDSEC\n0\nEOF")?;
    w.flush()
}
