//! File input and output helpers for curve designs and station tables.

use std::fs::File;
use std::io::{self, Read};

pub mod csv;
pub mod dxf;
pub mod project;

pub use csv::{write_side_stakes_csv, write_stakeout_csv, write_station_points_csv};
pub use dxf::write_station_points_dxf;
pub use project::{read_request_json, write_design_json, write_json};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing content.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)
}
