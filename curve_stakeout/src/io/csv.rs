//! CSV station tables.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::table::{SideStakeRow, StakeoutRow, StationPoint};
use crate::units::radians_to_dms;

/// Writes the centreline table: one header line, then one row per station
/// rounded to `decimals` places. Azimuths are written as `dd.mmsss`.
pub fn write_station_points_csv(
    path: &str,
    points: &[StationPoint],
    decimals: u32,
) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "index,name,station,x,y,azimuth,segment,remark")?;
    let d = decimals as usize;
    for p in points {
        writeln!(
            w,
            "{},{},{:.d$},{:.d$},{:.d$},{},{},{}",
            p.index,
            p.point_name,
            p.station,
            p.x,
            p.y,
            radians_to_dms(p.azimuth),
            p.segment.label(),
            p.remark
        )?;
    }
    w.flush()
}

/// Writes centre, left and right stake coordinates per station.
pub fn write_side_stakes_csv(
    path: &str,
    rows: &[SideStakeRow],
    decimals: u32,
) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "index,name,station,x,y,left_x,left_y,right_x,right_y")?;
    let d = decimals as usize;
    for r in rows {
        let c = &r.center;
        writeln!(
            w,
            "{},{},{:.d$},{:.d$},{:.d$},{:.d$},{:.d$},{:.d$},{:.d$}",
            c.index, c.point_name, c.station, c.x, c.y, r.left.x, r.left.y, r.right.x, r.right.y
        )?;
    }
    w.flush()
}

/// Writes polar stake-out values: turned angle (`dd.mmsss`) and distance
/// for the centre stake and, when present, the side stakes.
pub fn write_stakeout_csv(
    path: &str,
    rows: &[StakeoutRow],
    decimals: u32,
) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "index,name,station,angle,distance,left_angle,left_distance,right_angle,right_distance"
    )?;
    let d = decimals as usize;
    for r in rows {
        let c = &r.center;
        write!(
            w,
            "{},{},{:.d$},{},{:.d$}",
            c.index,
            c.point_name,
            c.station,
            radians_to_dms(r.center_layout.horizontal_angle),
            r.center_layout.distance
        )?;
        for side in [r.left_layout, r.right_layout] {
            match side {
                Some(el) => {
                    write!(w, ",{},{:.d$}", radians_to_dms(el.horizontal_angle), el.distance)?
                }
                None => write!(w, ",,")?,
            }
        }
        writeln!(w)?;
    }
    w.flush()
}
