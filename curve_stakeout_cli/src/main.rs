use std::error::Error;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use curve_stakeout::{
    curve::{CurveDesign, CurveDesignRequest, TurnDirection},
    geometry::Point,
    io::{
        read_request_json, write_design_json, write_json, write_side_stakes_csv,
        write_stakeout_csv, write_station_points_csv, write_station_points_dxf,
    },
    surveying::backsight_azimuth,
    table::{side_stake_rows, stakeout_rows, StakeoutRow, StationPoint},
    units::{
        dms_to_radians, format_dms, format_station, parse_station, radians_to_dms,
    },
    CurveError, LayoutSettings, Outcome, SequenceMethod,
};
use serde::Serialize;

type CliResult = Result<(), Box<dyn Error>>;

/// Spiral-circular-spiral curve layout from the command line.
#[derive(Parser)]
#[command(name = "curve_stakeout_cli", version)]
struct Cli {
    /// JSON layout settings (interval, method, side distance, precision)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Print results as a `{success, data, error}` JSON document
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Curve inputs, either from a JSON request file or from flags.
#[derive(Args)]
struct CurveArgs {
    /// JSON curve design request; overrides the other curve flags
    #[arg(long)]
    request: Option<String>,
    /// Deflection angle as dd.mmsss
    #[arg(long, allow_hyphen_values = true)]
    deflection: Option<String>,
    /// Circular radius in metres
    #[arg(long, allow_hyphen_values = true)]
    radius: Option<f64>,
    /// Transition spiral length in metres
    #[arg(long, default_value_t = 0.0)]
    transition: f64,
    /// Intersection point northing
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    jd_x: f64,
    /// Intersection point easting
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    jd_y: f64,
    /// Chainage of the intersection point, e.g. K1+000
    #[arg(long, default_value = "K0+000")]
    jd_station: String,
    /// Azimuth of the incoming tangent as dd.mmsss
    #[arg(long, default_value = "0")]
    azimuth: String,
    /// Turn direction: right or left
    #[arg(long, default_value = "right")]
    turn: TurnDirection,
}

/// Station sequence options; unset values come from the settings file.
#[derive(Args)]
struct SequenceArgs {
    /// Station interval in metres
    #[arg(long)]
    interval: Option<f64>,
    /// `whole` for round chainage, `start` to step from ZH
    #[arg(long)]
    method: Option<SequenceMethod>,
    /// Offset of left/right side stakes in metres
    #[arg(long)]
    side_distance: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the curve elements.
    Elements {
        #[command(flatten)]
        curve: CurveArgs,
    },
    /// Print the five control points.
    MainPoints {
        #[command(flatten)]
        curve: CurveArgs,
        /// Also write the whole design (elements, control points) as JSON
        #[arg(long)]
        output: Option<String>,
    },
    /// Coordinates and azimuth of one station.
    PointAt {
        #[command(flatten)]
        curve: CurveArgs,
        /// Station as K1+234.5 or metres
        station: String,
    },
    /// Station table for the whole curve.
    Table {
        #[command(flatten)]
        curve: CurveArgs,
        #[command(flatten)]
        sequence: SequenceArgs,
        /// Output format: csv, dxf or json
        #[arg(long, default_value = "csv")]
        format: String,
        /// Output file; the table is printed when omitted
        #[arg(long)]
        output: Option<String>,
    },
    /// Polar stake-out values from an instrument station.
    Stakeout {
        #[command(flatten)]
        curve: CurveArgs,
        #[command(flatten)]
        sequence: SequenceArgs,
        /// Instrument northing
        #[arg(long, allow_hyphen_values = true)]
        station_x: f64,
        /// Instrument easting
        #[arg(long, allow_hyphen_values = true)]
        station_y: f64,
        /// Backsight azimuth as dd.mmsss
        #[arg(long)]
        backsight_azimuth: Option<String>,
        /// Backsight point northing
        #[arg(long, allow_hyphen_values = true)]
        backsight_x: Option<f64>,
        /// Backsight point easting
        #[arg(long, allow_hyphen_values = true)]
        backsight_y: Option<f64>,
        /// Output CSV file; values are printed when omitted
        #[arg(long)]
        output: Option<String>,
    },
    /// Convert a chainage string to metres.
    ParseStation { text: String },
    /// Format metres as a chainage string.
    FormatStation {
        #[arg(allow_hyphen_values = true)]
        metres: f64,
    },
    /// Convert dd.mmsss to radians, or radians to dd.mmsss with --to-dms.
    Dms {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        to_dms: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    let settings = match &cli.config {
        Some(path) => LayoutSettings::load(path)
            .map_err(|e| format!("reading {}: {}", path, e))?,
        None => LayoutSettings::default(),
    };
    let json = cli.json;
    match cli.command {
        Commands::Elements { curve } => {
            let result = design(&curve).map(|d| d.elements);
            report(json, result, |e| {
                for (name, value) in e.named_values() {
                    println!("{}: {:.4}", name, value);
                }
                println!("alpha (dms): {}", format_dms(e.alpha.to_degrees()));
            })
        }
        Commands::MainPoints { curve, output } => {
            let result = design(&curve);
            if let (Some(path), Ok(d)) = (&output, &result) {
                write_design_json(path, d)?;
                eprintln!("Wrote {}", path);
            }
            report(json, result.map(|d| d.main_points), |pts| {
                for p in pts.as_array() {
                    println!(
                        "{} {} {:.3},{:.3} {}",
                        p.kind.label(),
                        format_station(p.station),
                        p.point.x,
                        p.point.y,
                        radians_to_dms(p.azimuth)
                    );
                }
            })
        }
        Commands::PointAt { curve, station } => {
            let result = design(&curve).and_then(|d| {
                let s = parse_station(&station)?;
                let coord = d.point_at(s)?;
                Ok(StationPoint::new(1, s, &coord, d.main_points.at_station(s).map(|p| p.kind)))
            });
            report(json, result, |p| {
                println!(
                    "{} {:.3},{:.3} {} {}",
                    p.point_name,
                    p.x,
                    p.y,
                    radians_to_dms(p.azimuth),
                    p.segment.label()
                );
            })
        }
        Commands::Table {
            curve,
            sequence,
            format,
            output,
        } => {
            let (rows, side_distance) = table_rows(&curve, &sequence, &settings)?;
            let decimals = settings.coordinate_decimals;
            match output {
                Some(path) => {
                    match format.as_str() {
                        "csv" => match side_distance {
                            Some(d) => {
                                write_side_stakes_csv(&path, &side_stake_rows(&rows, d), decimals)?
                            }
                            None => write_station_points_csv(&path, &rows, decimals)?,
                        },
                        "dxf" => write_station_points_dxf(&path, &rows, decimals)?,
                        "json" => write_json(&path, &rounded_rows(&rows, &settings))?,
                        other => return Err(format!("unknown format {}", other).into()),
                    }
                    println!("Wrote {}", path);
                    Ok(())
                }
                None => report(json, Ok(rounded_rows(&rows, &settings)), |rows| {
                    for p in rows {
                        print_row(p, decimals);
                    }
                }),
            }
        }
        Commands::Stakeout {
            curve,
            sequence,
            station_x,
            station_y,
            backsight_azimuth: bs_text,
            backsight_x,
            backsight_y,
            output,
        } => {
            let instrument = Point::new(station_x, station_y);
            let backsight = match (bs_text, backsight_x, backsight_y) {
                (Some(text), _, _) => dms_to_radians(&text)?,
                (None, Some(x), Some(y)) => backsight_azimuth(instrument, Point::new(x, y)),
                _ => {
                    return Err(
                        "give --backsight-azimuth or both --backsight-x and --backsight-y".into(),
                    )
                }
            };
            let (rows, side_distance) = table_rows(&curve, &sequence, &settings)?;
            let stake = stakeout_rows(&rows, instrument, backsight, side_distance);
            let decimals = settings.coordinate_decimals;
            match output {
                Some(path) => {
                    write_stakeout_csv(&path, &stake, decimals)?;
                    println!("Wrote {}", path);
                    Ok(())
                }
                None => report(json, Ok(rounded_stakeout(stake, &settings)), |stake| {
                    let d = decimals as usize;
                    for r in stake {
                        println!(
                            "{},{:.d$},{},{:.d$}",
                            r.center.point_name,
                            r.center.station,
                            radians_to_dms(r.center_layout.horizontal_angle),
                            r.center_layout.distance
                        );
                    }
                }),
            }
        }
        Commands::ParseStation { text } => report(json, parse_station(&text), |m| {
            println!("{:.3}", m);
        }),
        Commands::FormatStation { metres } => {
            let text = format_station(metres);
            report(json, Ok(text), |t| println!("{}", t))
        }
        Commands::Dms { value, to_dms } => {
            if to_dms {
                let rad: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| CurveError::InvalidAngle(value.clone()))?;
                report(json, Ok(radians_to_dms(rad)), |t| println!("{}", t))
            } else {
                report(json, dms_to_radians(&value), |r| println!("{:.10}", r))
            }
        }
    }
}

/// Prints a result as text, or as an [`Outcome`] document with `--json`.
fn report<T: Serialize>(
    json: bool,
    result: Result<T, CurveError>,
    text: impl FnOnce(&T),
) -> CliResult {
    if json {
        let failed = result.as_ref().err().cloned();
        let outcome: Outcome<T> = result.into();
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        match failed {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    } else {
        let value = result?;
        text(&value);
        Ok(())
    }
}

fn request_from_args(args: &CurveArgs) -> Result<CurveDesignRequest, Box<dyn Error>> {
    if let Some(path) = &args.request {
        return read_request_json(path).map_err(|e| format!("reading {}: {}", path, e).into());
    }
    let deflection = args
        .deflection
        .as_deref()
        .ok_or("missing --deflection (or --request)")?;
    let radius = args.radius.ok_or("missing --radius (or --request)")?;
    Ok(CurveDesignRequest {
        deflection_angle: dms_to_radians(deflection)?,
        radius,
        transition_length: args.transition,
        intersection_x: args.jd_x,
        intersection_y: args.jd_y,
        start_azimuth: dms_to_radians(&args.azimuth)?,
        deflection_direction: args.turn.sign() as i32,
        intersection_station: args.jd_station.clone(),
    })
}

fn design(args: &CurveArgs) -> Result<CurveDesign, CurveError> {
    let request = request_from_args(args).map_err(|e| {
        // Flag and file problems are reported like any other bad placement input.
        e.downcast::<CurveError>()
            .map(|ce| *ce)
            .unwrap_or_else(|e| CurveError::InvalidPlacementParameter {
                reason: e.to_string(),
            })
    })?;
    log::info!(
        "designing curve R={} Ls={} JD station {}",
        request.radius,
        request.transition_length,
        request.intersection_station
    );
    CurveDesign::from_request(&request)
}

fn table_rows(
    curve: &CurveArgs,
    sequence: &SequenceArgs,
    settings: &LayoutSettings,
) -> Result<(Vec<StationPoint>, Option<f64>), CurveError> {
    let d = design(curve)?;
    let interval = sequence.interval.unwrap_or(settings.interval);
    let method = sequence.method.unwrap_or(settings.method);
    let stations = d.stations(interval, method)?;
    let rows = d.station_points(&stations)?;
    Ok((rows, sequence.side_distance.or(settings.side_distance)))
}

/// Copies of `rows` at the output precision. Geometry is always derived
/// from the unrounded rows.
fn rounded_rows(rows: &[StationPoint], settings: &LayoutSettings) -> Vec<StationPoint> {
    rows.iter()
        .map(|p| p.rounded(settings.coordinate_decimals, settings.angle_decimals))
        .collect()
}

fn rounded_stakeout(rows: Vec<StakeoutRow>, settings: &LayoutSettings) -> Vec<StakeoutRow> {
    rows.into_iter()
        .map(|r| StakeoutRow {
            center: r.center.rounded(settings.coordinate_decimals, settings.angle_decimals),
            ..r
        })
        .collect()
}

fn print_row(p: &StationPoint, decimals: u32) {
    let d = decimals as usize;
    println!(
        "{},{},{:.d$},{:.d$},{:.d$},{}",
        p.index,
        p.point_name,
        p.station,
        p.x,
        p.y,
        radians_to_dms(p.azimuth)
    );
}
