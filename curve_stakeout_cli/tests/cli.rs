use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const QUARTER_TURN: [&str; 8] = [
    "--deflection",
    "90",
    "--radius",
    "100",
    "--jd-station",
    "K1+000",
    "--turn",
    "right",
];

#[test]
fn elements_command() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("elements")
        .args(QUARTER_TURN)
        .assert()
        .success()
        .stdout(predicate::str::contains("T: 100.0000"))
        .stdout(predicate::str::contains("alpha (dms): 90°0'0.0\""));
}

#[test]
fn main_points_command() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("main-points")
        .args(QUARTER_TURN)
        .assert()
        .success()
        .stdout(predicate::str::contains("ZH K0+900.000"))
        .stdout(predicate::str::contains("HZ K1+57.080"));
}

#[test]
fn point_at_control_station() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("point-at")
        .args(QUARTER_TURN)
        .arg("K0+900")
        .assert()
        .success()
        .stdout(predicate::str::contains("ZH -100.000,0.000"));
}

#[test]
fn parse_station_command() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args(["parse-station", "K1+462.918"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1462.918"));
}

#[test]
fn format_station_command() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args(["format-station", "1462.918"])
        .assert()
        .success()
        .stdout(predicate::str::contains("K1+462.918"));
}

#[test]
fn dms_command_both_ways() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args(["dms", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.5707963268"));

    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args(["dms", "--to-dms", "1.5707963267948966"])
        .assert()
        .success()
        .stdout(predicate::str::contains("90.00000"));
}

#[test]
fn table_writes_csv_and_dxf() {
    let dir = assert_fs::TempDir::new().unwrap();
    let csv = dir.child("table.csv");
    let dxf = dir.child("table.dxf");

    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("table")
        .args(QUARTER_TURN)
        .args(["--interval", "20", "--output", csv.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    csv.assert(predicate::str::starts_with("index,name,station,x,y,azimuth,segment,remark"));
    csv.assert(predicate::str::contains("ZH"));

    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("table")
        .args(QUARTER_TURN)
        .args(["--format", "dxf", "--output", dxf.path().to_str().unwrap()])
        .assert()
        .success();
    dxf.assert(predicate::str::contains("POINT"));
    dir.close().unwrap();
}

#[test]
fn table_reads_request_and_config() {
    let dir = assert_fs::TempDir::new().unwrap();
    let request = dir.child("request.json");
    request
        .write_str(
            r#"{
  "deflectionAngle": 1.5707963267948966,
  "radius": 100.0,
  "transitionLength": 0.0,
  "intersectionX": 0.0,
  "intersectionY": 0.0,
  "startAzimuth": 0.0,
  "deflectionDirection": 1,
  "intersectionStation": "K1+000"
}"#,
        )
        .unwrap();
    let config = dir.child("settings.json");
    config.write_str(r#"{"interval": 50.0, "method": "start"}"#).unwrap();

    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "table",
            "--request",
            request.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("K0+950.000"))
        .stdout(predicate::str::contains("K0+920.000").not());
    dir.close().unwrap();
}

#[test]
fn stakeout_command() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("stakeout")
        .args(QUARTER_TURN)
        .args([
            "--station-x",
            "-100",
            "--station-y",
            "50",
            "--backsight-x",
            "0",
            "--backsight-y",
            "50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZH,900.000"));
}

#[test]
fn invalid_radius_fails() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args(["elements", "--deflection", "90", "--radius", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn json_output_reports_failure() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args(["--json", "parse-station", "K1+2+3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("InvalidStation"));
}

#[test]
fn missing_backsight_fails() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("stakeout")
        .args(QUARTER_TURN)
        .args(["--station-x", "0", "--station-y", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("backsight"));
}

fn stakeout_with_decimals(decimals: u32) -> Vec<Vec<String>> {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("settings.json");
    config
        .write_str(&format!(r#"{{"coordinateDecimals": {decimals}}}"#))
        .unwrap();
    let output = Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap(), "stakeout"])
        .args([
            "--deflection",
            "40",
            "--radius",
            "300",
            "--transition",
            "60",
            "--jd-station",
            "K1+000",
            "--station-x",
            "-100",
            "--station-y",
            "50",
            "--backsight-azimuth",
            "0",
            "--interval",
            "50",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    dir.close().unwrap();
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| l.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn stakeout_angles_ignore_output_precision() {
    let fine = stakeout_with_decimals(3);
    let coarse = stakeout_with_decimals(0);
    assert_eq!(fine.len(), coarse.len());
    assert_eq!(fine[0][0], "ZH");
    assert_eq!(fine[0][1], "860.637");
    assert_eq!(coarse[0][1], "861");
    for (f, c) in fine.iter().zip(&coarse) {
        assert_eq!(f[0], c[0]);
        assert_eq!(f[2], c[2], "turned angle changed at {}", f[0]);
        let fd: f64 = f[3].parse().unwrap();
        let cd: f64 = c[3].parse().unwrap();
        assert_eq!(cd, fd.round());
    }
}

#[test]
fn printed_table_keeps_trailing_zeros() {
    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("table")
        .args(QUARTER_TURN)
        .assert()
        .success()
        .stdout(predicate::str::contains("1,ZH,900.000,-100.000,0.000,0.00000"));
}

#[test]
fn main_points_writes_design_json() {
    let dir = assert_fs::TempDir::new().unwrap();
    let design = dir.child("design.json");

    Command::cargo_bin("curve_stakeout_cli")
        .unwrap()
        .arg("main-points")
        .args(QUARTER_TURN)
        .args(["--output", design.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZH K0+900.000"));
    design.assert(predicate::str::contains("\"mainPoints\""));
    design.assert(predicate::str::contains("\"totalLength\""));
    dir.close().unwrap();
}
