use std::f64::consts::{PI, TAU};

use curve_stakeout::curve::{spiral_local, CurveDesign, CurveDesignRequest, Segment};
use curve_stakeout::geometry::distance;

fn request(
    alpha: f64,
    radius: f64,
    ls: f64,
    direction: i32,
    start_azimuth: f64,
) -> CurveDesignRequest {
    CurveDesignRequest {
        deflection_angle: alpha,
        radius,
        transition_length: ls,
        intersection_x: 3_500_000.0,
        intersection_y: 500_000.0,
        start_azimuth,
        deflection_direction: direction,
        intersection_station: "K12+345.678".to_string(),
    }
}

fn designs() -> Vec<CurveDesign> {
    let mut out = Vec::new();
    for &(alpha, radius, ls) in &[
        (0.6981317, 300.0, 60.0),
        (0.2, 1200.0, 100.0),
        (1.5, 80.0, 40.0),
        (2.8, 150.0, 35.0),
        (0.5, 100.0, 50.0),
        (1.0, 250.0, 0.0),
    ] {
        for &direction in &[1, -1] {
            for &az in &[0.0, 1.2, 3.5, 6.1] {
                let req = request(alpha, radius, ls, direction, az);
                out.push(CurveDesign::from_request(&req).unwrap());
            }
        }
    }
    out
}

fn angle_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[test]
fn spiral_ends_meet_at_x0_y0() {
    for d in designs() {
        let e = d.elements;
        let (x, y, _) = spiral_local(e.transition_length, e.radius, e.transition_length);
        let tol = 1e-6 * e.transition_length.max(1.0);
        assert!((x - e.x0).abs() < tol);
        assert!((y - e.y0).abs() < tol);
    }
}

#[test]
fn azimuth_is_continuous_at_segment_boundaries() {
    let eps = 1e-7;
    for d in designs() {
        let m = d.main_points;
        for station in [m.zh.station, m.hy.station, m.yh.station, m.hz.station] {
            let before = d.point_at(station - eps).unwrap();
            let after = d.point_at(station + eps).unwrap();
            assert!(
                angle_gap(before.azimuth, after.azimuth) < 1e-6,
                "azimuth jump at {station}"
            );
            // The closed-form p and q are truncated series, so the circle and
            // the exit spiral meet within a few millimetres at YH.
            assert!(distance(before.point, after.point) < 1e-2, "position jump at {station}");
        }
    }
}

#[test]
fn stations_are_monotonic() {
    for d in designs() {
        let m = d.main_points;
        let ls = d.elements.transition_length;
        if ls > 0.0 {
            assert!(m.zh.station < m.hy.station);
            assert!(m.yh.station < m.hz.station);
        } else {
            assert!(m.zh.station <= m.hy.station);
        }
        assert!(m.hy.station <= m.qz.station);
        assert!(m.qz.station <= m.yh.station);
    }
}

#[test]
fn total_length_identity() {
    for d in designs() {
        let e = d.elements;
        let m = d.main_points;
        assert!((e.total_length - (2.0 * e.transition_length + e.arc_length)).abs() < 1e-9);
        assert!((m.hz.station - m.zh.station - e.total_length).abs() < 1e-9);
    }
}

#[test]
fn azimuths_are_normalised() {
    for d in designs() {
        let m = d.main_points;
        let mut s = m.zh.station - 30.0;
        while s < m.hz.station + 30.0 {
            let c = d.point_at(s).unwrap();
            assert!((0.0..TAU).contains(&c.azimuth), "azimuth {} at {s}", c.azimuth);
            s += 3.7;
        }
        for p in m.as_array() {
            assert!((0.0..TAU).contains(&p.azimuth));
        }
    }
}

#[test]
fn exit_azimuth_turns_by_deflection() {
    for d in designs() {
        let m = d.main_points;
        let turned = (m.hz.azimuth - m.zh.azimuth) * d.turn().sign();
        assert!(angle_gap(turned, d.elements.alpha) < 1e-9);
    }
}

#[test]
fn left_turn_mirrors_right_turn() {
    let right = CurveDesign::from_request(&request(0.9, 400.0, 80.0, 1, 0.0)).unwrap();
    let left = CurveDesign::from_request(&request(0.9, 400.0, 80.0, -1, 0.0)).unwrap();
    let axis_y = 500_000.0;
    let mut s = right.main_points.zh.station - 10.0;
    while s < right.main_points.hz.station + 10.0 {
        let r = right.point_at(s).unwrap();
        let l = left.point_at(s).unwrap();
        assert_eq!(r.segment, l.segment);
        assert!((r.point.x - l.point.x).abs() < 1e-6);
        assert!(((r.point.y - axis_y) + (l.point.y - axis_y)).abs() < 1e-6);
        assert!(angle_gap(r.azimuth, TAU - l.azimuth) < 1e-9);
        s += 5.0;
    }
}

#[test]
fn reference_scenario() {
    let req = CurveDesignRequest {
        deflection_angle: 0.6981317,
        radius: 300.0,
        transition_length: 60.0,
        intersection_x: 0.0,
        intersection_y: 0.0,
        start_azimuth: 0.0,
        deflection_direction: 1,
        intersection_station: "K1+000.000".to_string(),
    };
    let d = CurveDesign::from_request(&req).unwrap();
    let e = d.elements;
    assert!((e.beta0 - 0.1).abs() < 1e-12);
    assert!((e.p - 0.5).abs() < 1e-3);
    let t = e.q + 300.5 * (0.6981317f64 / 2.0).tan();
    assert!((e.tangent - t).abs() < 1e-9);
    assert!((d.main_points.zh.station - (1000.0 - e.tangent)).abs() < 1e-9);
    assert!((e.total_length - 269.44).abs() < 0.01);
    assert!((d.main_points.hz.station - d.main_points.zh.station - e.total_length).abs() < 1e-9);

    // ZH sits T metres south of the intersection point, heading north.
    assert!((d.main_points.zh.point.x + e.tangent).abs() < 1e-9);
    assert!(d.main_points.zh.point.y.abs() < 1e-9);
    let qz = d.point_at(d.main_points.qz.station).unwrap();
    assert_eq!(qz.segment, Segment::Circular);
    assert!((distance(qz.point, d.placement.intersection) - e.external).abs() < 2e-3);
}

#[test]
fn half_turn_is_rejected() {
    let err = CurveDesign::from_request(&request(PI, 300.0, 10.0, 1, 0.0)).unwrap_err();
    assert_eq!(err.kind(), "InvalidCurveParameter");
}
