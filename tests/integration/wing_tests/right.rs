use approx::assert_relative_eq;
use wingsizer::{compute_wing, WingError, WingShape, WingSpec};

use crate::common::{
    assert_mac_within_chords, assert_result_valid, assert_trapezoid_area, right_trapezoid_grid,
};

#[test]
fn test_trainer_scenario() {
    let result = compute_wing(&WingSpec::right_trapezoid(0.2, 1.2, 10.0)).unwrap();

    assert_eq!(result.shape, WingShape::RightTrapezoid);
    assert_relative_eq!(result.lift_force, 2.943, epsilon = 1e-12);
    // (2 * 2.943 * 1.214) / (0.2 * 10^2)
    assert_relative_eq!(result.area, 0.3572802, epsilon = 1e-12);
    assert_eq!(result.half_span, 0.6);
    assert_eq!(result.chord_root, 0.1);
    assert_relative_eq!(result.chord_tip, 0.495467, epsilon = 1e-9);
    assert_relative_eq!(result.mac, 0.2191803, epsilon = 1e-6);
    assert_relative_eq!(result.mac_span_position, 0.4191803, epsilon = 1e-6);
    assert_result_valid(&result);
}

#[test]
fn test_lift_is_exact_over_grid() {
    for spec in right_trapezoid_grid() {
        let result = compute_wing(&spec).unwrap();
        assert_eq!(result.lift_force, spec.mass * 9.81 * 1.5);
        assert_eq!(result.half_span, spec.aircraft_span / 2.0);
    }
}

#[test]
fn test_geometry_invariants_over_grid() {
    for spec in right_trapezoid_grid() {
        let result = compute_wing(&spec).unwrap();
        assert_result_valid(&result);
        assert_eq!(result.chord_root, 0.1);
        assert_trapezoid_area(&result);
        assert_mac_within_chords(&result);
    }
}

#[test]
fn test_area_scaling() {
    let base = compute_wing(&WingSpec::right_trapezoid(0.3, 1.2, 8.0)).unwrap();
    let heavier = compute_wing(&WingSpec::right_trapezoid(0.6, 1.2, 8.0)).unwrap();
    let faster = compute_wing(&WingSpec::right_trapezoid(0.3, 1.2, 16.0)).unwrap();

    assert_relative_eq!(heavier.area, 2.0 * base.area, max_relative = 1e-12);
    assert_relative_eq!(faster.area, base.area / 4.0, max_relative = 1e-12);
}

#[test]
fn test_span_does_not_change_area() {
    let short = compute_wing(&WingSpec::right_trapezoid(0.5, 1.0, 10.0)).unwrap();
    let long = compute_wing(&WingSpec::right_trapezoid(0.5, 1.6, 10.0)).unwrap();
    assert_eq!(short.area, long.area);
    assert!(long.chord_tip < short.chord_tip);
}

#[test]
fn test_invalid_inputs() {
    let cases = [
        (WingSpec::right_trapezoid(0.0, 1.2, 10.0), "mass"),
        (WingSpec::right_trapezoid(-0.2, 1.2, 10.0), "mass"),
        (WingSpec::right_trapezoid(0.2, 0.0, 10.0), "aircraft_span"),
        (WingSpec::right_trapezoid(0.2, 1.2, 0.0), "cruise_speed"),
        (WingSpec::right_trapezoid(0.2, 1.2, f64::NAN), "cruise_speed"),
    ];
    for (spec, expected) in cases {
        match compute_wing(&spec) {
            Err(WingError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
            other => panic!("expected invalid {}, got {:?}", expected, other),
        }
    }
}

#[test]
fn test_infeasible_tip_chord() {
    // A light aircraft leaves the tip below the root chord.
    let result = compute_wing(&WingSpec::right_trapezoid(0.05, 1.2, 10.0));
    assert!(matches!(result, Err(WingError::DegenerateGeometry(_))));

    // Fast enough that the tip chord goes negative.
    let result = compute_wing(&WingSpec::right_trapezoid(0.05, 3.0, 40.0));
    assert!(matches!(result, Err(WingError::DegenerateGeometry(_))));
}

#[test]
fn test_untapered_wing_is_degenerate() {
    // area = 2 * half_span * chord_root makes the tip equal to the root.
    let mass = 0.12 * 0.2 * 100.0 / (2.0 * 1.214 * 9.81 * 1.5);
    let result = compute_wing(&WingSpec::right_trapezoid(mass, 1.2, 10.0));
    assert!(matches!(result, Err(WingError::DegenerateGeometry(_))));
}

#[test]
fn test_y_mean() {
    let result = compute_wing(&WingSpec::default()).unwrap();
    let (cr, ct, b) = (result.chord_root, result.chord_tip, result.half_span);
    assert_relative_eq!(
        result.y_mean().unwrap(),
        b / 3.0 * (cr + 2.0 * ct) / (cr + ct),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        result.planform().area().unwrap(),
        result.area / 2.0,
        max_relative = 1e-12
    );
}
