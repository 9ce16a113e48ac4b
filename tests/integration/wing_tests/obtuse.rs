use approx::assert_relative_eq;
use wingsizer::{compute_wing, WingError, WingShape, WingSpec};

use crate::common::{assert_mac_within_chords, assert_result_valid, obtuse_trapezoid_grid};

#[test]
fn test_default_obtuse_wing() {
    let result = compute_wing(&WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, 0.3, 0.2)).unwrap();

    // Lift and area follow the shared pipeline.
    assert_relative_eq!(result.lift_force, 2.943, epsilon = 1e-12);
    assert_relative_eq!(result.area, 0.3572802, epsilon = 1e-12);
    // Chords come from the design inputs, not the area.
    assert_eq!(result.chord_root, 0.1);
    assert_eq!(result.chord_tip, 0.3);
    // X = 0.6 * 0.5 / 0.8
    assert_relative_eq!(result.mac_span_position, 0.375, epsilon = 1e-12);
    assert_relative_eq!(result.mac, 0.175, epsilon = 1e-12);
    assert_result_valid(&result);
}

#[test]
fn test_grid_invariants() {
    for spec in obtuse_trapezoid_grid() {
        let result = compute_wing(&spec).unwrap();
        assert_result_valid(&result);
        assert_mac_within_chords(&result);
        let WingShape::ObtuseTrapezoid { chord_tip, .. } = spec.shape else {
            panic!("grid must only hold obtuse wings");
        };
        assert_eq!(result.chord_tip, chord_tip);
    }
}

#[test]
fn test_displacement_does_not_move_mac() {
    let straight = compute_wing(&WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, 0.3, 0.0)).unwrap();
    let swept = compute_wing(&WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, 0.3, 0.4)).unwrap();
    assert_relative_eq!(straight.mac, swept.mac, epsilon = 1e-12);
    assert_relative_eq!(
        straight.mac_span_position,
        swept.mac_span_position,
        epsilon = 1e-12
    );
    assert!(swept.planform().centroid().unwrap().y > straight.planform().centroid().unwrap().y);
}

#[test]
fn test_parallelogram_wing() {
    let result = compute_wing(&WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, 0.1, 0.2)).unwrap();
    assert_result_valid(&result);
    assert_relative_eq!(result.mac, 0.1, epsilon = 1e-12);
}

#[test]
fn test_tapered_swept_wing() {
    let result = compute_wing(&WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, 0.08, 0.2)).unwrap();
    assert_eq!(result.chord_tip, 0.08);
    assert_relative_eq!(result.mac_span_position, 0.6 * 0.28 / 0.58, epsilon = 1e-12);
    assert_result_valid(&result);
    assert_mac_within_chords(&result);
}

#[test]
fn test_invalid_design_inputs() {
    let result = compute_wing(&WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, -0.3, 0.2));
    assert_eq!(result, Err(WingError::invalid("chord_tip", -0.3)));

    let result = compute_wing(&WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, 0.3, -0.2));
    assert_eq!(result, Err(WingError::invalid("displacement", -0.2)));
}
