use approx::assert_relative_eq;
use wingsizer::{
    components::{ComponentMass, MassBudget},
    compute_wing, WingSpec,
};

use crate::common::assert_result_valid;

#[test]
fn test_estimated_mass_sizes_a_wing() {
    let breakdown = MassBudget::default().estimate().unwrap();
    assert_relative_eq!(breakdown.total_kg, 0.183088, epsilon = 1e-9);

    let result = compute_wing(&WingSpec::right_trapezoid(breakdown.total_kg, 1.2, 10.0)).unwrap();
    assert_result_valid(&result);
    assert_relative_eq!(result.lift_force, 0.183088 * 9.81 * 1.5, epsilon = 1e-9);
}

#[test]
fn test_extra_payload_increases_area() {
    let base = MassBudget::default();
    let mut loaded = base.clone();
    loaded.electronics.push(ComponentMass::new("camera", 30.0));

    let light = base.estimate().unwrap();
    let heavy = loaded.estimate().unwrap();
    assert_relative_eq!(heavy.total_kg - light.total_kg, 0.03, epsilon = 1e-12);

    let a = compute_wing(&WingSpec::right_trapezoid(light.total_kg, 1.2, 10.0)).unwrap();
    let b = compute_wing(&WingSpec::right_trapezoid(heavy.total_kg, 1.2, 10.0)).unwrap();
    assert!(b.area > a.area);
}
