use tracing::{debug, info};

use crate::components::wing::{SizingCoefficients, WingResult, WingSpec};
use crate::utils::{require_positive, Result};

/// Lift needed to carry `mass` with the weight correction margin (N).
pub fn lift_force(mass: f64, coeffs: &SizingCoefficients) -> Result<f64> {
    let mass = require_positive("mass", mass)?;
    Ok(mass * coeffs.gravity * coeffs.weight_correction)
}

/// Wing area producing `lift_force` at `cruise_speed` (m²).
pub fn required_area(
    lift_force: f64,
    cruise_speed: f64,
    coeffs: &SizingCoefficients,
) -> Result<f64> {
    let cruise_speed = require_positive("cruise_speed", cruise_speed)?;
    Ok((2.0 * lift_force * coeffs.air_density)
        / (coeffs.lift_coefficient * cruise_speed.powi(2)))
}

/// Sizes a wing with the default coefficients.
pub fn compute_wing(spec: &WingSpec) -> Result<WingResult> {
    compute_wing_with(spec, &SizingCoefficients::default())
}

/// Runs lift, area, chords and MAC in that order. The first failing step
/// aborts the computation.
pub fn compute_wing_with(spec: &WingSpec, coeffs: &SizingCoefficients) -> Result<WingResult> {
    spec.validate()?;
    coeffs.validate()?;

    let half_span = spec.half_span();
    let lift_force = lift_force(spec.mass, coeffs)?;
    let area = required_area(lift_force, spec.cruise_speed, coeffs)?;
    debug!("Lift {:.4} N needs {:.5} m² of wing", lift_force, area);

    let chords = spec.shape.chords(area, half_span, coeffs.minimum_chord)?;
    let mac = spec.shape.mean_aerodynamic_chord(half_span, &chords)?;

    info!(
        "Sized {} wing: area {:.5} m², MAC {:.4} m",
        spec.shape.name(),
        area,
        mac.length
    );
    Ok(WingResult {
        shape: spec.shape,
        lift_force,
        area,
        half_span,
        chord_root: chords.root,
        chord_tip: chords.tip,
        mac: mac.length,
        mac_span_position: mac.crossing.x,
        mac_crossing: mac.crossing,
    })
}
