use serde::{Deserialize, Serialize};

use crate::utils::{
    require_positive, Result, AIR_DENSITY, GRAVITY, LIFT_COEFFICIENT, MINIMUM_CHORD,
    WEIGHT_CORRECTION,
};

/// Empirical and physical parameters used by the sizing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingCoefficients {
    /// Air density at the flying site (kg/m³).
    pub air_density: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Multiplier on the weight giving the required lift.
    pub weight_correction: f64,
    /// Lift coefficient of the airfoil at cruise.
    pub lift_coefficient: f64,
    /// Smallest root chord that can be built (m).
    pub minimum_chord: f64,
}

impl Default for SizingCoefficients {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY,
            gravity: GRAVITY,
            weight_correction: WEIGHT_CORRECTION,
            lift_coefficient: LIFT_COEFFICIENT,
            minimum_chord: MINIMUM_CHORD,
        }
    }
}

impl SizingCoefficients {
    pub fn validate(&self) -> Result<()> {
        require_positive("air_density", self.air_density)?;
        require_positive("gravity", self.gravity)?;
        require_positive("weight_correction", self.weight_correction)?;
        require_positive("lift_coefficient", self.lift_coefficient)?;
        require_positive("minimum_chord", self.minimum_chord)?;
        Ok(())
    }
}
