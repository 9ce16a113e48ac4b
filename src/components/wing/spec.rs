use serde::{Deserialize, Serialize};

use crate::utils::{require_non_negative, require_positive, Result};

/// Planform family of the wing half.
///
/// The right trapezoid solves its tip chord from the required area, the
/// obtuse trapezoid takes it as a design input alongside the sweep offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WingShape {
    RightTrapezoid,
    ObtuseTrapezoid {
        /// Tip chord chosen by the designer (m).
        chord_tip: f64,
        /// Offset of the slanted edge from the right trapezoid baseline (m).
        displacement: f64,
    },
}

impl WingShape {
    pub fn displacement(&self) -> f64 {
        match self {
            WingShape::RightTrapezoid => 0.0,
            WingShape::ObtuseTrapezoid { displacement, .. } => *displacement,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WingShape::RightTrapezoid => "right trapezoid",
            WingShape::ObtuseTrapezoid { .. } => "obtuse trapezoid",
        }
    }
}

/// Design inputs for a wing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingSpec {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Wingspan tip to tip (m).
    pub aircraft_span: f64,
    /// Target cruise speed (m/s).
    pub cruise_speed: f64,
    pub shape: WingShape,
}

impl WingSpec {
    pub fn new(mass: f64, aircraft_span: f64, cruise_speed: f64, shape: WingShape) -> Self {
        Self {
            mass,
            aircraft_span,
            cruise_speed,
            shape,
        }
    }

    pub fn right_trapezoid(mass: f64, aircraft_span: f64, cruise_speed: f64) -> Self {
        Self::new(mass, aircraft_span, cruise_speed, WingShape::RightTrapezoid)
    }

    pub fn obtuse_trapezoid(
        mass: f64,
        aircraft_span: f64,
        cruise_speed: f64,
        chord_tip: f64,
        displacement: f64,
    ) -> Self {
        Self::new(
            mass,
            aircraft_span,
            cruise_speed,
            WingShape::ObtuseTrapezoid {
                chord_tip,
                displacement,
            },
        )
    }

    /// Distance from the centreline to one wingtip (m).
    pub fn half_span(&self) -> f64 {
        self.aircraft_span / 2.0
    }

    /// Checks every input before any computation runs.
    pub fn validate(&self) -> Result<()> {
        require_positive("mass", self.mass)?;
        require_positive("aircraft_span", self.aircraft_span)?;
        require_positive("cruise_speed", self.cruise_speed)?;
        if let WingShape::ObtuseTrapezoid {
            chord_tip,
            displacement,
        } = self.shape
        {
            require_positive("chord_tip", chord_tip)?;
            require_non_negative("displacement", displacement)?;
        }
        Ok(())
    }
}

impl Default for WingSpec {
    fn default() -> Self {
        Self::right_trapezoid(0.2, 1.2, 10.0)
    }
}
