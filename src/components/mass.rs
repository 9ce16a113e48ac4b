use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::{
    require_non_negative, require_positive, Result, WingError, CUBIC_MM_PER_CUBIC_M,
    GRAMS_PER_KILOGRAM,
};

/// A single onboard item and its weight (g).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMass {
    pub name: String,
    pub grams: f64,
}

impl ComponentMass {
    pub fn new(name: &str, grams: f64) -> Self {
        Self {
            name: name.to_string(),
            grams,
        }
    }
}

/// Printed I-beam spar. Two flanges plus a web between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparBeam {
    pub thickness_mm: f64,
    pub height_mm: f64,
    pub length_mm: f64,
    /// Filament density (kg/m³).
    pub density: f64,
    /// Fraction of the solid volume actually printed.
    pub infill_correction: f64,
}

impl Default for SparBeam {
    fn default() -> Self {
        Self {
            thickness_mm: 4.0,
            height_mm: 20.0,
            length_mm: 500.0,
            density: 1250.0, // PLA
            infill_correction: 0.7,
        }
    }
}

impl SparBeam {
    pub fn volume_mm3(&self) -> Result<f64> {
        let t = require_positive("spar_thickness", self.thickness_mm)?;
        let h = require_positive("spar_height", self.height_mm)?;
        let l = require_positive("spar_length", self.length_mm)?;
        if h < 2.0 * t {
            return Err(WingError::invalid("spar_height", h));
        }
        Ok(t * h * l * 2.0 + (h - 2.0 * t) * t * l)
    }

    pub fn grams(&self) -> Result<f64> {
        let density = require_positive("spar_density", self.density)?;
        let correction = require_positive("infill_correction", self.infill_correction)?;
        Ok(self.volume_mm3()? / CUBIC_MM_PER_CUBIC_M * density * correction * GRAMS_PER_KILOGRAM)
    }
}

/// Flat foam sheets forming the wing skin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoamPanels {
    pub count: u32,
    pub thickness_mm: f64,
    pub length_mm: f64,
    pub width_mm: f64,
    /// Foam density (kg/m³).
    pub density: f64,
}

impl Default for FoamPanels {
    fn default() -> Self {
        Self {
            count: 2,
            thickness_mm: 3.0,
            length_mm: 600.0,
            width_mm: 480.0,
            density: 14.75,
        }
    }
}

impl FoamPanels {
    pub fn grams(&self) -> Result<f64> {
        let volume = f64::from(self.count)
            * require_positive("foam_thickness", self.thickness_mm)?
            * require_positive("foam_length", self.length_mm)?
            * require_positive("foam_width", self.width_mm)?;
        let density = require_positive("foam_density", self.density)?;
        Ok(volume / CUBIC_MM_PER_CUBIC_M * density * GRAMS_PER_KILOGRAM)
    }
}

/// Estimated aircraft mass, split by origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassBreakdown {
    pub electronics_grams: f64,
    pub spar_grams: f64,
    pub foam_grams: f64,
    /// Sum of the above (kg).
    pub total_kg: f64,
}

/// Bottom-up estimate of the aircraft mass from its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassBudget {
    pub electronics: Vec<ComponentMass>,
    pub spar: SparBeam,
    pub foam: FoamPanels,
}

impl Default for MassBudget {
    fn default() -> Self {
        Self {
            electronics: vec![
                ComponentMass::new("motor", 14.0),
                ComponentMass::new("rc", 5.6),
                ComponentMass::new("bat", 19.0),
                ComponentMass::new("servo", 2.0 * 8.0),
                ComponentMass::new("prop", 3.0),
                ComponentMass::new("payload", 2.0),
                ComponentMass::new("esc", 6.0),
                ComponentMass::new("hinge", 1.0),
            ],
            spar: SparBeam::default(),
            foam: FoamPanels::default(),
        }
    }
}

impl MassBudget {
    pub fn electronics_grams(&self) -> Result<f64> {
        self.electronics
            .iter()
            .map(|c| require_non_negative("component_mass", c.grams))
            .sum()
    }

    pub fn estimate(&self) -> Result<MassBreakdown> {
        let electronics_grams = self.electronics_grams()?;
        let spar_grams = self.spar.grams()?;
        let foam_grams = self.foam.grams()?;
        let total_kg = (electronics_grams + spar_grams + foam_grams) / GRAMS_PER_KILOGRAM;
        debug!(
            "Mass budget: electronics {:.1} g, spar {:.1} g, foam {:.1} g",
            electronics_grams, spar_grams, foam_grams
        );
        Ok(MassBreakdown {
            electronics_grams,
            spar_grams,
            foam_grams,
            total_kg,
        })
    }
}
