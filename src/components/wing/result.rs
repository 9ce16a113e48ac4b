use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::components::wing::{Planform, WingShape};
use crate::utils::Result;

/// Sized wing, derived in one pass from a [`WingSpec`](crate::components::WingSpec).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingResult {
    pub shape: WingShape,
    /// Lift the wing must produce at cruise (N).
    pub lift_force: f64,
    /// Required wing area (m²).
    pub area: f64,
    /// Centreline to tip (m).
    pub half_span: f64,
    pub chord_root: f64,
    pub chord_tip: f64,
    /// Mean aerodynamic chord (m).
    pub mac: f64,
    /// Distance from the root to the MAC station along the half-span (m).
    pub mac_span_position: f64,
    /// Crossing point of the MAC construction diagonals.
    pub mac_crossing: Point2<f64>,
}

impl WingResult {
    pub fn planform(&self) -> Planform {
        Planform::from_result(self)
    }

    /// Spanwise station of the half-planform centroid (m).
    pub fn y_mean(&self) -> Result<f64> {
        Ok(self.planform().centroid()?.x)
    }
}
