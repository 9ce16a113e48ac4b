//! Rule-of-thumb wing sizing for model aircraft.
//!
//! Given the aircraft mass, wingspan and cruise speed, a [`WingSpec`] is sized
//! into a [`WingResult`]: required lift, wing area, root and tip chords and the
//! mean aerodynamic chord.

pub mod components;
pub mod utils;

pub use components::{
    compute_wing, compute_wing_with, ConfigError, MassBudget, SizingCoefficients, WingConfig,
    WingPreset, WingResult, WingShape, WingSource, WingSpec,
};
pub use utils::WingError;
