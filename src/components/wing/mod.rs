pub mod config;
mod geometry;
mod planform;
mod result;
mod sizing;
mod spec;

pub use config::{ConfigError, SizingCoefficients, WingConfig, WingPreset, WingSource};
pub use geometry::{Chords, MeanAerodynamicChord};
pub use planform::Planform;
pub use result::WingResult;
pub use sizing::{compute_wing, compute_wing_with, lift_force, required_area};
pub use spec::{WingShape, WingSpec};
