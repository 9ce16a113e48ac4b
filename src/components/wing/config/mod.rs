mod coefficients;
mod loader;
mod wing;

pub use coefficients::SizingCoefficients;
pub use loader::{ConfigError, RawShape, RawWingConfig};
pub use wing::{WingConfig, WingPreset, WingSource};
