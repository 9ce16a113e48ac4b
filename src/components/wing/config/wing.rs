use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::wing::config::{ConfigError, RawWingConfig};
use crate::components::wing::{compute_wing_with, SizingCoefficients, WingResult, WingSpec};

/// A named wing design together with the coefficients it is sized with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingConfig {
    pub name: String,
    pub spec: WingSpec,
    pub coefficients: SizingCoefficients,
}

impl Default for WingConfig {
    /// The right trapezoid trainer is chosen as the default.
    fn default() -> Self {
        Self::from_preset(WingPreset::RightDefault)
    }
}

impl WingConfig {
    /// Creates a new wing configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A `WingSource` enum specifying if the configuration is a built-in
    ///              preset (`Programmed`) or loaded from a YAML file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to
    /// load or holds an invalid design.
    pub fn new(source: WingSource) -> Result<Self, ConfigError> {
        match source {
            WingSource::Programmed(preset) => Ok(Self::from_preset(preset)),
            WingSource::File(path) => Self::from_file(path),
        }
    }

    /// Creates a configuration for a built-in design.
    ///
    /// # Arguments
    /// * `preset` - The built-in design to use.
    ///
    /// # Returns
    /// A `WingConfig` with the preset spec and the default sizing coefficients.
    fn from_preset(preset: WingPreset) -> Self {
        match preset {
            WingPreset::RightDefault => Self {
                name: "RightDefault".to_string(),
                spec: WingSpec::right_trapezoid(0.2, 1.2, 10.0),
                coefficients: SizingCoefficients::default(),
            },
            WingPreset::ObtuseDefault => Self {
                name: "ObtuseDefault".to_string(),
                spec: WingSpec::obtuse_trapezoid(0.2, 1.2, 10.0, 0.3, 0.2),
                coefficients: SizingCoefficients::default(),
            },
        }
    }

    /// Creates a wing configuration by reading a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML wing file.
    ///
    /// # Returns
    /// A `Result` containing the loaded configuration or an error if reading,
    /// deserialization or validation fails.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        let raw: RawWingConfig = serde_yaml::from_str(&file_contents)?;
        Self::from_raw_config(raw)
    }

    /// Validates the flat file layout into a structured configuration.
    fn from_raw_config(raw: RawWingConfig) -> Result<Self, ConfigError> {
        raw.coefficients.validate()?;
        Ok(Self {
            spec: WingSpec::from_raw(&raw)?,
            name: raw.name,
            coefficients: raw.coefficients,
        })
    }

    /// Sizes the wing with this configuration's coefficients.
    ///
    /// # Returns
    /// The sized `WingResult`, or `ConfigError::Wing` if any sizing step fails.
    pub fn compute(&self) -> Result<WingResult, ConfigError> {
        Ok(compute_wing_with(&self.spec, &self.coefficients)?)
    }
}

/// Where a wing configuration comes from.
#[derive(Debug, Clone)]
pub enum WingSource {
    Programmed(WingPreset),
    File(PathBuf),
}

/// Built-in designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WingPreset {
    /// 0.2 kg, 1.2 m span, 10 m/s.
    RightDefault,
    /// As `RightDefault`, with a 0.3 m tip chord and 0.2 m displacement.
    ObtuseDefault,
}
