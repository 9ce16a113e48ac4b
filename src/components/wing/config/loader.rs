use serde::Deserialize;
use thiserror::Error;

use crate::components::wing::{SizingCoefficients, WingShape, WingSpec};
use crate::utils::WingError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid wing configuration: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Wing(#[from] WingError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawShape {
    Right,
    Obtuse,
}

/// Flat on-disk layout of a wing file.
#[derive(Debug, Deserialize)]
pub struct RawWingConfig {
    /// Design identification
    pub name: String,

    /// Aircraft properties
    pub mass: f64,
    pub aircraft_span: f64,
    pub cruise_speed: f64,

    /// Planform
    pub shape: RawShape,
    pub chord_tip: Option<f64>,
    pub displacement: Option<f64>,

    /// Overrides for the sizing coefficients
    #[serde(default)]
    pub coefficients: SizingCoefficients,
}

impl WingSpec {
    pub fn from_raw(raw: &RawWingConfig) -> Result<Self, ConfigError> {
        let shape = match raw.shape {
            RawShape::Right => {
                if raw.chord_tip.is_some() || raw.displacement.is_some() {
                    return Err(ConfigError::ValidationError(format!(
                        "'{}': chord_tip and displacement only apply to obtuse wings",
                        raw.name
                    )));
                }
                WingShape::RightTrapezoid
            }
            RawShape::Obtuse => WingShape::ObtuseTrapezoid {
                chord_tip: raw.chord_tip.ok_or_else(|| {
                    ConfigError::ValidationError(format!(
                        "'{}': obtuse wings need a chord_tip",
                        raw.name
                    ))
                })?,
                displacement: raw.displacement.unwrap_or(0.0),
            },
        };
        let spec = WingSpec::new(raw.mass, raw.aircraft_span, raw.cruise_speed, shape);
        spec.validate()?;
        Ok(spec)
    }
}
