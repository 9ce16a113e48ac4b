use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WingError {
    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl WingError {
    pub fn invalid(name: &'static str, value: f64) -> Self {
        WingError::InvalidParameter { name, value }
    }
}

pub type Result<T> = std::result::Result<T, WingError>;

/// Fails with `InvalidParameter` unless `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::warn!("Rejected {}: {} is not a positive number", name, value);
        Err(WingError::invalid(name, value))
    }
}

/// Fails with `InvalidParameter` unless `value` is finite and not negative.
pub fn require_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        tracing::warn!("Rejected {}: {} is negative or not finite", name, value);
        Err(WingError::invalid(name, value))
    }
}
