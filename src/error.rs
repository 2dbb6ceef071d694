//! Error taxonomy for the biofouling core
//!
//! - `InvalidInput`: malformed or out-of-domain numbers, rejected at the boundary
//! - `VesselNotFound` / `PowerCurveNotFound`: missing reference data
//! - `Config`: configuration loading and validation failures
//!
//! Degenerate computations (zero speed, zero growth rate) are not errors. They
//! resolve to documented fallback values inside the engines.

use thiserror::Error;

use crate::config::ConfigError;
use crate::types::VesselType;

#[derive(Error, Debug)]
pub enum HullError {
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("vessel not found: {0}")]
    VesselNotFound(String),

    #[error("no power curve registered for vessel type '{0}'")]
    PowerCurveNotFound(VesselType),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl HullError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for lookup failures the caller should surface as "not found"
    pub fn is_missing_reference(&self) -> bool {
        matches!(self, Self::VesselNotFound(_) | Self::PowerCurveNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, HullError>;

// ============================================================================
// Boundary checks
// ============================================================================

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HullError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(HullError::invalid(field, format!("cannot be negative, got {value}")));
    }
    Ok(value)
}

pub(crate) fn ensure_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    let value = ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(HullError::invalid(
            field,
            format!("{value} is outside physical range ({min}-{max})"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_rejects_nan_and_inf() {
        assert!(ensure_finite("speed", f64::NAN).is_err());
        assert!(ensure_finite("speed", f64::INFINITY).is_err());
        assert_eq!(ensure_finite("speed", 12.5).ok(), Some(12.5));
    }

    #[test]
    fn test_ensure_range_reports_field() {
        let err = ensure_range("salinity", 80.0, 0.0, 50.0).unwrap_err();
        assert!(err.to_string().contains("salinity"));
        assert!(!err.is_missing_reference());
    }

    #[test]
    fn test_missing_reference_classification() {
        assert!(HullError::VesselNotFound("v999".into()).is_missing_reference());
        assert!(HullError::PowerCurveNotFound(VesselType::Cargo).is_missing_reference());
    }
}
