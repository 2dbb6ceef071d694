//! Fouling severity scales
//!
//! Two scales coexist and must never be mixed:
//! - `FoulingLevel`: 0-5 severity used by sensors, the growth model and alerts
//! - `BiofoulingIndex`: 0-100 % used by the digital twin and NORMAM 401 checks
//!
//! The only crossing point is the named conversion `index = level × 20`.

use serde::{Deserialize, Serialize};

use super::thresholds::fouling_thresholds;
use super::RiskLevel;

/// Index points per level point
pub const INDEX_PER_LEVEL: f64 = 20.0;

/// Upper bound of the level scale
pub const MAX_FOULING_LEVEL: f64 = 5.0;

/// Upper bound of the index scale (%)
pub const MAX_BIOFOULING_INDEX: f64 = 100.0;

/// Fouling severity on the 0-5 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd, Default)]
#[serde(from = "f64", into = "f64")]
pub struct FoulingLevel(f64);

impl FoulingLevel {
    pub const ZERO: Self = Self(0.0);
    pub const MAX: Self = Self(MAX_FOULING_LEVEL);

    /// Clamp into [0, 5]. Callers validate finiteness at the boundary; a
    /// non-finite value that slips through lands on 0.
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, MAX_FOULING_LEVEL))
        } else {
            Self::ZERO
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to the 0-100 % index scale
    pub fn to_index(self) -> BiofoulingIndex {
        BiofoulingIndex::clamped(self.0 * INDEX_PER_LEVEL)
    }

    /// Categorical risk for this level
    pub fn risk(self) -> RiskLevel {
        RiskLevel::from_level(self)
    }
}

impl std::fmt::Display for FoulingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}/5", self.0)
    }
}

/// Biofouling index on the 0-100 % scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd, Default)]
#[serde(from = "f64", into = "f64")]
pub struct BiofoulingIndex(f64);

impl BiofoulingIndex {
    pub const ZERO: Self = Self(0.0);

    /// Clamp into [0, 100]; non-finite input lands on 0
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, MAX_BIOFOULING_INDEX))
        } else {
            Self::ZERO
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to the 0-5 level scale
    pub fn to_level(self) -> FoulingLevel {
        FoulingLevel::clamped(self.0 / INDEX_PER_LEVEL)
    }
}

impl From<f64> for FoulingLevel {
    fn from(value: f64) -> Self {
        Self::clamped(value)
    }
}

impl From<FoulingLevel> for f64 {
    fn from(level: FoulingLevel) -> Self {
        level.0
    }
}

impl From<f64> for BiofoulingIndex {
    fn from(value: f64) -> Self {
        Self::clamped(value)
    }
}

impl From<BiofoulingIndex> for f64 {
    fn from(index: BiofoulingIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for BiofoulingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl RiskLevel {
    /// Monotonic classification on the level scale (2.5 / 3.5 / 4.5)
    pub fn from_level(level: FoulingLevel) -> Self {
        let v = level.value();
        if v >= fouling_thresholds::RISK_CRITICAL {
            Self::Critical
        } else if v >= fouling_thresholds::RISK_HIGH {
            Self::High
        } else if v >= fouling_thresholds::RISK_MEDIUM {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
