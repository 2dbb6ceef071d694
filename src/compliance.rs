//! NORMAM 401 hull-fouling compliance
//!
//! Two independent regimes, never mixed:
//! - `evaluate_level`: 0-5 fouling level from sensor/prediction data
//! - `evaluate_index`: 0-100 % biofouling index from the digital twin

use crate::config::{IndexThresholds, LevelThresholds};
use crate::physics_engine::metrics::floor_days;
use crate::types::{
    BiofoulingIndex, ComplianceResult, ComplianceScale, ComplianceStatus, FoulingLevel,
};

fn classify(value: f64, warning: f64, violation: f64) -> ComplianceStatus {
    if value >= violation {
        ComplianceStatus::NonCompliant
    } else if value >= warning {
        ComplianceStatus::Warning
    } else {
        ComplianceStatus::Compliant
    }
}

/// Compliance on the 0-5 level scale.
///
/// Days until violation assume the configured daily growth in level points.
pub fn evaluate_level(level: FoulingLevel, thresholds: &LevelThresholds) -> ComplianceResult {
    let value = level.value();
    let status = classify(value, thresholds.warning, thresholds.violation);
    let days_until_violation = if status == ComplianceStatus::NonCompliant {
        0
    } else {
        floor_days((thresholds.violation - value) / thresholds.daily_growth, u32::MAX)
    };

    ComplianceResult {
        scale: ComplianceScale::Level,
        status,
        days_until_violation,
        threshold: thresholds.violation,
        current_value: value,
        normam401_compliant: value < thresholds.violation,
    }
}

/// Compliance on the 0-100 % index scale.
///
/// Days until violation assume the configured weekly index growth.
pub fn evaluate_index(index: BiofoulingIndex, thresholds: &IndexThresholds) -> ComplianceResult {
    let value = index.value();
    let status = classify(value, thresholds.warning, thresholds.violation);
    let days_until_violation = if status == ComplianceStatus::NonCompliant {
        0
    } else {
        floor_days(
            (thresholds.violation - value) / thresholds.weekly_growth * 7.0,
            u32::MAX,
        )
    };

    ComplianceResult {
        scale: ComplianceScale::Index,
        status,
        days_until_violation,
        threshold: thresholds.violation,
        current_value: value,
        normam401_compliant: value < thresholds.violation,
    }
}
