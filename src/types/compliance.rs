//! NORMAM 401 compliance outcome, shared by both fouling scales

use serde::{Deserialize, Serialize};

/// Which scale a compliance result was evaluated on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceScale {
    /// 0-5 fouling level
    Level,
    /// 0-100 % biofouling index
    Index,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    NonCompliant,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::Warning => write!(f, "warning"),
            ComplianceStatus::NonCompliant => write!(f, "non-compliant"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub scale: ComplianceScale,
    pub status: ComplianceStatus,
    /// 0 once the violation threshold is reached
    pub days_until_violation: u32,
    /// Violation threshold on `scale`
    pub threshold: f64,
    pub current_value: f64,
    /// Overall NORMAM 401 pass flag (below the violation threshold)
    pub normam401_compliant: bool,
}

impl ComplianceResult {
    pub fn is_violation(&self) -> bool {
        self.status == ComplianceStatus::NonCompliant
    }
}
