//! Prediction products: weekly forecast, savings, risk and the index-based
//! extended multi-horizon view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BiofoulingIndex, ComplianceStatus, FoulingLevel};

/// Categorical fouling risk, ordered from least to most severe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictedLevel {
    pub date: DateTime<Utc>,
    pub level: FoulingLevel,
    /// 0-1
    pub confidence: f64,
}

/// Savings from cleaning at the optimal date instead of now
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedSavings {
    /// L
    pub fuel: f64,
    /// R$
    pub cost: f64,
    /// t CO2
    pub ghg_reduction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiofoulingPrediction {
    pub vessel_id: String,
    pub current_level: FoulingLevel,
    /// Ordered by date
    pub predicted_levels: Vec<PredictedLevel>,
    pub optimal_cleaning_date: DateTime<Utc>,
    pub estimated_savings: EstimatedSavings,
    pub risk_level: RiskLevel,
}

// ============================================================================
// Extended (index-based) prediction
// ============================================================================

/// Direction of the index trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Stable,
    Decreasing,
}

/// What to do about a projected index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendedAction {
    UrgentCleaning,
    ScheduleCleaning,
    ContinuousMonitoring,
}

impl std::fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendedAction::UrgentCleaning => write!(f, "Urgent cleaning recommended"),
            RecommendedAction::ScheduleCleaning => {
                write!(f, "Schedule cleaning within the next 2 weeks")
            }
            RecommendedAction::ContinuousMonitoring => write!(f, "Continuous monitoring"),
        }
    }
}

/// Projection at one horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDetail {
    pub horizon_days: u32,
    pub date: DateTime<Utc>,
    pub biofouling_index: BiofoulingIndex,
    pub fouling_level: FoulingLevel,
    /// %
    pub confidence: f64,
    /// Additional L/day
    pub fuel_impact: f64,
    /// Additional R$/day
    pub cost_impact: f64,
    pub recommended_action: RecommendedAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyImpact {
    /// L/day
    pub current_fuel_increase: f64,
    /// R$/day
    pub current_cost_increase: f64,
    /// kg CO2/day
    pub current_emissions_increase: f64,
    /// (horizon days, L/day) per configured horizon
    pub projected_fuel_increase: Vec<(u32, f64)>,
}

/// NORMAM 401 view on the index scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexComplianceSummary {
    pub status: ComplianceStatus,
    /// None once the limit is reached
    pub days_until_violation: Option<u32>,
    pub max_allowed_fouling: f64,
    pub current_fouling: f64,
    pub inspection_due: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedPrediction {
    pub vessel_id: String,
    pub current_level: FoulingLevel,
    pub biofouling_index: BiofoulingIndex,
    pub biofouling_index_trend: TrendDirection,
    /// One entry per horizon, shortest first
    pub predictions: Vec<PredictionDetail>,
    pub energy_impact: EnergyImpact,
    pub normam401_compliance: IndexComplianceSummary,
    pub optimal_cleaning_date: DateTime<Utc>,
    pub risk_level: RiskLevel,
    pub timestamp: DateTime<Utc>,
}
