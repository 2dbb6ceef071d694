//! Fleet-level summaries: overview KPIs, strategy comparison and
//! programme performance

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FoulingLevel, RiskLevel, SensorReading, Vessel};

// ============================================================================
// Overview
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub current_level: FoulingLevel,
    pub risk_level: RiskLevel,
    pub optimal_cleaning_date: DateTime<Utc>,
    pub days_until_cleaning: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VesselOverview {
    pub vessel: Vessel,
    pub current_sensor: SensorReading,
    pub prediction: PredictionSummary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FleetKpis {
    pub total_vessels: usize,
    pub operating_vessels: usize,
    pub critical_vessels: usize,
    pub high_risk_vessels: usize,
    /// 0-5, 2 decimals
    pub average_fouling_level: f64,
    /// Sample standard deviation of the fouling level, 0 below two vessels
    pub fouling_std_dev: f64,
    /// Sum of per-vessel drag increase (%)
    pub total_drag_increase: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverview {
    pub fleet: Vec<VesselOverview>,
    pub kpis: FleetKpis,
}

// ============================================================================
// Strategy comparison
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningApproach {
    FixedInterval,
    Predictive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimingAdvice {
    Postpone,
    Advance,
}

impl std::fmt::Display for TimingAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingAdvice::Postpone => write!(f, "Postpone cleaning"),
            TimingAdvice::Advance => write!(f, "Advance cleaning"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPlan {
    pub approach: CleaningApproach,
    pub days_until_cleaning: u32,
    pub next_cleaning_date: DateTime<Utc>,
    /// Fixed interval: fuel value wasted by cleaning early (R$).
    /// Predictive: projected savings at the optimal point (R$).
    pub estimated_value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDifference {
    /// Predictive minus fixed-interval days
    pub days_difference: i64,
    /// R$
    pub financial_impact: f64,
    pub recommendation: TimingAdvice,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub vessel_id: String,
    pub vessel_name: String,
    pub scheduled: StrategyPlan,
    pub ml_optimized: StrategyPlan,
    pub difference: StrategyDifference,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetStrategySummary {
    pub total_vessels: usize,
    /// R$
    pub total_financial_impact: f64,
    /// R$
    pub average_savings_per_vessel: f64,
    pub recommended_approach: CleaningApproach,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetComparison {
    pub comparisons: Vec<StrategyComparison>,
    pub fleet_summary: FleetStrategySummary,
}

// ============================================================================
// Programme performance
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl std::str::FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!("unknown report period '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub period: ReportPeriod,
    /// L
    pub fuel_saved: f64,
    /// R$
    pub cost_saved: f64,
    /// t CO2
    pub ghg_reduced: f64,
    /// Vessels cleaned later than the fixed interval would have
    pub cleanings_optimized: usize,
    /// %
    pub prediction_accuracy: f64,
    pub vessels_monitored: usize,
    /// % of vessels not in violation on the level scale
    pub compliance_rate: f64,
}
