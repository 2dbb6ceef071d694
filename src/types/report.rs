//! Per-vessel analytics report and programme ROI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ComplianceResult;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuelEfficiency {
    /// L/h
    pub baseline: f64,
    /// L/h
    pub current: f64,
    /// %
    pub increase: f64,
    /// R$/day
    pub extra_cost_per_day: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GhgEmissions {
    /// kg CO2/day
    pub baseline: f64,
    /// kg CO2/day
    pub current: f64,
    /// %
    pub increase: f64,
    /// kg CO2/day
    pub extra_emissions_per_day: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    UrgentCleaning,
    ScheduledCleaning,
    RouteOptimization,
    TemperatureMonitoring,
    EconomicOpportunity,
    RoutineMonitoring,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// 1 = first in rule order
    pub rank: u32,
    pub kind: RecommendationKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub vessel_id: String,
    pub generated_at: DateTime<Utc>,
    pub fuel_efficiency: FuelEfficiency,
    pub ghg_emissions: GhgEmissions,
    pub compliance: ComplianceResult,
    pub recommendations: Vec<Recommendation>,
}

/// Return on investment of the monitoring programme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiSummary {
    /// R$
    pub total_cost: f64,
    /// R$
    pub total_savings: f64,
    /// R$
    pub net_benefit: f64,
    /// %
    pub roi: f64,
    /// Months to recover the implementation cost. None when monthly
    /// savings never exceed the operating cost.
    pub payback_period: Option<f64>,
}
