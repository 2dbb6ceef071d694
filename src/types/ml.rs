//! Growth model types: inputs, outputs, cleaning point and model metadata

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FoulingLevel;

/// Voyage environment class, drives the route growth factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    #[default]
    Coastal,
    Oceanic,
    River,
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteType::Coastal => write!(f, "coastal"),
            RouteType::Oceanic => write!(f, "oceanic"),
            RouteType::River => write!(f, "river"),
        }
    }
}

/// Averaged voyage conditions fed to the growth model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelInput {
    pub days_since_cleaning: u32,
    /// kn
    pub average_speed: f64,
    /// °C
    pub average_water_temp: f64,
    /// PSU
    pub average_salinity: f64,
    pub route_type: RouteType,
    /// 1.0 neutral, 1.2 in the southern summer
    pub seasonal_factor: f64,
}

/// Growth multipliers that produced a prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub temperature: f64,
    pub salinity: f64,
    pub route: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelOutput {
    pub predicted_fouling_level: FoulingLevel,
    /// 0-1
    pub confidence: f64,
    /// Level points per day
    pub growth_rate: f64,
    pub risk_factors: RiskFactors,
}

/// Cost-optimal cleaning timing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CleaningPoint {
    /// Whole days until the target level. Holds the "never" sentinel when
    /// `reaches_target` is false.
    pub days_until_optimal: u32,
    /// Drag-cost savings of waiting minus one cleaning (R$). May be negative.
    pub projected_savings: f64,
    pub reaches_target: bool,
}

/// Immutable description of the deployed growth model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    pub version: String,
    /// 0-1
    pub accuracy: f64,
    pub last_training_date: NaiveDate,
    pub training_data_size: u32,
    pub features: Vec<String>,
}
