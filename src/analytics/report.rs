//! Per-vessel analytics report

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::compliance::evaluate_level;
use crate::config::ModelConfig;
use crate::error::{ensure_non_negative, HullError, Result};
use crate::physics_engine::metrics::{percent_delta, round_to};
use crate::types::{
    AnalyticsReport, BiofoulingPrediction, ComplianceResult, ComplianceStatus, FuelEfficiency,
    GhgEmissions, Recommendation, RecommendationKind, SensorReading, Vessel,
};

/// Fuel, emissions, compliance and recommendations for one vessel.
///
/// The reading and the prediction must belong to `vessel`.
pub fn generate_report(
    vessel: &Vessel,
    sensor: &SensorReading,
    prediction: &BiofoulingPrediction,
    config: &ModelConfig,
    now: DateTime<Utc>,
) -> Result<AnalyticsReport> {
    if sensor.vessel_id != vessel.id {
        return Err(HullError::invalid(
            "sensor.vessel_id",
            format!("reading for '{}' passed with vessel '{}'", sensor.vessel_id, vessel.id),
        ));
    }
    if prediction.vessel_id != vessel.id {
        return Err(HullError::invalid(
            "prediction.vessel_id",
            format!("prediction for '{}' passed with vessel '{}'", prediction.vessel_id, vessel.id),
        ));
    }
    let current_fuel = ensure_non_negative("fuel_consumption", sensor.fuel_consumption)?;

    let economics = &config.economics;
    let baseline_fuel = economics.daily_fuel_baseline_lh;
    let extra_fuel = current_fuel - baseline_fuel;

    let fuel_efficiency = FuelEfficiency {
        baseline: baseline_fuel,
        current: round_to(current_fuel, 2),
        increase: round_to(percent_delta(current_fuel, baseline_fuel), 2),
        extra_cost_per_day: round_to(extra_fuel * 24.0 * economics.fuel_price_per_liter, 2),
    };

    let daily_kg = |lh: f64| lh * 24.0 * economics.ghg_factor_kg_per_liter;
    let baseline_ghg = daily_kg(baseline_fuel);
    let current_ghg = daily_kg(current_fuel);
    let ghg_emissions = GhgEmissions {
        baseline: round_to(baseline_ghg, 2),
        current: round_to(current_ghg, 2),
        increase: round_to(percent_delta(current_ghg, baseline_ghg), 2),
        extra_emissions_per_day: round_to(current_ghg - baseline_ghg, 2),
    };

    let compliance = evaluate_level(sensor.level(), &config.compliance.level);
    let recommendations = recommendations(sensor, prediction, &compliance, config);

    debug!(
        vessel = %vessel.id,
        fuel_increase = fuel_efficiency.increase,
        status = %compliance.status,
        recommendations = recommendations.len(),
        "Analytics report generated"
    );

    Ok(AnalyticsReport {
        vessel_id: vessel.id.clone(),
        generated_at: now,
        fuel_efficiency,
        ghg_emissions,
        compliance,
        recommendations,
    })
}

/// Rules fire in a fixed order; rank follows that order.
fn recommendations(
    sensor: &SensorReading,
    prediction: &BiofoulingPrediction,
    compliance: &ComplianceResult,
    config: &ModelConfig,
) -> Vec<Recommendation> {
    let rules = &config.analytics;
    let mut found: Vec<(RecommendationKind, String)> = Vec::new();

    match compliance.status {
        ComplianceStatus::NonCompliant => found.push((
            RecommendationKind::UrgentCleaning,
            "URGENT: schedule immediate cleaning to avoid NORMAM 401 penalties".to_string(),
        )),
        ComplianceStatus::Warning => found.push((
            RecommendationKind::ScheduledCleaning,
            format!(
                "Schedule preventive cleaning by {}",
                prediction.optimal_cleaning_date.format("%Y-%m-%d")
            ),
        )),
        ComplianceStatus::Compliant => {}
    }

    if sensor.drag_increase > rules.route_drag_increase_percent {
        found.push((
            RecommendationKind::RouteOptimization,
            format!(
                "High drag ({:.1}%), consider route optimisation",
                sensor.drag_increase
            ),
        ));
    }

    if sensor.water_temperature > rules.warm_water_celsius {
        found.push((
            RecommendationKind::TemperatureMonitoring,
            "Water temperature favours accelerated growth, monitor frequently".to_string(),
        ));
    }

    if prediction.estimated_savings.cost > rules.savings_opportunity_brl {
        found.push((
            RecommendationKind::EconomicOpportunity,
            format!(
                "Potential savings of R$ {:.2} by optimising the cleaning date",
                prediction.estimated_savings.cost
            ),
        ));
    }

    if sensor.fouling_level < rules.low_fouling_level {
        found.push((
            RecommendationKind::RoutineMonitoring,
            "Low fouling level, keep regular monitoring".to_string(),
        ));
    }

    found
        .into_iter()
        .zip(1u32..)
        .map(|((kind, message), rank)| Recommendation { rank, kind, message })
        .collect()
}
