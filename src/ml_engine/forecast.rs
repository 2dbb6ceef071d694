//! Forecast assembly
//!
//! - `forecast_vessel`: level-scale prediction from a sensor reading
//!   (weekly series, optimal cleaning date, savings, risk)
//! - `extended_prediction`: index-scale multi-horizon projection from a
//!   digital twin index

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::environment::{infer_route_type, seasonal_factor_at};
use super::predictor::BiofoulingPredictor;
use crate::compliance::evaluate_index;
use crate::config::ModelConfig;
use crate::error::Result;
use crate::physics_engine::metrics::{days_after, round_to};
use crate::types::{
    index_thresholds, BiofoulingIndex, BiofoulingPrediction, CleaningPoint, EnergyImpact,
    EstimatedSavings, ExtendedPrediction, FoulingLevel, IndexComplianceSummary, ModelInput, ModelOutput,
    PredictedLevel, PredictionDetail, RecommendedAction, SensorReading, TrendDirection, Vessel,
    MAX_BIOFOULING_INDEX,
};

/// Level-scale prediction plus the model figures behind it
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VesselForecast {
    pub input: ModelInput,
    pub model: ModelOutput,
    pub cleaning: CleaningPoint,
    pub prediction: BiofoulingPrediction,
}

/// Model input for a vessel from its voyage and a current reading
pub fn model_input(
    vessel: &Vessel,
    sensor: &SensorReading,
    now: DateTime<Utc>,
    config: &ModelConfig,
) -> ModelInput {
    ModelInput {
        days_since_cleaning: vessel.days_since_cleaning(now),
        average_speed: sensor.speed,
        average_water_temp: sensor.water_temperature,
        average_salinity: sensor.salinity,
        route_type: infer_route_type(&vessel.current_route, &config.growth.river_ports),
        seasonal_factor: seasonal_factor_at(now, &config.growth),
    }
}

/// Full prediction for one vessel.
///
/// The current level and risk come from the reading. Growth, the weekly
/// series and the cleaning point come from the model.
pub fn forecast_vessel(
    predictor: &BiofoulingPredictor<'_>,
    vessel: &Vessel,
    sensor: &SensorReading,
    now: DateTime<Utc>,
) -> Result<VesselForecast> {
    let config = predictor.config();
    let economics = &config.economics;
    let growth = &config.growth;

    let input = model_input(vessel, sensor, now, config);
    let model = predictor.predict(&input)?;
    let current_level = sensor.level();

    let step = growth.forecast_step_days.max(1);
    let predicted_levels = (step..=growth.forecast_horizon_days)
        .step_by(step as usize)
        .map(|offset| {
            let ahead = ModelInput {
                days_since_cleaning: input.days_since_cleaning.saturating_add(offset),
                ..input
            };
            let out = predictor.predict(&ahead)?;
            Ok(PredictedLevel {
                date: days_after(now, offset),
                level: out.predicted_fouling_level,
                confidence: out.confidence,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cleaning = predictor.calculate_optimal_cleaning_point(
        current_level,
        model.growth_rate,
        economics.cleaning_cost_brl,
        economics.fuel_cost_per_day(),
    )?;

    let waiting_days = if cleaning.reaches_target {
        f64::from(cleaning.days_until_optimal)
    } else {
        0.0
    };
    let fuel = economics.daily_fuel_baseline_lh * 24.0 * (sensor.drag_increase / 100.0)
        * waiting_days
        * economics.drag_cost_savings_rate;
    let estimated_savings = EstimatedSavings {
        fuel: round_to(fuel, 2),
        cost: round_to(fuel * economics.fuel_price_per_liter, 2),
        ghg_reduction: round_to(fuel * economics.ghg_tonnes_per_liter(), 2),
    };

    debug!(
        vessel = %vessel.id,
        days_since_cleaning = input.days_since_cleaning,
        route = %input.route_type,
        growth_rate = model.growth_rate,
        days_until_optimal = cleaning.days_until_optimal,
        "Vessel forecast assembled"
    );

    let prediction = BiofoulingPrediction {
        vessel_id: vessel.id.clone(),
        current_level,
        predicted_levels,
        optimal_cleaning_date: days_after(now, cleaning.days_until_optimal),
        estimated_savings,
        risk_level: current_level.risk(),
    };

    Ok(VesselForecast {
        input,
        model,
        cleaning,
        prediction,
    })
}

fn trend(index: BiofoulingIndex) -> TrendDirection {
    let value = index.value();
    if value > index_thresholds::TREND_INCREASING {
        TrendDirection::Increasing
    } else if value > index_thresholds::TREND_STABLE {
        TrendDirection::Stable
    } else {
        TrendDirection::Decreasing
    }
}

fn action(projected: BiofoulingIndex) -> RecommendedAction {
    let value = projected.value();
    if value > index_thresholds::ACTION_URGENT {
        RecommendedAction::UrgentCleaning
    } else if value > index_thresholds::ACTION_SCHEDULE {
        RecommendedAction::ScheduleCleaning
    } else {
        RecommendedAction::ContinuousMonitoring
    }
}

/// Multi-horizon projection of a twin index.
///
/// Weekly growth is drawn per horizon from
/// `[weekly_growth_min, weekly_growth_min + weekly_growth_spread)`.
pub fn extended_prediction<R: Rng + ?Sized>(
    vessel_id: &str,
    index: BiofoulingIndex,
    now: DateTime<Utc>,
    rng: &mut R,
    config: &ModelConfig,
) -> ExtendedPrediction {
    let forecast = &config.forecast;
    let economics = &config.economics;
    let fuel_per_point = economics.fuel_liters_per_index_point;

    let predictions: Vec<PredictionDetail> = forecast
        .horizons_days
        .iter()
        .map(|&days| {
            let weekly = forecast.weekly_growth_min + rng.gen::<f64>() * forecast.weekly_growth_spread;
            let weeks = f64::from(days) / 7.0;
            let projected = BiofoulingIndex::clamped(round_to(
                (index.value() + weekly * weeks).min(MAX_BIOFOULING_INDEX),
                1,
            ));
            let fuel_impact = projected.value() * fuel_per_point;
            PredictionDetail {
                horizon_days: days,
                date: days_after(now, days),
                biofouling_index: projected,
                fouling_level: FoulingLevel::clamped(round_to(
                    projected.to_level().value(),
                    1,
                )),
                confidence: round_to(
                    forecast.confidence_start_percent - weeks * forecast.confidence_decay_per_week,
                    2,
                ),
                fuel_impact: round_to(fuel_impact, 2),
                cost_impact: round_to(fuel_impact * economics.fuel_price_per_liter, 2),
                recommended_action: action(projected),
            }
        })
        .collect();

    let current_fuel = index.value() * fuel_per_point;
    let energy_impact = EnergyImpact {
        current_fuel_increase: round_to(current_fuel, 2),
        current_cost_increase: round_to(current_fuel * economics.fuel_price_per_liter, 2),
        current_emissions_increase: round_to(current_fuel * economics.ghg_factor_kg_per_liter, 2),
        projected_fuel_increase: predictions
            .iter()
            .map(|p| (p.horizon_days, p.fuel_impact))
            .collect(),
    };

    let compliance = evaluate_index(index, &config.compliance.index);
    let normam401_compliance = IndexComplianceSummary {
        status: compliance.status,
        days_until_violation: (compliance.days_until_violation > 0)
            .then_some(compliance.days_until_violation),
        max_allowed_fouling: compliance.threshold,
        current_fouling: compliance.current_value,
        inspection_due: days_after(now, config.compliance.inspection_interval_days),
    };

    let optimal_cleaning_date = predictions
        .iter()
        .find(|p| p.horizon_days == forecast.cleaning_horizon_days)
        .map_or_else(|| days_after(now, forecast.cleaning_horizon_days), |p| p.date);

    let current_level = index.to_level();

    debug!(
        vessel = %vessel_id,
        index = index.value(),
        horizons = predictions.len(),
        status = %compliance.status,
        "Extended prediction assembled"
    );

    ExtendedPrediction {
        vessel_id: vessel_id.to_string(),
        current_level,
        biofouling_index: index,
        biofouling_index_trend: trend(index),
        predictions,
        energy_impact,
        normam401_compliance,
        optimal_cleaning_date,
        risk_level: current_level.risk(),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::demo_fleet;
    use crate::sensors::SensorSynthesizer;
    use crate::types::{ComplianceStatus, RiskLevel, RouteType};
    use chrono::{Duration, TimeZone};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_forecast_vessel_shape() {
        let config = ModelConfig::default();
        let predictor = BiofoulingPredictor::new(&config);
        let synth = SensorSynthesizer::new(&config.sensors, &config.economics);
        let vessel = &demo_fleet()[0];
        let days = vessel.days_since_cleaning(now());
        let sensor = synth.synthesize(&vessel.id, days, now(), &mut StepRng::new(0, 0));

        let f = forecast_vessel(&predictor, vessel, &sensor, now()).unwrap();
        assert_eq!(f.input.days_since_cleaning, 105);
        assert_eq!(f.input.route_type, RouteType::Coastal);
        // November is southern summer
        assert_eq!(f.input.seasonal_factor, 1.2);

        let p = &f.prediction;
        assert_eq!(p.vessel_id, "v001");
        assert_eq!(p.predicted_levels.len(), 8);
        assert_eq!(p.predicted_levels[0].date, now() + Duration::days(7));
        assert!(p.predicted_levels.windows(2).all(|w| w[0].level <= w[1].level && w[0].date < w[1].date));
        assert_eq!(p.current_level.value(), sensor.fouling_level);
        assert_eq!(p.risk_level, RiskLevel::Low);
        assert!(f.cleaning.reaches_target);
        assert_eq!(
            p.optimal_cleaning_date,
            now() + Duration::days(i64::from(f.cleaning.days_until_optimal))
        );
        assert!(p.estimated_savings.fuel > 0.0);
        assert!((p.estimated_savings.cost - p.estimated_savings.fuel * 5.8).abs() < 0.1);
    }

    #[test]
    fn test_extended_prediction_zero_noise() {
        let config = ModelConfig::default();
        let index = BiofoulingIndex::clamped(55.0);
        let ext = extended_prediction("v001", index, now(), &mut StepRng::new(0, 0), &config);

        assert_eq!(ext.predictions.len(), 3);
        // 55 + 2.5 × 1 week
        assert_eq!(ext.predictions[0].biofouling_index.value(), 57.5);
        assert_eq!(ext.predictions[0].confidence, 89.0);
        assert_eq!(ext.predictions[0].recommended_action, RecommendedAction::ScheduleCleaning);
        assert_eq!(ext.predictions[0].fuel_impact, 862.5);
        assert_eq!(ext.current_level.value(), 2.75);
        assert_eq!(ext.risk_level, RiskLevel::Medium);
        assert_eq!(ext.biofouling_index_trend, TrendDirection::Increasing);
        assert_eq!(ext.normam401_compliance.status, ComplianceStatus::Warning);
        assert_eq!(ext.normam401_compliance.days_until_violation, Some(14));
        assert_eq!(ext.normam401_compliance.inspection_due, now() + Duration::days(90));
        assert_eq!(ext.optimal_cleaning_date, now() + Duration::days(15));
        assert_eq!(ext.energy_impact.current_fuel_increase, 825.0);
        assert_eq!(ext.energy_impact.current_cost_increase, 4785.0);
        assert_eq!(ext.energy_impact.projected_fuel_increase.len(), 3);
    }

    #[test]
    fn test_extended_prediction_at_limit() {
        let config = ModelConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let ext = extended_prediction("v003", BiofoulingIndex::clamped(98.0), now(), &mut rng, &config);
        assert_eq!(ext.normam401_compliance.status, ComplianceStatus::NonCompliant);
        assert_eq!(ext.normam401_compliance.days_until_violation, None);
        assert_eq!(ext.risk_level, RiskLevel::Critical);
        assert!(ext.predictions.iter().all(|p| p.biofouling_index.value() <= 100.0));
        assert_eq!(ext.predictions[2].recommended_action, RecommendedAction::UrgentCleaning);
    }

    #[test]
    fn test_clean_hull_trend() {
        let config = ModelConfig::default();
        let ext = extended_prediction("v001", BiofoulingIndex::ZERO, now(), &mut StepRng::new(0, 0), &config);
        assert_eq!(ext.biofouling_index_trend, TrendDirection::Decreasing);
        assert_eq!(ext.risk_level, RiskLevel::Low);
        assert_eq!(ext.predictions[2].recommended_action, RecommendedAction::ContinuousMonitoring);
    }
}
