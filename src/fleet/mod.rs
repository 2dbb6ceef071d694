//! Fleet Aggregation
//!
//! Fans the per-vessel pipeline out across the fleet with rayon and folds
//! the results into fleet views:
//!
//! - `fleet_overview`: latest reading, prediction summary and fleet KPIs
//! - `compare_strategies`: fixed-interval vs predictive cleaning
//! - `performance_metrics`: programme savings against the fixed interval
//!
//! Every vessel draws from its own seeded noise stream, so results do not
//! depend on scheduling and come back in input order.

pub mod registry;

pub use registry::{find_vessel, PowerCurveTable};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use statrs::statistics::Statistics;
use tracing::info;

use crate::compliance::evaluate_level;
use crate::config::ModelConfig;
use crate::error::Result;
use crate::ml_engine::VesselForecast;
use crate::physics_engine::metrics::{days_after, round_to};
use crate::pipeline::VesselPipeline;
use crate::types::{
    CleaningApproach, CleaningPoint, FleetComparison, FleetKpis, FleetOverview,
    FleetStrategySummary, PerformanceMetrics, PredictionSummary, ReportPeriod, RiskLevel,
    SensorReading, StrategyComparison, StrategyDifference, StrategyPlan, TimingAdvice, Vessel,
    VesselOverview,
};

/// Fixed-interval plan: clean every `scheduled_interval_days`.
///
/// Waste is the fuel value forgone by cleaning a hull that is younger than
/// the interval.
pub fn scheduled_plan(days_since_cleaning: u32, now: DateTime<Utc>, config: &ModelConfig) -> StrategyPlan {
    let interval = config.fleet.scheduled_interval_days.max(1);
    let days_until = interval - days_since_cleaning % interval;
    let waste = if days_since_cleaning < interval {
        f64::from(interval - days_since_cleaning)
            * config.economics.fuel_cost_per_day()
            * config.economics.scheduled_waste_rate
    } else {
        0.0
    };

    StrategyPlan {
        approach: CleaningApproach::FixedInterval,
        days_until_cleaning: days_until,
        next_cleaning_date: days_after(now, days_until),
        estimated_value: round_to(waste, 2),
    }
}

/// Predictive plan from the optimal cleaning point
pub fn predictive_plan(cleaning: &CleaningPoint, now: DateTime<Utc>) -> StrategyPlan {
    StrategyPlan {
        approach: CleaningApproach::Predictive,
        days_until_cleaning: cleaning.days_until_optimal,
        next_cleaning_date: days_after(now, cleaning.days_until_optimal),
        estimated_value: cleaning.projected_savings,
    }
}

/// Side-by-side plans for one vessel
pub fn compare_vessel(
    vessel: &Vessel,
    days_since_cleaning: u32,
    cleaning: &CleaningPoint,
    now: DateTime<Utc>,
    config: &ModelConfig,
) -> StrategyComparison {
    let scheduled = scheduled_plan(days_since_cleaning, now, config);
    let ml_optimized = predictive_plan(cleaning, now);

    let days_difference =
        i64::from(ml_optimized.days_until_cleaning) - i64::from(scheduled.days_until_cleaning);
    let recommendation = if days_difference > 0 {
        TimingAdvice::Postpone
    } else {
        TimingAdvice::Advance
    };

    StrategyComparison {
        vessel_id: vessel.id.clone(),
        vessel_name: vessel.name.clone(),
        scheduled,
        ml_optimized,
        difference: StrategyDifference {
            days_difference,
            financial_impact: round_to(ml_optimized.estimated_value - scheduled.estimated_value, 2),
            recommendation,
        },
    }
}

/// Fleet-wide views over one seeded run
#[derive(Debug, Clone)]
pub struct FleetAggregator<'a> {
    pipeline: VesselPipeline<'a>,
}

impl<'a> FleetAggregator<'a> {
    pub fn new(config: &'a ModelConfig, seed: u64) -> Self {
        Self {
            pipeline: VesselPipeline::new(config, seed),
        }
    }

    pub fn pipeline(&self) -> &VesselPipeline<'a> {
        &self.pipeline
    }

    /// Reading and forecast per vessel, in fleet order
    fn forecasts(&self, fleet: &[Vessel], now: DateTime<Utc>) -> Result<Vec<(SensorReading, VesselForecast)>> {
        fleet
            .par_iter()
            .map(|vessel| self.pipeline.forecast(vessel, now))
            .collect()
    }

    pub fn fleet_overview(&self, fleet: &[Vessel], now: DateTime<Utc>) -> Result<FleetOverview> {
        let overviews: Vec<VesselOverview> = fleet
            .iter()
            .zip(self.forecasts(fleet, now)?)
            .map(|(vessel, (sensor, forecast))| VesselOverview {
                vessel: vessel.clone(),
                prediction: PredictionSummary {
                    current_level: forecast.prediction.current_level,
                    risk_level: forecast.prediction.risk_level,
                    optimal_cleaning_date: forecast.prediction.optimal_cleaning_date,
                    days_until_cleaning: forecast.cleaning.days_until_optimal,
                },
                current_sensor: sensor,
            })
            .collect();

        let kpis = fleet_kpis(fleet, &overviews);
        info!(
            vessels = kpis.total_vessels,
            critical = kpis.critical_vessels,
            high_risk = kpis.high_risk_vessels,
            average_level = kpis.average_fouling_level,
            "Fleet overview computed"
        );

        Ok(FleetOverview {
            fleet: overviews,
            kpis,
        })
    }

    /// Fixed interval against the model's own optimal cleaning point.
    ///
    /// The predictive plan starts from the level the model predicts for the
    /// hull age, not from the latest reading.
    pub fn compare_strategies(&self, fleet: &[Vessel], now: DateTime<Utc>) -> Result<FleetComparison> {
        let config = self.pipeline.config();
        let economics = &config.economics;
        let predictor = self.pipeline.predictor();
        let comparisons: Vec<StrategyComparison> = fleet
            .iter()
            .zip(self.forecasts(fleet, now)?)
            .map(|(vessel, (_, forecast))| {
                let cleaning = predictor.calculate_optimal_cleaning_point(
                    forecast.model.predicted_fouling_level,
                    forecast.model.growth_rate,
                    economics.cleaning_cost_brl,
                    economics.fuel_cost_per_day(),
                )?;
                Ok(compare_vessel(vessel, forecast.input.days_since_cleaning, &cleaning, now, config))
            })
            .collect::<Result<_>>()?;

        let fleet_summary = strategy_summary(&comparisons);
        info!(
            vessels = fleet_summary.total_vessels,
            impact = fleet_summary.total_financial_impact,
            "Cleaning strategies compared"
        );

        Ok(FleetComparison {
            comparisons,
            fleet_summary,
        })
    }

    /// Savings of cleaning later than the fixed interval, summed over the fleet
    pub fn performance_metrics(
        &self,
        fleet: &[Vessel],
        period: ReportPeriod,
        now: DateTime<Utc>,
    ) -> Result<PerformanceMetrics> {
        let config = self.pipeline.config();
        let economics = &config.economics;
        let interval = config.fleet.scheduled_interval_days;

        let readings: Vec<SensorReading> = fleet
            .par_iter()
            .map(|vessel| self.pipeline.reading(vessel, now))
            .collect();

        let optimized_days: Vec<u32> = fleet
            .iter()
            .map(|v| v.days_since_cleaning(now).saturating_sub(interval))
            .collect();
        let total_days: f64 = optimized_days.iter().map(|d| f64::from(*d)).sum();

        let fuel_saved = total_days * economics.optimized_fuel_liters_per_day * economics.drag_cost_savings_rate;
        let compliant = readings
            .iter()
            .filter(|r| !evaluate_level(r.level(), &config.compliance.level).is_violation())
            .count();
        let compliance_rate = if fleet.is_empty() {
            100.0
        } else {
            compliant as f64 / fleet.len() as f64 * 100.0
        };

        Ok(PerformanceMetrics {
            period,
            fuel_saved: round_to(fuel_saved, 2),
            cost_saved: round_to(fuel_saved * economics.fuel_price_per_liter, 2),
            ghg_reduced: round_to(fuel_saved * economics.ghg_tonnes_per_liter(), 2),
            cleanings_optimized: optimized_days.iter().filter(|d| **d > 0).count(),
            prediction_accuracy: round_to(self.pipeline.predictor().metadata().accuracy * 100.0, 1),
            vessels_monitored: fleet.len(),
            compliance_rate: round_to(compliance_rate, 1),
        })
    }
}

fn fleet_kpis(fleet: &[Vessel], overviews: &[VesselOverview]) -> FleetKpis {
    let levels: Vec<f64> = overviews.iter().map(|o| o.current_sensor.fouling_level).collect();
    let (average, std_dev) = match levels.len() {
        0 => (0.0, 0.0),
        1 => (levels[0], 0.0),
        _ => ((&levels).mean(), (&levels).std_dev()),
    };
    let count_risk = |risk: RiskLevel| overviews.iter().filter(|o| o.prediction.risk_level == risk).count();

    FleetKpis {
        total_vessels: fleet.len(),
        operating_vessels: fleet.iter().filter(|v| v.is_operating()).count(),
        critical_vessels: count_risk(RiskLevel::Critical),
        high_risk_vessels: count_risk(RiskLevel::High),
        average_fouling_level: round_to(average, 2),
        fouling_std_dev: round_to(std_dev, 2),
        total_drag_increase: round_to(overviews.iter().map(|o| o.current_sensor.drag_increase).sum(), 2),
    }
}

fn strategy_summary(comparisons: &[StrategyComparison]) -> FleetStrategySummary {
    let total_savings: f64 = comparisons.iter().map(|c| c.ml_optimized.estimated_value).sum();
    let total_waste: f64 = comparisons.iter().map(|c| c.scheduled.estimated_value).sum();
    let total_financial_impact = total_savings - total_waste;
    let average_savings_per_vessel = if comparisons.is_empty() {
        0.0
    } else {
        total_savings / comparisons.len() as f64
    };

    FleetStrategySummary {
        total_vessels: comparisons.len(),
        total_financial_impact: round_to(total_financial_impact, 2),
        average_savings_per_vessel: round_to(average_savings_per_vessel, 2),
        recommended_approach: if total_financial_impact >= 0.0 {
            CleaningApproach::Predictive
        } else {
            CleaningApproach::FixedInterval
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{DEFAULT_FLEET_SEED, NEVER_REACHES_TARGET_DAYS};
    use crate::ml_engine::BiofoulingPredictor;
    use crate::types::FoulingLevel;
    use crate::sample::demo_fleet;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_scheduled_plan() {
        let config = ModelConfig::default();

        let plan = scheduled_plan(100, now(), &config);
        assert_eq!(plan.days_until_cleaning, 80);
        assert_eq!(plan.estimated_value, 0.0);
        assert_eq!(plan.next_cleaning_date, now() + Duration::days(80));

        // 30 days early × 4640 R$/day × 5 %
        let plan = scheduled_plan(60, now(), &config);
        assert_eq!(plan.days_until_cleaning, 30);
        assert_eq!(plan.estimated_value, 6960.0);

        let plan = scheduled_plan(0, now(), &config);
        assert_eq!(plan.days_until_cleaning, 90);
    }

    #[test]
    fn test_compare_vessel() {
        let config = ModelConfig::default();
        let vessel = &demo_fleet()[0];
        let cleaning = CleaningPoint {
            days_until_optimal: 120,
            projected_savings: 30_000.0,
            reaches_target: true,
        };
        let c = compare_vessel(vessel, 100, &cleaning, now(), &config);
        assert_eq!(c.difference.days_difference, 40);
        assert_eq!(c.difference.recommendation, TimingAdvice::Postpone);
        assert_eq!(c.difference.financial_impact, 30_000.0);
        assert_eq!(c.ml_optimized.approach, CleaningApproach::Predictive);

        let early = CleaningPoint { days_until_optimal: 10, ..cleaning };
        let c = compare_vessel(vessel, 100, &early, now(), &config);
        assert_eq!(c.difference.days_difference, -70);
        assert_eq!(c.difference.recommendation, TimingAdvice::Advance);
    }

    #[test]
    fn test_overview_kpis() {
        let config = ModelConfig::default();
        let fleet = demo_fleet();
        let overview = FleetAggregator::new(&config, DEFAULT_FLEET_SEED)
            .fleet_overview(&fleet, now())
            .unwrap();

        assert_eq!(overview.fleet.len(), 4);
        let ids: Vec<_> = overview.fleet.iter().map(|o| o.vessel.id.as_str()).collect();
        assert_eq!(ids, vec!["v001", "v002", "v003", "v004"]);

        let kpis = overview.kpis;
        assert_eq!(kpis.total_vessels, 4);
        assert_eq!(kpis.operating_vessels, 3);
        let levels: Vec<f64> = overview.fleet.iter().map(|o| o.current_sensor.fouling_level).collect();
        let mean = levels.iter().sum::<f64>() / 4.0;
        assert!((kpis.average_fouling_level - mean).abs() <= 0.005 + 1e-9);
        assert!(kpis.fouling_std_dev > 0.0);
    }

    #[test]
    fn test_overview_is_seed_stable() {
        let config = ModelConfig::default();
        let fleet = demo_fleet();
        let a = FleetAggregator::new(&config, 9).fleet_overview(&fleet, now()).unwrap();
        let b = FleetAggregator::new(&config, 9).fleet_overview(&fleet, now()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_fleet() {
        let config = ModelConfig::default();
        let agg = FleetAggregator::new(&config, 1);
        let overview = agg.fleet_overview(&[], now()).unwrap();
        assert_eq!(overview.kpis, FleetKpis::default());
        let cmp = agg.compare_strategies(&[], now()).unwrap();
        assert_eq!(cmp.fleet_summary.average_savings_per_vessel, 0.0);
        let metrics = agg.performance_metrics(&[], ReportPeriod::Monthly, now()).unwrap();
        assert_eq!(metrics.compliance_rate, 100.0);
    }

    #[test]
    fn test_performance_metrics() {
        let config = ModelConfig::default();
        let fleet = demo_fleet();
        let metrics = FleetAggregator::new(&config, DEFAULT_FLEET_SEED)
            .performance_metrics(&fleet, ReportPeriod::Weekly, now())
            .unwrap();

        // v001 105 d and v003 161 d exceed the 90-day interval: 15 + 71 days
        assert_eq!(metrics.cleanings_optimized, 2);
        assert_eq!(metrics.fuel_saved, 1290.0);
        assert_eq!(metrics.cost_saved, 7482.0);
        assert_eq!(metrics.ghg_reduced, 3.35);
        assert_eq!(metrics.prediction_accuracy, 87.5);
        assert_eq!(metrics.vessels_monitored, 4);
        assert_eq!(metrics.compliance_rate, 100.0);
        assert_eq!(metrics.period, ReportPeriod::Weekly);
    }

    #[test]
    fn test_compare_strategies_order() {
        let config = ModelConfig::default();
        let fleet = demo_fleet();
        let cmp = FleetAggregator::new(&config, DEFAULT_FLEET_SEED)
            .compare_strategies(&fleet, now())
            .unwrap();
        assert_eq!(cmp.comparisons.len(), 4);
        assert_eq!(cmp.comparisons[1].vessel_id, "v002");
        // v002 is 58 days out of dock
        assert_eq!(cmp.comparisons[1].scheduled.days_until_cleaning, 32);
        assert_eq!(cmp.fleet_summary.total_vessels, 4);
    }

    #[test]
    fn test_compare_strategies_uses_model_level() {
        let config = ModelConfig::default();
        let fleet = demo_fleet();
        let agg = FleetAggregator::new(&config, DEFAULT_FLEET_SEED);
        let cmp = agg.compare_strategies(&fleet, now()).unwrap();
        let (_, forecast) = agg.pipeline().forecast(&fleet[0], now()).unwrap();

        // v001: 105 days, coastal, southern summer -> 0.016 × 1.2 × 1.15 × 1.3 × 1.2
        assert_eq!(forecast.model.growth_rate, 0.0344);
        assert_eq!(forecast.model.predicted_fouling_level.value(), 3.62);

        // (3.8 - 3.62) / 0.0344 = 5.2 days; 5 × 4640 × 0.15 - 120000
        let v001 = &cmp.comparisons[0];
        assert_eq!(v001.ml_optimized.days_until_cleaning, 5);
        assert_eq!(v001.ml_optimized.estimated_value, -116_520.0);
        assert_eq!(v001.scheduled.days_until_cleaning, 75);
        assert_eq!(v001.difference.days_difference, -70);
        assert_eq!(v001.difference.financial_impact, -116_520.0);
        assert_eq!(v001.difference.recommendation, TimingAdvice::Advance);
    }

    #[test]
    fn test_predictive_plan_with_vanishing_growth() {
        let config = ModelConfig::default();
        let point = BiofoulingPredictor::new(&config)
            .calculate_optimal_cleaning_point(FoulingLevel::clamped(1.0), 1e-9, 120_000.0, 4640.0)
            .unwrap();
        let plan = predictive_plan(&point, now());
        assert_eq!(plan.days_until_cleaning, NEVER_REACHES_TARGET_DAYS);
        assert_eq!(plan.next_cleaning_date, now() + Duration::days(999));
        assert_eq!(plan.estimated_value, -120_000.0);
    }
}
