//! Pipeline Regression Tests
//!
//! Runs the demonstration fleet through the full library at a fixed clock
//! and seed. Asserts on the reference scenario numbers, cross-report
//! consistency (the same vessel reads the same everywhere), ordering, and
//! data integrity (no NaN in any serialized output).

use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::mock::StepRng;

use hullguard::analytics::{calculate_roi, generate_alerts};
use hullguard::compliance::{evaluate_index, evaluate_level};
use hullguard::config::defaults::{DEFAULT_FLEET_SEED, NEVER_REACHES_TARGET_DAYS};
use hullguard::fleet::find_vessel;
use hullguard::ml_engine::extended_prediction;
use hullguard::physics_engine::interpolate_power_curve;
use hullguard::sample::{demo_cleaning_log, demo_fleet, demo_operational, demo_power_curves};
use hullguard::types::{
    BiofoulingIndex, ComplianceStatus, FoulingLevel, ModelInput, PowerCurve, PowerCurvePoint,
    ReportPeriod, RiskLevel, RouteType, VesselType,
};
use hullguard::{BiofoulingPredictor, FleetAggregator, HullError, ModelConfig, VesselPipeline};

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 28, 12, 0, 0).unwrap()
}

/// Recursively check a JSON tree for non-finite numbers.
/// serde_json writes NaN and Inf as null, so a null anywhere is a failure.
fn assert_no_nulls(value: &serde_json::Value, path: &str) {
    match value {
        serde_json::Value::Null => panic!("null (NaN/Inf) at {path}"),
        serde_json::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                assert_no_nulls(item, &format!("{path}[{i}]"));
            }
        }
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                assert_no_nulls(v, &format!("{path}.{k}"));
            }
        }
        _ => {}
    }
}

// ============================================================================
// Reference numbers
// ============================================================================

#[test]
fn reference_growth_scenario() {
    let config = ModelConfig::default();
    let predictor = BiofoulingPredictor::new(&config);
    let out = predictor
        .predict(&ModelInput {
            days_since_cleaning: 90,
            average_speed: 12.0,
            average_water_temp: 24.0,
            average_salinity: 35.0,
            route_type: RouteType::Coastal,
            seasonal_factor: 1.0,
        })
        .unwrap();

    assert_eq!(out.growth_rate, 0.0287);
    assert_eq!(out.predicted_fouling_level.value(), 2.58);
    assert_eq!(out.confidence, 0.825);
    assert_eq!(out.predicted_fouling_level.risk(), RiskLevel::Medium);
}

#[test]
fn power_curve_midpoint() {
    let curve = PowerCurve::new(vec![
        PowerCurvePoint { rpm: 60.0, expected_power: 8500.0, expected_speed: 12.0, expected_fuel_rate: 1450.0 },
        PowerCurvePoint { rpm: 70.0, expected_power: 11200.0, expected_speed: 13.5, expected_fuel_rate: 1680.0 },
    ])
    .unwrap();
    let p = interpolate_power_curve(&curve, 65.0);
    assert!((p.expected_power - 9850.0).abs() < 1e-9);
    assert!((p.expected_speed - 12.75).abs() < 1e-9);
    assert!((p.expected_fuel_rate - 1565.0).abs() < 1e-9);
}

#[test]
fn zero_growth_never_divides() {
    let config = ModelConfig::default();
    let point = BiofoulingPredictor::new(&config)
        .calculate_optimal_cleaning_point(FoulingLevel::clamped(0.5), 0.0, 120_000.0, 4640.0)
        .unwrap();
    assert_eq!(point.days_until_optimal, NEVER_REACHES_TARGET_DAYS);
    assert!(!point.reaches_target);
}

#[test]
fn scales_convert_both_ways() {
    let level = FoulingLevel::clamped(3.1);
    assert!((level.to_index().value() - 62.0).abs() < 1e-9);
    assert!((BiofoulingIndex::clamped(62.0).to_level().value() - 3.1).abs() < 1e-9);

    let config = ModelConfig::default();
    // Same hull, both regimes
    assert_eq!(evaluate_level(level, &config.compliance.level).status, ComplianceStatus::Compliant);
    assert_eq!(
        evaluate_index(level.to_index(), &config.compliance.index).status,
        ComplianceStatus::NonCompliant
    );
}

// ============================================================================
// Fleet run
// ============================================================================

#[test]
fn fleet_views_agree_on_each_vessel() {
    let config = ModelConfig::default();
    let fleet = demo_fleet();
    let aggregator = FleetAggregator::new(&config, DEFAULT_FLEET_SEED);

    let overview = aggregator.fleet_overview(&fleet, clock()).unwrap();
    let comparison = aggregator.compare_strategies(&fleet, clock()).unwrap();

    for (i, vessel) in fleet.iter().enumerate() {
        let analysis = aggregator.pipeline().analyze(vessel, clock()).unwrap();
        let entry = &overview.fleet[i];

        assert_eq!(entry.vessel.id, vessel.id);
        assert_eq!(entry.current_sensor, analysis.sensor);
        assert_eq!(entry.prediction.current_level, analysis.forecast.prediction.current_level);
        assert_eq!(entry.prediction.days_until_cleaning, analysis.forecast.cleaning.days_until_optimal);

        // Strategy comparison plans from the model's predicted level
        let model_point = aggregator
            .pipeline()
            .predictor()
            .calculate_optimal_cleaning_point(
                analysis.forecast.model.predicted_fouling_level,
                analysis.forecast.model.growth_rate,
                config.economics.cleaning_cost_brl,
                config.economics.fuel_cost_per_day(),
            )
            .unwrap();
        let plan = &comparison.comparisons[i].ml_optimized;
        assert_eq!(plan.days_until_cleaning, model_point.days_until_optimal);
        assert_eq!(plan.estimated_value, model_point.projected_savings);
        assert_eq!(
            entry.prediction.risk_level,
            FoulingLevel::clamped(analysis.sensor.fouling_level).risk()
        );
    }
}

#[test]
fn fleet_run_is_reproducible_and_finite() {
    let config = ModelConfig::default();
    let fleet = demo_fleet();

    let run = |seed: u64| {
        let aggregator = FleetAggregator::new(&config, seed);
        serde_json::json!({
            "overview": aggregator.fleet_overview(&fleet, clock()).unwrap(),
            "strategies": aggregator.compare_strategies(&fleet, clock()).unwrap(),
            "performance": aggregator
                .performance_metrics(&fleet, ReportPeriod::Monthly, clock())
                .unwrap(),
        })
    };

    let first = run(DEFAULT_FLEET_SEED);
    assert_eq!(first, run(DEFAULT_FLEET_SEED));
    assert_no_nulls(&first["overview"], "overview");
    assert_no_nulls(&first["strategies"], "strategies");
    assert_no_nulls(&first["performance"], "performance");
}

#[test]
fn river_vessel_grows_fastest() {
    let config = ModelConfig::default();
    let pipeline = VesselPipeline::new(&config, DEFAULT_FLEET_SEED);
    let fleet = demo_fleet();

    let river = pipeline.analyze(find_vessel(&fleet, "v003").unwrap(), clock()).unwrap();
    let coastal = pipeline.analyze(find_vessel(&fleet, "v001").unwrap(), clock()).unwrap();

    assert_eq!(river.forecast.input.route_type, RouteType::River);
    assert_eq!(river.forecast.model.risk_factors.route, 1.5);
    assert_eq!(coastal.forecast.input.route_type, RouteType::Coastal);
    assert_eq!(river.days_since_cleaning, 161);
}

#[test]
fn alerts_follow_readings() {
    let config = ModelConfig::default();
    let fleet = demo_fleet();
    let pipeline = VesselPipeline::new(&config, DEFAULT_FLEET_SEED);

    let readings: HashMap<_, _> = fleet
        .iter()
        .map(|v| (v.id.clone(), pipeline.reading(v, clock())))
        .collect();
    let alerts = generate_alerts(&fleet, &readings, &config, clock());

    assert!(alerts.windows(2).all(|w| w[0].priority <= w[1].priority));
    for alert in &alerts {
        let reading = &readings[&alert.vessel_id];
        match alert.priority {
            1 => assert!(reading.fouling_level >= 4.5),
            2 => assert!(reading.fouling_level >= 3.5),
            3 => assert!(reading.drag_increase > 50.0),
            p => panic!("unexpected priority {p}"),
        }
    }
}

// ============================================================================
// Digital twin
// ============================================================================

#[test]
fn twin_for_every_registered_class() {
    let config = ModelConfig::default();
    let pipeline = VesselPipeline::new(&config, DEFAULT_FLEET_SEED);
    let curves = demo_power_curves().unwrap();

    for vessel in demo_fleet() {
        let frame = demo_operational(&vessel.id, clock());
        let out = pipeline.twin(&vessel, &frame, &[], &curves, clock()).unwrap();
        let index = out.twin.biofouling_index.value();
        assert!((0.0..=100.0).contains(&index));
        assert_eq!(out.twin.last_calibration, clock());
        assert_eq!(out.extended.optimal_cleaning_date, clock() + Duration::days(15));
        assert_no_nulls(&serde_json::to_value(&out.twin).unwrap(), &vessel.id);
        assert_no_nulls(&serde_json::to_value(&out.virtual_sensors).unwrap(), &vessel.id);
    }
}

#[test]
fn missing_power_curve_is_reported() {
    let config = ModelConfig::default();
    let pipeline = VesselPipeline::new(&config, DEFAULT_FLEET_SEED);
    let mut vessel = demo_fleet()[1].clone();
    vessel.vessel_type = VesselType::Container;

    let err = pipeline
        .twin(&vessel, &demo_operational(&vessel.id, clock()), &[], &demo_power_curves().unwrap(), clock())
        .unwrap_err();
    assert!(err.is_missing_reference());
    assert!(matches!(find_vessel(&demo_fleet(), "v404"), Err(HullError::VesselNotFound(_))));
}

#[test]
fn extended_prediction_series() {
    let config = ModelConfig::default();
    let ext = extended_prediction(
        "v002",
        BiofoulingIndex::clamped(40.0),
        clock(),
        &mut StepRng::new(0, 0),
        &config,
    );
    let horizons: Vec<u32> = ext.predictions.iter().map(|p| p.horizon_days).collect();
    assert_eq!(horizons, vec![7, 15, 30]);
    assert!(ext
        .predictions
        .windows(2)
        .all(|w| w[0].biofouling_index <= w[1].biofouling_index && w[0].confidence > w[1].confidence));
    assert_eq!(ext.risk_level, RiskLevel::Low);
}

// ============================================================================
// Reference data
// ============================================================================

#[test]
fn cleaning_log_newest_first() {
    let mut log = demo_cleaning_log();
    let mut extra = log.for_vessel("v001")[0].clone();
    extra.id = "c004".to_string();
    extra.date = clock();
    log.append(extra);

    let records = log.for_vessel("v001");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "c004");
    assert!(log.for_vessel("v004").is_empty());
}

#[test]
fn roi_of_the_programme() {
    let roi = calculate_roi(500_000.0, 20_000.0, 80_000.0, 24).unwrap();
    assert_eq!(roi.payback_period, Some(8.3));
    assert!(matches!(calculate_roi(-5.0, 0.0, 0.0, 1), Err(HullError::InvalidInput { .. })));
}
