//! Physics Engine Module
//!
//! Deterministic hull performance calculations. No learned parameters:
//! the biofouling index is inferred from the gap between a clean-hull
//! baseline and measured performance.
//!
//! ## Functions
//! - `interpolate_power_curve()` - clean-hull expectation at the current RPM
//! - `environmental_factors()` - sea-state adjustment of the baseline
//! - `power_from_torque()` / `estimate_drag()` - actual hull
//! - `DigitalTwinEngine::compute_twin()` - full ideal-vs-actual comparison
//! - `generate_virtual_sensors()` - drag, fouling and efficiency sensors

pub mod hydrodynamics;
pub mod metrics;
pub mod virtual_sensors;

pub use hydrodynamics::{
    environmental_factors, estimate_drag, interpolate_power_curve, power_from_torque,
    EnvironmentalFactors,
};
pub use metrics::{percent_delta, percent_shortfall, round_to};
pub use virtual_sensors::generate_virtual_sensors;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::TwinConfig;
use crate::error::Result;
use crate::types::{
    ActualHull, BiofoulingIndex, DigitalTwin, IdealHull, OperationalData, PerformanceDegradation,
    PowerCurve,
};

/// Ideal-vs-actual hull comparison
#[derive(Debug, Clone)]
pub struct DigitalTwinEngine<'a> {
    config: &'a TwinConfig,
}

impl<'a> DigitalTwinEngine<'a> {
    pub fn new(config: &'a TwinConfig) -> Self {
        Self { config }
    }

    /// Build the twin for one operational frame.
    ///
    /// The frame is validated first. `history` is part of the calibration
    /// contract but does not yet change the numbers.
    pub fn compute_twin(
        &self,
        vessel_id: &str,
        operational: &OperationalData,
        power_curve: &PowerCurve,
        history: &[OperationalData],
        now: DateTime<Utc>,
    ) -> Result<DigitalTwin> {
        operational.validate()?;
        let cfg = self.config;

        // Clean hull at this RPM and sea state
        let curve_point = interpolate_power_curve(power_curve, operational.rpm);
        let env = environmental_factors(operational, cfg);
        let ideal = IdealHull {
            drag_coefficient: cfg.clean_hull_drag,
            expected_speed: curve_point.expected_speed * env.speed_factor,
            expected_fuel_consumption: curve_point.expected_fuel_rate * env.fuel_factor,
            expected_power: curve_point.expected_power,
            power_curve: power_curve.clone(),
        };

        // Measured hull
        let measured_power = power_from_torque(operational.rpm, operational.torque);
        let actual = ActualHull {
            drag_coefficient: estimate_drag(measured_power, operational.speed, cfg),
            actual_speed: operational.speed,
            actual_fuel_consumption: operational.fuel_consumption,
            measured_power,
        };

        let speed_delta = percent_shortfall(actual.actual_speed, ideal.expected_speed);
        let fuel_delta = percent_delta(actual.actual_fuel_consumption, ideal.expected_fuel_consumption);
        let drag_delta = percent_delta(actual.drag_coefficient, ideal.drag_coefficient);
        let power_delta = percent_delta(actual.measured_power, ideal.expected_power);

        let raw_index = speed_delta * cfg.speed_weight
            + fuel_delta * cfg.fuel_weight
            + drag_delta * cfg.drag_weight;
        let biofouling_index = BiofoulingIndex::clamped(round_to(
            BiofoulingIndex::clamped(raw_index).value(),
            1,
        ));

        let performance_degradation = PerformanceDegradation {
            speed_loss: round_to(speed_delta, 2),
            fuel_increase: round_to(fuel_delta, 2),
            power_increase: round_to(power_delta, 2),
            efficiency_loss: round_to(efficiency_loss(&ideal, &actual), 2),
        };

        debug!(
            vessel = %vessel_id,
            rpm = operational.rpm,
            speed_factor = env.speed_factor,
            fuel_factor = env.fuel_factor,
            raw_index,
            index = biofouling_index.value(),
            history_frames = history.len(),
            "Digital twin computed"
        );

        Ok(DigitalTwin {
            vessel_id: vessel_id.to_string(),
            ideal_hull: ideal,
            actual_hull: actual,
            biofouling_index,
            performance_degradation,
            last_calibration: now,
        })
    }
}

/// Loss of speed-per-fuel efficiency against the clean hull (%)
fn efficiency_loss(ideal: &IdealHull, actual: &ActualHull) -> f64 {
    let efficiency = |speed: f64, fuel: f64| if fuel > 0.0 { speed / fuel * 100.0 } else { 0.0 };
    let ideal_eff = efficiency(ideal.expected_speed, ideal.expected_fuel_consumption);
    let actual_eff = efficiency(actual.actual_speed, actual.actual_fuel_consumption);
    percent_shortfall(actual_eff, ideal_eff)
}
