//! Synthetic hull sensor readings
//!
//! Readings are derived from the days since the last cleaning plus bounded
//! uniform noise. The noise source is injected so fleet runs are
//! reproducible and tests can pin it to zero with `StepRng::new(0, 0)`.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::defaults::{
    FOULING_RATE_PERIOD_DAYS, HULL_PRESSURE_BASE_PA, HULL_PRESSURE_NOISE_PA, SALINITY_BASE_PSU,
    SALINITY_NOISE_PSU, SPEED_BASE_KN, SPEED_NOISE_KN, WATER_TEMP_BASE_C, WATER_TEMP_NOISE_C,
};
use crate::config::{EconomicsConfig, SensorConfig};
use crate::physics_engine::{percent_delta, round_to};
use crate::types::{SensorReading, MAX_FOULING_LEVEL};

/// Uniform sample in `[0, span)`. A zero span yields exactly 0.
fn uniform<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    rng.gen::<f64>() * span
}

/// Deterministic RNG for one vessel within a seeded fleet run.
///
/// FNV-1a over the vessel id, mixed with the fleet seed, so the same vessel
/// gets the same stream regardless of fan-out order.
pub fn vessel_rng(fleet_seed: u64, vessel_id: &str) -> StdRng {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    let hash = vessel_id.bytes().fold(FNV_OFFSET, |acc, b| {
        (acc ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    });
    StdRng::seed_from_u64(hash ^ fleet_seed)
}

/// Builds `SensorReading`s from the cleaning age of a hull
#[derive(Debug, Clone, Copy)]
pub struct SensorSynthesizer {
    sensors: SensorConfig,
    fuel_baseline_lh: f64,
}

impl SensorSynthesizer {
    pub fn new(sensors: &SensorConfig, economics: &EconomicsConfig) -> Self {
        Self {
            sensors: *sensors,
            fuel_baseline_lh: economics.daily_fuel_baseline_lh,
        }
    }

    /// Noise-free fouling level after `days` without cleaning
    pub fn base_fouling_level(&self, days: u32) -> f64 {
        let level = f64::from(days) / FOULING_RATE_PERIOD_DAYS * self.sensors.fouling_per_30_days;
        level.min(MAX_FOULING_LEVEL)
    }

    /// One instantaneous reading
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        vessel_id: &str,
        days_since_cleaning: u32,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> SensorReading {
        let cfg = &self.sensors;

        let fouling = (self.base_fouling_level(days_since_cleaning)
            + uniform(rng, cfg.max_fouling_noise))
        .min(MAX_FOULING_LEVEL);
        let drag = cfg.clean_drag + (fouling / MAX_FOULING_LEVEL) * cfg.drag_span;
        let drag_increase = percent_delta(drag, cfg.clean_drag);
        let fuel = self.fuel_baseline_lh * (1.0 + drag_increase / 100.0);

        let hull_pressure = HULL_PRESSURE_BASE_PA + uniform(rng, HULL_PRESSURE_NOISE_PA);
        let speed = SPEED_BASE_KN + uniform(rng, SPEED_NOISE_KN);
        let water_temperature = WATER_TEMP_BASE_C + uniform(rng, WATER_TEMP_NOISE_C);
        let salinity = SALINITY_BASE_PSU + uniform(rng, SALINITY_NOISE_PSU);

        debug!(
            vessel = %vessel_id,
            days = days_since_cleaning,
            fouling,
            drag_increase,
            "Synthesized sensor reading"
        );

        SensorReading {
            vessel_id: vessel_id.to_string(),
            timestamp: now,
            drag_coefficient: round_to(drag, 3),
            hull_pressure: round_to(hull_pressure, 2),
            speed: round_to(speed, 2),
            fuel_consumption: round_to(fuel, 2),
            water_temperature: round_to(water_temperature, 2),
            salinity: round_to(salinity, 2),
            fouling_level: round_to(fouling, 2),
            drag_increase: round_to(drag_increase, 2),
        }
    }

    /// `window_days + 1` daily readings, oldest first, ending at `now`
    pub fn history<R: Rng + ?Sized>(
        &self,
        vessel_id: &str,
        days_since_cleaning: u32,
        window_days: u32,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<SensorReading> {
        (0..=window_days)
            .rev()
            .map(|offset| {
                let days = days_since_cleaning.saturating_sub(offset);
                let at = now - Duration::days(i64::from(offset));
                self.synthesize(vessel_id, days, at, rng)
            })
            .collect()
    }
}
