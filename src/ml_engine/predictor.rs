//! Parametric biofouling growth model
//!
//! growth = base daily rate × temperature × salinity × route × season
//!
//! The multipliers are fixed bands, not learned weights. Confidence decays
//! linearly with hull age down to a floor.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::defaults::{
    MODEL_ACCURACY, MODEL_FEATURES, MODEL_TRAINED_ON, MODEL_TRAINING_RECORDS, MODEL_VERSION,
    NEVER_REACHES_TARGET_DAYS,
};
use crate::config::ModelConfig;
use crate::error::{ensure_finite, ensure_non_negative, ensure_range, Result};
use crate::physics_engine::metrics::{floor_days, round_to};
use crate::types::{
    CleaningPoint, FoulingLevel, ModelInput, ModelMetadata, ModelOutput, RiskFactors, RouteType,
    MAX_FOULING_LEVEL, SALINITY_RANGE_PSU, WATER_TEMPERATURE_RANGE_C,
};

/// Growth multiplier bands
pub mod growth_factors {
    /// Optimal larval settlement, 20-28 °C
    pub const TEMP_OPTIMAL: f64 = 1.2;
    /// Cooler water, 15-20 °C
    pub const TEMP_COOL: f64 = 1.0;
    /// Warm water, 28-32 °C
    pub const TEMP_WARM: f64 = 1.1;
    /// Anything else
    pub const TEMP_HOSTILE: f64 = 0.8;

    /// Full seawater, 33-37 PSU
    pub const SALINITY_OPTIMAL: f64 = 1.15;
    /// Brackish, 30-33 PSU
    pub const SALINITY_BRACKISH: f64 = 1.0;
    /// Below 30 PSU
    pub const SALINITY_LOW: f64 = 0.7;
    /// Hypersaline
    pub const SALINITY_HIGH: f64 = 0.9;

    pub const ROUTE_COASTAL: f64 = 1.3;
    pub const ROUTE_RIVER: f64 = 1.5;
    pub const ROUTE_OCEANIC: f64 = 1.0;
}

use growth_factors::*;

pub fn temperature_factor(celsius: f64) -> f64 {
    if (20.0..=28.0).contains(&celsius) {
        TEMP_OPTIMAL
    } else if (15.0..20.0).contains(&celsius) {
        TEMP_COOL
    } else if celsius > 28.0 && celsius <= 32.0 {
        TEMP_WARM
    } else {
        TEMP_HOSTILE
    }
}

pub fn salinity_factor(psu: f64) -> f64 {
    if (33.0..=37.0).contains(&psu) {
        SALINITY_OPTIMAL
    } else if (30.0..33.0).contains(&psu) {
        SALINITY_BRACKISH
    } else if psu < 30.0 {
        SALINITY_LOW
    } else {
        SALINITY_HIGH
    }
}

pub fn route_factor(route: RouteType) -> f64 {
    match route {
        RouteType::Coastal => ROUTE_COASTAL,
        RouteType::River => ROUTE_RIVER,
        RouteType::Oceanic => ROUTE_OCEANIC,
    }
}

/// Growth predictor bound to one model configuration
#[derive(Debug, Clone)]
pub struct BiofoulingPredictor<'a> {
    config: &'a ModelConfig,
    metadata: ModelMetadata,
}

impl<'a> BiofoulingPredictor<'a> {
    pub fn new(config: &'a ModelConfig) -> Self {
        let (year, month, day) = MODEL_TRAINED_ON;
        let metadata = ModelMetadata {
            version: MODEL_VERSION.to_string(),
            accuracy: MODEL_ACCURACY,
            last_training_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
            training_data_size: MODEL_TRAINING_RECORDS,
            features: MODEL_FEATURES.iter().map(|f| (*f).to_string()).collect(),
        };
        Self { config, metadata }
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn config(&self) -> &'a ModelConfig {
        self.config
    }

    /// Fouling level, growth rate and confidence after `days_since_cleaning`
    pub fn predict(&self, input: &ModelInput) -> Result<ModelOutput> {
        ensure_non_negative("average_speed", input.average_speed)?;
        let (t_min, t_max) = WATER_TEMPERATURE_RANGE_C;
        ensure_range("average_water_temp", input.average_water_temp, t_min, t_max)?;
        let (s_min, s_max) = SALINITY_RANGE_PSU;
        ensure_range("average_salinity", input.average_salinity, s_min, s_max)?;
        ensure_non_negative("seasonal_factor", input.seasonal_factor)?;

        let cfg = &self.config.growth;
        let risk_factors = RiskFactors {
            temperature: temperature_factor(input.average_water_temp),
            salinity: salinity_factor(input.average_salinity),
            route: route_factor(input.route_type),
        };

        let growth_rate = cfg.base_daily_rate
            * risk_factors.temperature
            * risk_factors.salinity
            * risk_factors.route
            * input.seasonal_factor;

        let days = f64::from(input.days_since_cleaning);
        let level = (days * growth_rate).min(MAX_FOULING_LEVEL);
        let confidence = (cfg.confidence_ceiling
            - days / cfg.confidence_horizon_days * cfg.confidence_decay)
            .max(cfg.confidence_floor);

        Ok(ModelOutput {
            predicted_fouling_level: FoulingLevel::clamped(round_to(level, 2)),
            confidence: round_to(confidence, 3),
            growth_rate: round_to(growth_rate, 4),
            risk_factors,
        })
    }

    /// Days until the target level and the drag-cost savings of waiting.
    ///
    /// A hull already at or past the target should be cleaned now (0 days).
    /// Without positive growth the target is never reached: the day count is
    /// the `NEVER_REACHES_TARGET_DAYS` sentinel and the savings are the
    /// avoided cleaning cost, negated.
    pub fn calculate_optimal_cleaning_point(
        &self,
        current: FoulingLevel,
        growth_rate: f64,
        cost_per_cleaning: f64,
        fuel_cost_per_day: f64,
    ) -> Result<CleaningPoint> {
        ensure_finite("growth_rate", growth_rate)?;
        ensure_non_negative("cost_per_cleaning", cost_per_cleaning)?;
        ensure_non_negative("fuel_cost_per_day", fuel_cost_per_day)?;

        let target = self.config.growth.target_cleaning_level;
        let savings_rate = self.config.economics.drag_cost_savings_rate;
        let gap = target - current.value();

        let never_reached = || {
            warn!(
                current = current.value(),
                growth_rate,
                "Growth too slow, target level never reached"
            );
            CleaningPoint {
                days_until_optimal: NEVER_REACHES_TARGET_DAYS,
                projected_savings: round_to(-cost_per_cleaning, 2),
                reaches_target: false,
            }
        };

        if gap > 0.0 && growth_rate <= 0.0 {
            return Ok(never_reached());
        }

        let days = if gap > 0.0 {
            floor_days(gap / growth_rate, NEVER_REACHES_TARGET_DAYS)
        } else {
            0
        };
        // Anything at the sentinel horizon is treated as never
        if days >= NEVER_REACHES_TARGET_DAYS {
            return Ok(never_reached());
        }
        let savings = f64::from(days) * fuel_cost_per_day * savings_rate - cost_per_cleaning;

        debug!(
            current = current.value(),
            growth_rate,
            days,
            savings,
            "Optimal cleaning point"
        );

        Ok(CleaningPoint {
            days_until_optimal: days,
            projected_savings: round_to(savings, 2),
            reaches_target: true,
        })
    }
}
