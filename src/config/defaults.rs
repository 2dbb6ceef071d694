//! System-wide default constants.
//!
//! Values here are fixed by the data model rather than tuned per deployment,
//! so they stay out of `ModelConfig`.

// ============================================================================
// Growth Model
// ============================================================================

/// Days reported when the fouling level never reaches the cleaning target
/// (zero or negative growth).
pub const NEVER_REACHES_TARGET_DAYS: u32 = 999;

/// Days-per-unit of the base fouling rate (`fouling_per_30_days`).
pub const FOULING_RATE_PERIOD_DAYS: f64 = 30.0;

// ============================================================================
// Sensor Synthesis
// ============================================================================

/// Sea-level hull pressure baseline (Pa).
pub const HULL_PRESSURE_BASE_PA: f64 = 101_325.0;
/// Upper bound of the uniform hull pressure noise (Pa).
pub const HULL_PRESSURE_NOISE_PA: f64 = 5_000.0;

/// Service speed baseline (kn) and noise span.
pub const SPEED_BASE_KN: f64 = 12.0;
pub const SPEED_NOISE_KN: f64 = 3.0;

/// Surface water temperature baseline (°C) and noise span.
pub const WATER_TEMP_BASE_C: f64 = 22.0;
pub const WATER_TEMP_NOISE_C: f64 = 6.0;

/// Seawater salinity baseline (PSU) and noise span.
pub const SALINITY_BASE_PSU: f64 = 34.0;
pub const SALINITY_NOISE_PSU: f64 = 2.0;

/// Length of the historical sensor series (days).
pub const HISTORY_WINDOW_DAYS: u32 = 30;

// ============================================================================
// Hydrodynamics
// ============================================================================

/// Knots to metres per second.
pub const KNOTS_TO_MS: f64 = 0.514_444;

/// Shaft power from torque: kW = N·m × rpm × 2π / 60 000.
pub const TORQUE_RPM_TO_KW: f64 = 60_000.0;

// ============================================================================
// Model Metadata
// ============================================================================

pub const MODEL_VERSION: &str = "1.2.0";
pub const MODEL_ACCURACY: f64 = 0.875;
/// (year, month, day)
pub const MODEL_TRAINED_ON: (i32, u32, u32) = (2024, 10, 15);
pub const MODEL_TRAINING_RECORDS: u32 = 15_420;
pub const MODEL_FEATURES: &[&str] = &[
    "days_since_cleaning",
    "water_temperature",
    "salinity",
    "speed_average",
    "route_type",
    "seasonal_factor",
    "hull_material",
    "coating_type",
];

// ============================================================================
// Report Binary
// ============================================================================

/// Default seed for the demonstration fleet noise.
pub const DEFAULT_FLEET_SEED: u64 = 42;
