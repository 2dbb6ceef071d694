//! Telemetry records: synthesized hull sensor readings and operational data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, ensure_range, Result};

/// Physical envelope for seawater salinity (PSU)
pub const SALINITY_RANGE_PSU: (f64, f64) = (0.0, 50.0);
/// Physical envelope for surface water temperature (°C)
pub const WATER_TEMPERATURE_RANGE_C: (f64, f64) = (-2.0, 40.0);

/// Instantaneous hull sensor reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub vessel_id: String,
    pub timestamp: DateTime<Utc>,
    /// Dimensionless, higher means more resistance
    pub drag_coefficient: f64,
    /// Pa
    pub hull_pressure: f64,
    /// kn
    pub speed: f64,
    /// L/h
    pub fuel_consumption: f64,
    /// °C
    pub water_temperature: f64,
    /// PSU
    pub salinity: f64,
    /// 0-5 scale
    pub fouling_level: f64,
    /// % over the clean-hull drag
    pub drag_increase: f64,
}

impl SensorReading {
    pub fn level(&self) -> super::FoulingLevel {
        super::FoulingLevel::clamped(self.fouling_level)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct GpsPosition {
    pub lat: f64,
    pub lon: f64,
    /// Degrees true
    pub heading: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeaConditions {
    /// m
    pub wave_height: f64,
    /// kn
    pub wind_speed: f64,
    /// Degrees
    pub wind_direction: f64,
    /// kn
    pub current_speed: f64,
    /// Degrees
    pub current_direction: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalConditions {
    /// °C
    pub water_temperature: f64,
    /// PSU
    pub salinity: f64,
    /// mg/m³
    pub chlorophyll: f64,
    /// mg/L
    pub oxygen_level: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Laden,
    Ballast,
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationalProfile {
    pub load_status: LoadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_type: Option<String>,
    /// m
    pub draft_forward: f64,
    /// m
    pub draft_aft: f64,
}

/// One operational telemetry frame from the ship systems
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationalData {
    pub vessel_id: String,
    pub timestamp: DateTime<Utc>,
    /// Speed over ground (kn)
    pub speed: f64,
    pub rpm: f64,
    /// Shaft torque (N·m)
    pub torque: f64,
    pub gps_position: GpsPosition,
    /// L/h
    pub fuel_consumption: f64,
    pub sea_conditions: SeaConditions,
    pub environmental_conditions: EnvironmentalConditions,
    pub operational_profile: OperationalProfile,
}

impl OperationalData {
    /// Reject frames the twin engine cannot reason about.
    ///
    /// Non-finite numbers anywhere, negative shaft/speed/fuel values and
    /// water properties outside their physical envelope are `InvalidInput`.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("speed", self.speed)?;
        ensure_non_negative("rpm", self.rpm)?;
        ensure_non_negative("torque", self.torque)?;
        ensure_non_negative("fuel_consumption", self.fuel_consumption)?;

        ensure_finite("gps_position.heading", self.gps_position.heading)?;
        ensure_finite("gps_position.lat", self.gps_position.lat)?;
        ensure_finite("gps_position.lon", self.gps_position.lon)?;

        let sea = &self.sea_conditions;
        ensure_non_negative("sea_conditions.wave_height", sea.wave_height)?;
        ensure_non_negative("sea_conditions.wind_speed", sea.wind_speed)?;
        ensure_finite("sea_conditions.wind_direction", sea.wind_direction)?;
        ensure_non_negative("sea_conditions.current_speed", sea.current_speed)?;
        ensure_finite("sea_conditions.current_direction", sea.current_direction)?;

        let env = &self.environmental_conditions;
        ensure_range(
            "environmental_conditions.water_temperature",
            env.water_temperature,
            WATER_TEMPERATURE_RANGE_C.0,
            WATER_TEMPERATURE_RANGE_C.1,
        )?;
        ensure_range(
            "environmental_conditions.salinity",
            env.salinity,
            SALINITY_RANGE_PSU.0,
            SALINITY_RANGE_PSU.1,
        )?;
        ensure_finite("environmental_conditions.chlorophyll", env.chlorophyll)?;
        ensure_finite("environmental_conditions.oxygen_level", env.oxygen_level)?;

        let profile = &self.operational_profile;
        ensure_non_negative("operational_profile.draft_forward", profile.draft_forward)?;
        ensure_non_negative("operational_profile.draft_aft", profile.draft_aft)?;
        Ok(())
    }
}
