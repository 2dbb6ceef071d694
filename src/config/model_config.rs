//! Model Configuration - every pipeline coefficient as a TOML value
//!
//! Each struct implements `Default` with the reference constants, so a
//! missing file or an empty table reproduces the reference numbers exactly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "HULLGUARD_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "hullguard.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the biofouling pipeline.
///
/// Load with `ModelConfig::load()` which searches:
/// 1. `$HULLGUARD_CONFIG` env var
/// 2. `./hullguard.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Fuel price, cleaning cost and emission factors
    #[serde(default)]
    pub economics: EconomicsConfig,

    /// Parametric growth model
    #[serde(default)]
    pub growth: GrowthConfig,

    /// Synthetic sensor generation
    #[serde(default)]
    pub sensors: SensorConfig,

    /// Digital twin hydrodynamics
    #[serde(default)]
    pub twin: TwinConfig,

    /// NORMAM 401 regimes on both scales
    #[serde(default)]
    pub compliance: ComplianceConfig,

    /// Fixed-interval cleaning baseline
    #[serde(default)]
    pub fleet: FleetConfig,

    /// Alert triggers
    #[serde(default)]
    pub alerts: AlertConfig,

    /// Recommendation rule triggers
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Index-based multi-horizon forecast
    #[serde(default)]
    pub forecast: ForecastConfig,
}

impl ModelConfig {
    /// Load configuration using the standard search order:
    /// 1. `$HULLGUARD_CONFIG` environment variable
    /// 2. `./hullguard.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded model config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded model config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    ///
    /// Unknown keys only warn; parse and validation failures are errors.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        for w in super::validation::validate_unknown_keys(&contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Model config saved");
        Ok(())
    }

    /// Validate all coefficients for internal consistency.
    ///
    /// Rules:
    /// - Violation thresholds must be >= warning thresholds on both scales
    /// - Growth rates and intervals used as divisors must be positive
    /// - Twin weights must sum to approximately 1.0
    /// - Confidence floor must not exceed the ceiling
    /// - Every value must be finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let c = &self.compliance;
        Self::check_escalation(c.level.warning, c.level.violation, "compliance.level", &mut errors);
        Self::check_escalation(c.index.warning, c.index.violation, "compliance.index", &mut errors);
        if c.level.daily_growth <= 0.0 {
            errors.push("compliance.level.daily_growth must be > 0 (used as divisor)".to_string());
        }
        if c.index.weekly_growth <= 0.0 {
            errors.push("compliance.index.weekly_growth must be > 0 (used as divisor)".to_string());
        }

        let g = &self.growth;
        if g.base_daily_rate <= 0.0 {
            errors.push("growth.base_daily_rate must be > 0".to_string());
        }
        if g.confidence_floor > g.confidence_ceiling {
            errors.push(format!(
                "growth.confidence_floor ({:.3}) must be <= confidence_ceiling ({:.3})",
                g.confidence_floor, g.confidence_ceiling
            ));
        }
        if g.confidence_horizon_days <= 0.0 {
            errors.push("growth.confidence_horizon_days must be > 0 (used as divisor)".to_string());
        }
        if g.forecast_step_days == 0 {
            errors.push("growth.forecast_step_days must be > 0".to_string());
        }
        if g.forecast_step_days > g.forecast_horizon_days {
            errors.push(format!(
                "growth.forecast_step_days ({}) must be <= forecast_horizon_days ({})",
                g.forecast_step_days, g.forecast_horizon_days
            ));
        }

        let t = &self.twin;
        let weight_sum = t.speed_weight + t.fuel_weight + t.drag_weight;
        if !(0.95..=1.05).contains(&weight_sum) {
            errors.push(format!("twin weights must sum to ~1.0, got {weight_sum:.2}"));
        }
        if t.clean_hull_drag <= 0.0 {
            errors.push("twin.clean_hull_drag must be > 0 (used as divisor)".to_string());
        }

        if self.sensors.clean_drag <= 0.0 {
            errors.push("sensors.clean_drag must be > 0 (used as divisor)".to_string());
        }
        if self.fleet.scheduled_interval_days == 0 {
            errors.push("fleet.scheduled_interval_days must be > 0".to_string());
        }
        if self.economics.daily_fuel_baseline_lh <= 0.0 {
            errors.push("economics.daily_fuel_baseline_lh must be > 0 (used as divisor)".to_string());
        }

        let f = &self.forecast;
        if f.horizons_days.is_empty() {
            errors.push("forecast.horizons_days must not be empty".to_string());
        }
        if !f.horizons_days.contains(&f.cleaning_horizon_days) {
            errors.push(format!(
                "forecast.cleaning_horizon_days ({}) must be one of horizons_days {:?}",
                f.cleaning_horizon_days, f.horizons_days
            ));
        }

        // Physical range validation
        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        // Reject NaN/Inf in any config value (sweep all f64 fields via serialization)
        if let Ok(s) = toml::to_string(self) {
            if ["= nan", "= -nan", "= +nan", "= inf", "= -inf", "= +inf"].iter().any(|t| s.contains(t)) {
                errors.push("Config contains NaN or Inf values, all coefficients must be finite numbers".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_escalation(warning: f64, violation: f64, name: &str, errors: &mut Vec<String>) {
        // NaN/Inf comparisons silently pass, catch them explicitly
        if !warning.is_finite() || !violation.is_finite() {
            errors.push(format!(
                "{name}: values must be finite (got warning={warning}, violation={violation})"
            ));
            return;
        }
        if violation < warning {
            errors.push(format!(
                "{name}: violation ({violation:.3}) must be >= warning ({warning:.3})"
            ));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

// ============================================================================
// Economics
// ============================================================================

/// Prices and rates used by every monetary and emissions figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomicsConfig {
    /// Marine diesel price (R$/L).
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_liter: f64,

    /// Cost of one hull cleaning (R$).
    #[serde(default = "default_cleaning_cost")]
    pub cleaning_cost_brl: f64,

    /// CO2 emitted per litre burned (kg/L).
    #[serde(default = "default_ghg_factor")]
    pub ghg_factor_kg_per_liter: f64,

    /// Clean-hull fuel consumption (L/h).
    #[serde(default = "default_fuel_baseline")]
    pub daily_fuel_baseline_lh: f64,

    /// Share of the daily fuel bill recovered by deferring to the optimal point.
    #[serde(default = "default_drag_cost_savings_rate")]
    pub drag_cost_savings_rate: f64,

    /// Share of the daily fuel bill wasted per day cleaned too early.
    #[serde(default = "default_scheduled_waste_rate")]
    pub scheduled_waste_rate: f64,

    /// Fuel saved per optimised day (L/day), before the savings rate.
    #[serde(default = "default_optimized_fuel")]
    pub optimized_fuel_liters_per_day: f64,

    /// Extra fuel per biofouling index point (L/day).
    #[serde(default = "default_fuel_per_index_point")]
    pub fuel_liters_per_index_point: f64,
}

fn default_fuel_price() -> f64 {
    5.8
}
fn default_cleaning_cost() -> f64 {
    120_000.0
}
fn default_ghg_factor() -> f64 {
    2.6
}
fn default_fuel_baseline() -> f64 {
    800.0
}
fn default_drag_cost_savings_rate() -> f64 {
    0.15
}
fn default_scheduled_waste_rate() -> f64 {
    0.05
}
fn default_optimized_fuel() -> f64 {
    100.0
}
fn default_fuel_per_index_point() -> f64 {
    15.0
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            fuel_price_per_liter: default_fuel_price(),
            cleaning_cost_brl: default_cleaning_cost(),
            ghg_factor_kg_per_liter: default_ghg_factor(),
            daily_fuel_baseline_lh: default_fuel_baseline(),
            drag_cost_savings_rate: default_drag_cost_savings_rate(),
            scheduled_waste_rate: default_scheduled_waste_rate(),
            optimized_fuel_liters_per_day: default_optimized_fuel(),
            fuel_liters_per_index_point: default_fuel_per_index_point(),
        }
    }
}

impl EconomicsConfig {
    /// Reference fuel cost figure fed to the cleaning-point optimiser.
    ///
    /// Baseline L/h × price (4 640 R$ with defaults). The optimiser's savings
    /// rate is calibrated against this figure, not against a 24 h bill.
    pub fn fuel_cost_per_day(&self) -> f64 {
        self.daily_fuel_baseline_lh * self.fuel_price_per_liter
    }

    /// Tonnes of CO2 per litre burned.
    pub fn ghg_tonnes_per_liter(&self) -> f64 {
        self.ghg_factor_kg_per_liter / 1000.0
    }
}

// ============================================================================
// Growth Model
// ============================================================================

/// Parametric growth model coefficients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthConfig {
    /// Growth in level points per day before environmental factors.
    #[serde(default = "default_base_daily_rate")]
    pub base_daily_rate: f64,

    /// Level at which cleaning is cost-optimal (0-5).
    #[serde(default = "default_target_cleaning_level")]
    pub target_cleaning_level: f64,

    /// Confidence for a freshly cleaned hull.
    #[serde(default = "default_confidence_ceiling")]
    pub confidence_ceiling: f64,

    /// Confidence never drops below this.
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f64,

    /// Confidence lost over `confidence_horizon_days`.
    #[serde(default = "default_confidence_decay")]
    pub confidence_decay: f64,

    #[serde(default = "default_confidence_horizon")]
    pub confidence_horizon_days: f64,

    /// Length of the weekly forecast series (days ahead).
    #[serde(default = "default_forecast_horizon")]
    pub forecast_horizon_days: u32,

    #[serde(default = "default_forecast_step")]
    pub forecast_step_days: u32,

    /// Seasonal multiplier applied November through March.
    #[serde(default = "default_summer_seasonal_factor")]
    pub summer_seasonal_factor: f64,

    /// Ports whose voyages count as river routes.
    #[serde(default = "default_river_ports")]
    pub river_ports: Vec<String>,
}

fn default_base_daily_rate() -> f64 {
    0.016
}
fn default_target_cleaning_level() -> f64 {
    3.8
}
fn default_confidence_ceiling() -> f64 {
    0.95
}
fn default_confidence_floor() -> f64 {
    0.7
}
fn default_confidence_decay() -> f64 {
    0.25
}
fn default_confidence_horizon() -> f64 {
    180.0
}
fn default_forecast_horizon() -> u32 {
    60
}
fn default_forecast_step() -> u32 {
    7
}
fn default_summer_seasonal_factor() -> f64 {
    1.2
}
fn default_river_ports() -> Vec<String> {
    vec!["Manaus".to_string()]
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base_daily_rate: default_base_daily_rate(),
            target_cleaning_level: default_target_cleaning_level(),
            confidence_ceiling: default_confidence_ceiling(),
            confidence_floor: default_confidence_floor(),
            confidence_decay: default_confidence_decay(),
            confidence_horizon_days: default_confidence_horizon(),
            forecast_horizon_days: default_forecast_horizon(),
            forecast_step_days: default_forecast_step(),
            summer_seasonal_factor: default_summer_seasonal_factor(),
            river_ports: default_river_ports(),
        }
    }
}

// ============================================================================
// Sensor Synthesis
// ============================================================================

/// Synthetic sensor coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SensorConfig {
    /// Base fouling gained every 30 days (level points).
    #[serde(default = "default_fouling_per_30_days")]
    pub fouling_per_30_days: f64,

    /// Upper bound of the uniform fouling noise (level points).
    #[serde(default = "default_max_fouling_noise")]
    pub max_fouling_noise: f64,

    /// Drag coefficient of a clean hull.
    #[serde(default = "default_clean_drag")]
    pub clean_drag: f64,

    /// Drag added between level 0 and level 5.
    #[serde(default = "default_drag_span")]
    pub drag_span: f64,
}

fn default_fouling_per_30_days() -> f64 {
    0.5
}
fn default_max_fouling_noise() -> f64 {
    0.3
}
fn default_clean_drag() -> f64 {
    0.2
}
fn default_drag_span() -> f64 {
    0.4
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            fouling_per_30_days: default_fouling_per_30_days(),
            max_fouling_noise: default_max_fouling_noise(),
            clean_drag: default_clean_drag(),
            drag_span: default_drag_span(),
        }
    }
}

// ============================================================================
// Digital Twin
// ============================================================================

/// Hydrodynamic coefficients for the ideal-vs-actual comparison.
///
/// Empirical approximations. The weights must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TwinConfig {
    /// Typical drag coefficient of a clean hull.
    #[serde(default = "default_clean_hull_drag")]
    pub clean_hull_drag: f64,

    /// Index weight of the speed shortfall.
    #[serde(default = "default_speed_weight")]
    pub speed_weight: f64,

    /// Index weight of the excess fuel.
    #[serde(default = "default_fuel_weight")]
    pub fuel_weight: f64,

    /// Index weight of the excess drag.
    #[serde(default = "default_drag_weight")]
    pub drag_weight: f64,

    /// Scale of the power / v³ drag term.
    #[serde(default = "default_drag_power_scale")]
    pub drag_power_scale: f64,

    /// Speed factor lost per metre of wave height.
    #[serde(default = "default_wave_coefficient")]
    pub wave_coefficient: f64,

    #[serde(default = "default_wave_floor")]
    pub wave_floor: f64,

    /// Speed factor lost per knot of wind.
    #[serde(default = "default_wind_coefficient")]
    pub wind_coefficient: f64,

    #[serde(default = "default_wind_floor")]
    pub wind_floor: f64,

    /// Gain of the along-track current component.
    #[serde(default = "default_current_gain")]
    pub current_gain: f64,
}

fn default_clean_hull_drag() -> f64 {
    0.075
}
fn default_speed_weight() -> f64 {
    0.3
}
fn default_fuel_weight() -> f64 {
    0.5
}
fn default_drag_weight() -> f64 {
    0.2
}
fn default_drag_power_scale() -> f64 {
    0.000_01
}
fn default_wave_coefficient() -> f64 {
    0.03
}
fn default_wave_floor() -> f64 {
    0.85
}
fn default_wind_coefficient() -> f64 {
    0.002
}
fn default_wind_floor() -> f64 {
    0.9
}
fn default_current_gain() -> f64 {
    0.15
}

impl Default for TwinConfig {
    fn default() -> Self {
        Self {
            clean_hull_drag: default_clean_hull_drag(),
            speed_weight: default_speed_weight(),
            fuel_weight: default_fuel_weight(),
            drag_weight: default_drag_weight(),
            drag_power_scale: default_drag_power_scale(),
            wave_coefficient: default_wave_coefficient(),
            wave_floor: default_wave_floor(),
            wind_coefficient: default_wind_coefficient(),
            wind_floor: default_wind_floor(),
            current_gain: default_current_gain(),
        }
    }
}

// ============================================================================
// Compliance
// ============================================================================

/// NORMAM 401 thresholds on both scales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceConfig {
    /// Days between routine hull inspections.
    #[serde(default = "default_inspection_interval")]
    pub inspection_interval_days: u32,

    #[serde(default)]
    pub level: LevelThresholds,

    #[serde(default)]
    pub index: IndexThresholds,
}

fn default_inspection_interval() -> u32 {
    90
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            inspection_interval_days: default_inspection_interval(),
            level: LevelThresholds::default(),
            index: IndexThresholds::default(),
        }
    }
}

/// Regime on the 0-5 fouling level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LevelThresholds {
    /// Level at which the hull is in violation.
    #[serde(default = "default_level_violation")]
    pub violation: f64,

    #[serde(default = "default_level_warning")]
    pub warning: f64,

    /// Assumed growth for the countdown (level points per day).
    #[serde(default = "default_level_daily_growth")]
    pub daily_growth: f64,
}

fn default_level_violation() -> f64 {
    4.5
}
fn default_level_warning() -> f64 {
    3.5
}
fn default_level_daily_growth() -> f64 {
    0.016
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            violation: default_level_violation(),
            warning: default_level_warning(),
            daily_growth: default_level_daily_growth(),
        }
    }
}

/// Regime on the 0-100 % biofouling index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IndexThresholds {
    /// Index (%) at which the hull is non-compliant.
    #[serde(default = "default_index_violation")]
    pub violation: f64,

    #[serde(default = "default_index_warning")]
    pub warning: f64,

    /// Assumed growth for the countdown (% per week).
    #[serde(default = "default_index_weekly_growth")]
    pub weekly_growth: f64,
}

fn default_index_violation() -> f64 {
    60.0
}
fn default_index_warning() -> f64 {
    50.0
}
fn default_index_weekly_growth() -> f64 {
    2.5
}

impl Default for IndexThresholds {
    fn default() -> Self {
        Self {
            violation: default_index_violation(),
            warning: default_index_warning(),
            weekly_growth: default_index_weekly_growth(),
        }
    }
}

// ============================================================================
// Fleet
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FleetConfig {
    /// Fixed cleaning interval the predictive strategy is compared against (days).
    #[serde(default = "default_scheduled_interval")]
    pub scheduled_interval_days: u32,
}

fn default_scheduled_interval() -> u32 {
    90
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            scheduled_interval_days: default_scheduled_interval(),
        }
    }
}

// ============================================================================
// Alerts
// ============================================================================

/// Alert triggers. Level alerts reuse `compliance.level`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertConfig {
    /// Drag increase (%) above which a high-fuel alert is raised.
    #[serde(default = "default_alert_drag_increase")]
    pub drag_increase_percent: f64,
}

fn default_alert_drag_increase() -> f64 {
    50.0
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            drag_increase_percent: default_alert_drag_increase(),
        }
    }
}

// ============================================================================
// Analytics
// ============================================================================

/// Recommendation rule triggers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsConfig {
    /// Drag increase (%) above which route optimisation is suggested.
    #[serde(default = "default_route_drag_increase")]
    pub route_drag_increase_percent: f64,

    /// Water temperature (°C) above which growth is flagged as accelerated.
    #[serde(default = "default_warm_water")]
    pub warm_water_celsius: f64,

    /// Estimated savings (R$) above which an economic opportunity is reported.
    #[serde(default = "default_savings_opportunity")]
    pub savings_opportunity_brl: f64,

    /// Level below which only routine monitoring is advised.
    #[serde(default = "default_low_fouling_level")]
    pub low_fouling_level: f64,
}

fn default_route_drag_increase() -> f64 {
    40.0
}
fn default_warm_water() -> f64 {
    26.0
}
fn default_savings_opportunity() -> f64 {
    50_000.0
}
fn default_low_fouling_level() -> f64 {
    2.0
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            route_drag_increase_percent: default_route_drag_increase(),
            warm_water_celsius: default_warm_water(),
            savings_opportunity_brl: default_savings_opportunity(),
            low_fouling_level: default_low_fouling_level(),
        }
    }
}

// ============================================================================
// Extended Forecast
// ============================================================================

/// Index-based multi-horizon projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastConfig {
    /// Projection horizons (days).
    #[serde(default = "default_horizons")]
    pub horizons_days: Vec<u32>,

    /// Lower bound of the weekly index growth (%).
    #[serde(default = "default_weekly_growth_min")]
    pub weekly_growth_min: f64,

    /// Width of the uniform weekly growth draw (%).
    #[serde(default = "default_weekly_growth_spread")]
    pub weekly_growth_spread: f64,

    /// Confidence of a zero-week projection (%).
    #[serde(default = "default_confidence_start")]
    pub confidence_start_percent: f64,

    /// Confidence lost per projected week (%).
    #[serde(default = "default_confidence_per_week")]
    pub confidence_decay_per_week: f64,

    /// Horizon whose date becomes the optimal cleaning date.
    #[serde(default = "default_cleaning_horizon")]
    pub cleaning_horizon_days: u32,
}

fn default_horizons() -> Vec<u32> {
    vec![7, 15, 30]
}
fn default_weekly_growth_min() -> f64 {
    2.5
}
fn default_weekly_growth_spread() -> f64 {
    1.5
}
fn default_confidence_start() -> f64 {
    92.0
}
fn default_confidence_per_week() -> f64 {
    3.0
}
fn default_cleaning_horizon() -> u32 {
    15
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizons_days: default_horizons(),
            weekly_growth_min: default_weekly_growth_min(),
            weekly_growth_spread: default_weekly_growth_spread(),
            confidence_start_percent: default_confidence_start(),
            confidence_decay_per_week: default_confidence_per_week(),
            cleaning_horizon_days: default_cleaning_horizon(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = ModelConfig::default();
        assert!(config.validate().is_ok(), "Default config must always validate");
    }

    #[test]
    fn test_empty_toml_produces_defaults() {
        let config: ModelConfig = toml::from_str("").expect("empty TOML should parse");
        assert_eq!(config, ModelConfig::default());
        assert_eq!(config.economics.fuel_price_per_liter, 5.8);
        assert_eq!(config.growth.target_cleaning_level, 3.8);
        assert_eq!(config.compliance.index.violation, 60.0);
        assert_eq!(config.forecast.horizons_days, vec![7, 15, 30]);
    }

    #[test]
    fn test_partial_toml_override() {
        let toml_str = r#"
[economics]
fuel_price_per_liter = 6.2

[compliance.level]
warning = 3.0
"#;
        let config: ModelConfig = toml::from_str(toml_str).expect("partial TOML should parse");
        assert_eq!(config.economics.fuel_price_per_liter, 6.2);
        assert_eq!(config.compliance.level.warning, 3.0);
        // Non-overridden values retain defaults
        assert_eq!(config.economics.cleaning_cost_brl, 120_000.0);
        assert_eq!(config.compliance.level.violation, 4.5);
    }

    #[test]
    fn test_fuel_cost_reference_figure() {
        let economics = EconomicsConfig::default();
        assert!((economics.fuel_cost_per_day() - 4640.0).abs() < 1e-9);
        assert!((economics.ghg_tonnes_per_liter() - 0.0026).abs() < 1e-12);
    }

    #[test]
    fn test_validation_catches_inverted_thresholds() {
        let mut config = ModelConfig::default();
        config.compliance.index.warning = 70.0;
        let result = config.validate();
        assert!(result.is_err(), "Inverted thresholds should fail validation");
        if let Err(ConfigError::Validation(errors)) = result {
            assert!(errors.iter().any(|e| e.contains("compliance.index")));
        }
    }

    #[test]
    fn test_validation_catches_bad_weights() {
        let mut config = ModelConfig::default();
        config.twin.fuel_weight = 0.9;
        assert!(config.validate().is_err(), "Weights summing to 1.4 should fail");
    }

    #[test]
    fn test_validation_catches_zero_divisors() {
        let mut config = ModelConfig::default();
        config.compliance.level.daily_growth = 0.0;
        config.fleet.scheduled_interval_days = 0;
        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert!(errors.len() >= 2),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_catches_nan() {
        let mut config = ModelConfig::default();
        config.twin.current_gain = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cleaning_horizon_must_be_a_horizon() {
        let mut config = ModelConfig::default();
        config.forecast.cleaning_horizon_days = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_roundtrip_toml() {
        let original = ModelConfig::default();
        let toml_str = original.to_toml().expect("serialization should work");
        let roundtripped: ModelConfig = toml::from_str(&toml_str).expect("deserialization should work");
        assert_eq!(original, roundtripped);
    }

    #[test]
    fn test_all_sections_serialize() {
        let toml_str = ModelConfig::default().to_toml().expect("serialization should work");
        for section in [
            "[economics]",
            "[growth]",
            "[sensors]",
            "[twin]",
            "[compliance.level]",
            "[compliance.index]",
            "[fleet]",
            "[alerts]",
            "[analytics]",
            "[forecast]",
        ] {
            assert!(toml_str.contains(section), "Missing {section} section");
        }
    }
}
