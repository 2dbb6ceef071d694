//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Unknown keys are found by parsing the raw TOML into a `toml::Value` and
//! comparing every dotted path against the known field set. They only warn,
//! so a file written for a newer build still loads.

use std::collections::HashSet;

use super::ModelConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, ", did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `ModelConfig`.
///
/// Any new field added to `ModelConfig` must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [economics]
        "economics",
        "economics.fuel_price_per_liter",
        "economics.cleaning_cost_brl",
        "economics.ghg_factor_kg_per_liter",
        "economics.daily_fuel_baseline_lh",
        "economics.drag_cost_savings_rate",
        "economics.scheduled_waste_rate",
        "economics.optimized_fuel_liters_per_day",
        "economics.fuel_liters_per_index_point",
        // [growth]
        "growth",
        "growth.base_daily_rate",
        "growth.target_cleaning_level",
        "growth.confidence_ceiling",
        "growth.confidence_floor",
        "growth.confidence_decay",
        "growth.confidence_horizon_days",
        "growth.forecast_horizon_days",
        "growth.forecast_step_days",
        "growth.summer_seasonal_factor",
        "growth.river_ports",
        // [sensors]
        "sensors",
        "sensors.fouling_per_30_days",
        "sensors.max_fouling_noise",
        "sensors.clean_drag",
        "sensors.drag_span",
        // [twin]
        "twin",
        "twin.clean_hull_drag",
        "twin.speed_weight",
        "twin.fuel_weight",
        "twin.drag_weight",
        "twin.drag_power_scale",
        "twin.wave_coefficient",
        "twin.wave_floor",
        "twin.wind_coefficient",
        "twin.wind_floor",
        "twin.current_gain",
        // [compliance]
        "compliance",
        "compliance.inspection_interval_days",
        "compliance.level",
        "compliance.level.violation",
        "compliance.level.warning",
        "compliance.level.daily_growth",
        "compliance.index",
        "compliance.index.violation",
        "compliance.index.warning",
        "compliance.index.weekly_growth",
        // [fleet]
        "fleet",
        "fleet.scheduled_interval_days",
        // [alerts]
        "alerts",
        "alerts.drag_increase_percent",
        // [analytics]
        "analytics",
        "analytics.route_drag_increase_percent",
        "analytics.warm_water_celsius",
        "analytics.savings_opportunity_brl",
        "analytics.low_fouling_level",
        // [forecast]
        "forecast",
        "forecast.horizons_days",
        "forecast.weekly_growth_min",
        "forecast.weekly_growth_spread",
        "forecast.confidence_start_percent",
        "forecast.confidence_decay_per_week",
        "forecast.cleaning_horizon_days",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// A table `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so suggestions are
/// stable across runs.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are reported by serde
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

fn range_error(errors: &mut Vec<String>, field: &str, value: f64, min: f64, max: f64, unit: &str) {
    if !(min..=max).contains(&value) {
        errors.push(format!(
            "{field} = {value} is outside physical range ({min}-{max}{unit})"
        ));
    }
}

fn typical_range_warning(
    warnings: &mut Vec<ValidationWarning>,
    field: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        warnings.push(ValidationWarning {
            field: field.to_string(),
            message: format!("{field} = {value} is outside typical range ({min}-{max})"),
            suggestion: None,
        });
    }
}

/// Validate physical ranges on a parsed `ModelConfig`.
///
/// Returns (errors, warnings). Errors are impossible values that must stop
/// loading; warnings are suspicious but not fatal.
pub fn validate_physical_ranges(config: &ModelConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let e = &config.economics;
    if e.fuel_price_per_liter <= 0.0 {
        errors.push(format!(
            "economics.fuel_price_per_liter = {} must be > 0",
            e.fuel_price_per_liter
        ));
    }
    if e.cleaning_cost_brl < 0.0 {
        errors.push(format!(
            "economics.cleaning_cost_brl = {} cannot be negative",
            e.cleaning_cost_brl
        ));
    }
    if e.ghg_factor_kg_per_liter < 0.0 {
        errors.push(format!(
            "economics.ghg_factor_kg_per_liter = {} cannot be negative",
            e.ghg_factor_kg_per_liter
        ));
    }
    range_error(&mut errors, "economics.drag_cost_savings_rate", e.drag_cost_savings_rate, 0.0, 1.0, "");
    range_error(&mut errors, "economics.scheduled_waste_rate", e.scheduled_waste_rate, 0.0, 1.0, "");
    // Diesel combustion sits close to 2.6-2.7 kg CO2/L
    typical_range_warning(&mut warnings, "economics.ghg_factor_kg_per_liter", e.ghg_factor_kg_per_liter, 2.0, 3.5);

    let g = &config.growth;
    range_error(&mut errors, "growth.target_cleaning_level", g.target_cleaning_level, 0.0, 5.0, "");
    range_error(&mut errors, "growth.confidence_ceiling", g.confidence_ceiling, 0.0, 1.0, "");
    range_error(&mut errors, "growth.confidence_floor", g.confidence_floor, 0.0, 1.0, "");
    if g.summer_seasonal_factor <= 0.0 {
        errors.push(format!(
            "growth.summer_seasonal_factor = {} must be > 0",
            g.summer_seasonal_factor
        ));
    }
    if g.river_ports.iter().any(|p| p.trim().is_empty()) {
        warnings.push(ValidationWarning {
            field: "growth.river_ports".to_string(),
            message: "growth.river_ports contains an empty port name, it matches every route".to_string(),
            suggestion: None,
        });
    }

    let c = &config.compliance;
    range_error(&mut errors, "compliance.level.violation", c.level.violation, 0.0, 5.0, "");
    range_error(&mut errors, "compliance.index.violation", c.index.violation, 0.0, 100.0, " %");
    if c.inspection_interval_days == 0 {
        errors.push("compliance.inspection_interval_days must be > 0".to_string());
    }

    let t = &config.twin;
    range_error(&mut errors, "twin.wave_floor", t.wave_floor, 0.0, 1.0, "");
    range_error(&mut errors, "twin.wind_floor", t.wind_floor, 0.0, 1.0, "");
    if t.wave_floor == 0.0 || t.wind_floor == 0.0 {
        errors.push("twin.wave_floor and twin.wind_floor must be > 0 (fuel factor divides by them)".to_string());
    }

    let s = &config.sensors;
    if s.max_fouling_noise < 0.0 || s.fouling_per_30_days < 0.0 || s.drag_span < 0.0 {
        errors.push("sensors: fouling rate, noise and drag span cannot be negative".to_string());
    }

    let f = &config.forecast;
    if f.weekly_growth_min < 0.0 || f.weekly_growth_spread < 0.0 {
        errors.push("forecast: weekly growth bounds cannot be negative".to_string());
    }
    range_error(&mut errors, "forecast.confidence_start_percent", f.confidence_start_percent, 0.0, 100.0, " %");
    if let Some(&longest) = f.horizons_days.iter().max() {
        let weeks = f64::from(longest) / 7.0;
        if f.confidence_start_percent - weeks * f.confidence_decay_per_week < 0.0 {
            warnings.push(ValidationWarning {
                field: "forecast.confidence_decay_per_week".to_string(),
                message: format!("forecast confidence turns negative at the {longest}-day horizon"),
                suggestion: None,
            });
        }
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("growth", "growth"), 0);
        assert_eq!(levenshtein("salinty", "salinity"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r#"
            [compliance]
            [compliance.index]
            violation = 60.0
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert!(keys.contains(&"compliance".to_string()));
        assert!(keys.contains(&"compliance.index".to_string()));
        assert!(keys.contains(&"compliance.index.violation".to_string()));
    }

    #[test]
    fn test_typo_key_produces_warning_with_suggestion() {
        let toml_str = r#"
[economics]
fuel_price_per_litre = 6.0
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].field.contains("fuel_price_per_litre"));
        assert_eq!(
            warnings[0].suggestion.as_deref(),
            Some("economics.fuel_price_per_liter")
        );
        assert!(warnings[0].to_string().contains("did you mean"));
    }

    #[test]
    fn test_all_valid_keys_produce_zero_warnings() {
        let toml_str = r#"
[economics]
fuel_price_per_liter = 6.0

[growth]
river_ports = ["Manaus", "Belém"]

[compliance.level]
warning = 3.4
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert!(warnings.is_empty(), "Expected 0 warnings, got: {warnings:?}");
    }

    #[test]
    fn test_default_serialization_uses_only_known_keys() {
        let toml_str = ModelConfig::default().to_toml().unwrap();
        let warnings = validate_unknown_keys(&toml_str);
        assert!(warnings.is_empty(), "Unlisted keys: {warnings:?}");
    }

    #[test]
    fn test_suggest_correction_no_match_for_garbage() {
        let known = known_config_keys();
        assert!(suggest_correction("completely_unrelated_garbage_key_xyz", &known).is_none());
    }

    #[test]
    fn test_physical_range_defaults_clean() {
        let (errors, warnings) = validate_physical_ranges(&ModelConfig::default());
        assert!(errors.is_empty(), "Defaults should produce no errors: {errors:?}");
        assert!(warnings.is_empty(), "Defaults should produce no warnings: {warnings:?}");
    }

    #[test]
    fn test_physical_range_target_level_above_scale() {
        let mut config = ModelConfig::default();
        config.growth.target_cleaning_level = 6.0;
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("target_cleaning_level")));
    }

    #[test]
    fn test_physical_range_zero_fuel_price() {
        let mut config = ModelConfig::default();
        config.economics.fuel_price_per_liter = 0.0;
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("fuel_price_per_liter")));
    }

    #[test]
    fn test_physical_range_suspicious_ghg_factor() {
        let mut config = ModelConfig::default();
        config.economics.ghg_factor_kg_per_liter = 26.0;
        let (errors, warnings) = validate_physical_ranges(&config);
        assert!(errors.is_empty());
        assert!(warnings.iter().any(|w| w.field.contains("ghg_factor")));
    }
}
