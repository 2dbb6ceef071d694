//! Config Validation Tests
//!
//! Exercises the two-pass loader: unknown-key detection with suggestions,
//! then deserialisation and range validation. Uses real files on disk.

use std::io::Write;

use hullguard::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use hullguard::config::{ConfigError, ModelConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_economics_warns_with_suggestion() {
    let toml_str = r#"
[economics]
fuel_price_per_litre = 6.1
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("fuel_price_per_litre"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("economics.fuel_price_per_liter")
    );
}

#[test]
fn typo_in_nested_compliance_table_warns() {
    let toml_str = r#"
[compliance.index]
violaton = 60.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("compliance.index.violation")
    );
}

#[test]
fn unrelated_key_has_no_suggestion() {
    let warnings = validate_unknown_keys("[growth]\ncompletely_unrelated_setting = 1\n");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].suggestion.is_none());
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[economics]
fuel_price_per_liter = 6.2
cleaning_cost_brl = 135000.0

[growth]
river_ports = ["Manaus", "Santarém"]

[compliance]
inspection_interval_days = 60

[compliance.level]
warning = 3.4
violation = 4.4

[forecast]
horizons_days = [7, 14, 30]
cleaning_horizon_days = 14
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn suggestion_distance_is_bounded() {
    let known = known_config_keys();
    assert_eq!(
        suggest_correction("twin.speed_wieght", &known).as_deref(),
        Some("twin.speed_weight")
    );
    assert!(suggest_correction("twin.zzzzzzzzzzzz", &known).is_none());
}

// ============================================================================
// Loading from disk
// ============================================================================

#[test]
fn load_from_file_applies_overrides() {
    let file = write_config(
        r#"
[economics]
fuel_price_per_liter = 6.5

[fleet]
scheduled_interval_days = 120
"#,
    );
    let config = ModelConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.economics.fuel_price_per_liter, 6.5);
    assert_eq!(config.fleet.scheduled_interval_days, 120);
    // Untouched sections keep their defaults
    assert_eq!(config.growth, ModelConfig::default().growth);
}

#[test]
fn load_from_file_tolerates_unknown_keys() {
    let file = write_config("[economics]\nfuel_price_per_litre = 9.9\n");
    let config = ModelConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config, ModelConfig::default());
}

#[test]
fn load_from_file_rejects_inverted_thresholds() {
    let file = write_config(
        r#"
[compliance.index]
warning = 70.0
violation = 60.0
"#,
    );
    match ModelConfig::load_from_file(file.path()) {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("compliance.index")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn load_from_file_rejects_malformed_toml() {
    let file = write_config("[economics\nfuel_price_per_liter = \n");
    assert!(matches!(
        ModelConfig::load_from_file(file.path()),
        Err(ConfigError::Parse(..))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        ModelConfig::load_from_file(&path),
        Err(ConfigError::Io(..))
    ));
}

#[test]
fn save_and_reload_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hullguard.toml");

    let mut config = ModelConfig::default();
    config.economics.cleaning_cost_brl = 99_000.0;
    config.growth.river_ports.push("Santarém".to_string());
    config.save_to_file(&path).unwrap();

    let reloaded = ModelConfig::load_from_file(&path).unwrap();
    assert_eq!(reloaded, config);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(validate_unknown_keys(&raw).is_empty());
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn defaults_pass_range_validation() {
    let (errors, warnings) = validate_physical_ranges(&ModelConfig::default());
    assert!(errors.is_empty(), "{errors:?}");
    assert!(warnings.is_empty());
}

#[test]
fn impossible_values_are_errors() {
    let mut config = ModelConfig::default();
    config.economics.fuel_price_per_liter = 0.0;
    config.growth.target_cleaning_level = 7.0;
    let (errors, _) = validate_physical_ranges(&config);
    assert!(errors.iter().any(|e| e.contains("fuel_price_per_liter")));
    assert!(errors.iter().any(|e| e.contains("target_cleaning_level")));
    assert!(config.validate().is_err());
}

#[test]
fn unusual_ghg_factor_only_warns() {
    let mut config = ModelConfig::default();
    config.economics.ghg_factor_kg_per_liter = 4.2;
    let (errors, warnings) = validate_physical_ranges(&config);
    assert!(errors.is_empty());
    assert_eq!(warnings.len(), 1);
    assert!(config.validate().is_ok());
}
