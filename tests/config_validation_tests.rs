//! Config Validation Tests
//!
//! Exercises the config validation layer — typo detection and domain range
//! checks — independently from the rest of the engine.

use genesis_engine::config::validation::{
    known_config_keys, suggest_correction, validate_ranges, validate_unknown_keys,
};
use genesis_engine::config::EngineConfig;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_home_state_warns_with_suggestion() {
    let toml_str = r#"
[authority]
home_stat = "SC"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("home_stat"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("authority.home_state"),
        "Should suggest the correct spelling"
    );
}

#[test]
fn typo_in_ranking_section_warns() {
    let toml_str = r#"
[ranking]
default_limt = 25
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].field.contains("default_limt"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("ranking.default_limit")
    );
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[authority]
home_state = "SC"

[thresholds]
revenue_ceiling = 4800000

[data_quality]
dedup_warn_rate = 0.25

[ranking]
default_limit = 50
default_min_company_count = 2
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(
        warnings.is_empty(),
        "Valid config should produce no warnings: {warnings:?}"
    );
}

#[test]
fn wildly_unknown_key_gets_no_suggestion() {
    let known = known_config_keys();
    assert_eq!(suggest_correction("plotly_theme", &known), None);
}

// ============================================================================
// Domain Range Checks
// ============================================================================

#[test]
fn default_config_passes_range_checks() {
    let warnings = validate_ranges(&EngineConfig::default());
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn lowercase_home_state_is_flagged() {
    let config: EngineConfig = toml::from_str(
        r#"
[authority]
home_state = "sc"
"#,
    )
    .unwrap();
    let warnings = validate_ranges(&config);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "authority.home_state");
}

#[test]
fn out_of_unit_interval_warn_rate_is_flagged() {
    let config: EngineConfig = toml::from_str(
        r#"
[data_quality]
dedup_warn_rate = 1.5
"#,
    )
    .unwrap();
    let warnings = validate_ranges(&config);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "data_quality.dedup_warn_rate");
}

#[test]
fn sub_floor_min_company_count_is_flagged() {
    let config: EngineConfig = toml::from_str(
        r#"
[ranking]
default_min_company_count = 1
"#,
    )
    .unwrap();
    let warnings = validate_ranges(&config);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "ranking.default_min_company_count");
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn config_loads_from_a_real_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genesis.toml");
    std::fs::write(
        &path,
        r#"
[authority]
home_state = "PR"

[ranking]
default_limit = 25
"#,
    )
    .unwrap();

    let config = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(config.authority.home_state, "PR");
    assert_eq!(config.ranking.default_limit, 25);
    // Untouched sections keep their defaults.
    assert_eq!(config.ranking.default_min_company_count, 2);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.toml");
    assert!(EngineConfig::load_from_file(&path).is_err());
}
