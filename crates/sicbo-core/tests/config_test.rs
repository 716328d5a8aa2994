//! Tests for the sicbo configuration system.

use std::sync::Mutex;

use sicbo_core::config::{ConfigOverrides, SicboConfig};
use sicbo_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_sicbo_env_vars() {
    for key in [
        "SICBO_HISTORY_CAPACITY",
        "SICBO_FORECAST_MIN_HISTORY",
        "SICBO_FORECAST_ANOMALY_Z_THRESHOLD",
        "SICBO_SESSION_INVERT",
        "SICBO_FEED_AGENT_ID",
        "SICBO_FEED_ACCESS_TOKEN",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_match_engine_constants() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let config = SicboConfig::load(None, None).unwrap();
    assert_eq!(config.history.effective_capacity(), 1000);
    assert_eq!(config.forecast.effective_min_history(), 10);
    assert_eq!(config.forecast.effective_pattern_lengths(), vec![3, 5]);
    assert_eq!(config.forecast.effective_pattern_min_occurrences(), 2);
    assert!((config.forecast.effective_anomaly_z_threshold() - 2.5).abs() < f64::EPSILON);
    assert!(config.session.effective_invert());
    assert_eq!(config.session.effective_pattern_display_len(), 20);
    assert_eq!(config.feed.effective_heartbeat_secs(), 25);
}

#[test]
fn layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sicbo.toml");
    std::fs::write(
        &path,
        r#"
[history]
capacity = 200

[forecast]
min_history = 20
pattern_lengths = [4]

[session]
invert = false
"#,
    )
    .unwrap();

    std::env::set_var("SICBO_FORECAST_MIN_HISTORY", "30");

    let overrides = ConfigOverrides {
        invert: Some(true),
        ..Default::default()
    };
    let config = SicboConfig::load(Some(&path), Some(&overrides)).unwrap();

    // File value survives where nothing overrides it.
    assert_eq!(config.history.effective_capacity(), 200);
    assert_eq!(config.forecast.effective_pattern_lengths(), vec![4]);
    // Env beats file.
    assert_eq!(config.forecast.effective_min_history(), 30);
    // Overrides beat file.
    assert!(config.session.effective_invert());

    clear_sicbo_env_vars();
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    std::env::set_var("SICBO_HISTORY_CAPACITY", "lots");
    let config = SicboConfig::load(None, None).unwrap();
    assert_eq!(config.history.effective_capacity(), 1000);

    clear_sicbo_env_vars();
}

#[test]
fn missing_file_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let result = SicboConfig::load(Some(&dir.path().join("absent.toml")), None);
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn invalid_toml_is_parse_error() {
    let result = SicboConfig::from_toml("[history\ncapacity = ");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn validation_rejects_min_history_above_capacity() {
    let config = SicboConfig::from_toml(
        r#"
[history]
capacity = 5
"#,
    )
    .unwrap();
    let err = SicboConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "forecast.min_history"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validation_rejects_non_positive_z_threshold() {
    let config = SicboConfig::from_toml("[forecast]\nanomaly_z_threshold = 0.0\n").unwrap();
    assert!(SicboConfig::validate(&config).is_err());
}

#[test]
fn toml_round_trip_keeps_values() {
    let config = SicboConfig::from_toml("[feed]\nplugin = \"customPlugin\"\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = SicboConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.feed.effective_plugin(), "customPlugin");
}
