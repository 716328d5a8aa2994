//! Top-level sicbo configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{FeedConfig, ForecastConfig, HistoryConfig, SessionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`SICBO_*`)
/// 3. Config file (`sicbo.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SicboConfig {
    pub history: HistoryConfig,
    pub forecast: ForecastConfig,
    pub session: SessionConfig,
    pub feed: FeedConfig,
}

/// Override values supplied by the embedding application (e.g. CLI flags).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub history_capacity: Option<usize>,
    pub min_history: Option<usize>,
    pub invert: Option<bool>,
}

impl SicboConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `path` is not an error; a path that is given but cannot be
    /// read or parsed is.
    pub fn load(
        path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        debug!(file = ?path, "configuration loaded");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SicboConfig) -> Result<(), ConfigError> {
        let capacity = config.history.effective_capacity();
        let min_history = config.forecast.effective_min_history();

        if capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "history.capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if min_history == 0 || min_history > capacity {
            return Err(ConfigError::ValidationFailed {
                field: "forecast.min_history".to_string(),
                message: format!("must be between 1 and history.capacity ({capacity})"),
            });
        }
        if config.forecast.pattern_lengths.iter().any(|&l| l == 0) {
            return Err(ConfigError::ValidationFailed {
                field: "forecast.pattern_lengths".to_string(),
                message: "lengths must be greater than 0".to_string(),
            });
        }
        let z = config.forecast.effective_anomaly_z_threshold();
        if !z.is_finite() || z <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "forecast.anomaly_z_threshold".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        let trend = config.forecast.effective_trend_threshold();
        if !(0.0..1.0).contains(&trend) {
            return Err(ConfigError::ValidationFailed {
                field: "forecast.trend_threshold".to_string(),
                message: "must be in [0.0, 1.0)".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SicboConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: SicboConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut SicboConfig, other: &SicboConfig) {
        if other.history.capacity.is_some() {
            base.history.capacity = other.history.capacity;
        }

        if other.forecast.min_history.is_some() {
            base.forecast.min_history = other.forecast.min_history;
        }
        if !other.forecast.pattern_lengths.is_empty() {
            base.forecast.pattern_lengths = other.forecast.pattern_lengths.clone();
        }
        if other.forecast.pattern_min_occurrences.is_some() {
            base.forecast.pattern_min_occurrences = other.forecast.pattern_min_occurrences;
        }
        if other.forecast.anomaly_z_threshold.is_some() {
            base.forecast.anomaly_z_threshold = other.forecast.anomaly_z_threshold;
        }
        if other.forecast.trend_threshold.is_some() {
            base.forecast.trend_threshold = other.forecast.trend_threshold;
        }

        if other.session.invert.is_some() {
            base.session.invert = other.session.invert;
        }
        if other.session.pattern_display_len.is_some() {
            base.session.pattern_display_len = other.session.pattern_display_len;
        }

        if other.feed.plugin.is_some() {
            base.feed.plugin = other.feed.plugin.clone();
        }
        if other.feed.agent_id.is_some() {
            base.feed.agent_id = other.feed.agent_id.clone();
        }
        if other.feed.access_token.is_some() {
            base.feed.access_token = other.feed.access_token.clone();
        }
        if other.feed.heartbeat_secs.is_some() {
            base.feed.heartbeat_secs = other.feed.heartbeat_secs;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SICBO_HISTORY_CAPACITY`, `SICBO_FORECAST_MIN_HISTORY`, etc.
    /// Unparseable values are logged and ignored.
    fn apply_env_overrides(config: &mut SicboConfig) {
        if let Some(v) = env_parse::<usize>("SICBO_HISTORY_CAPACITY") {
            config.history.capacity = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SICBO_FORECAST_MIN_HISTORY") {
            config.forecast.min_history = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SICBO_FORECAST_ANOMALY_Z_THRESHOLD") {
            config.forecast.anomaly_z_threshold = Some(v);
        }
        if let Some(v) = env_parse::<bool>("SICBO_SESSION_INVERT") {
            config.session.invert = Some(v);
        }
        if let Ok(val) = std::env::var("SICBO_FEED_AGENT_ID") {
            config.feed.agent_id = Some(val);
        }
        if let Ok(val) = std::env::var("SICBO_FEED_ACCESS_TOKEN") {
            config.feed.access_token = Some(val);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut SicboConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.history_capacity {
            config.history.capacity = Some(v);
        }
        if let Some(v) = overrides.min_history {
            config.forecast.min_history = Some(v);
        }
        if let Some(v) = overrides.invert {
            config.session.invert = Some(v);
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let val = std::env::var(key).ok()?;
    match val.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %val, "ignoring unparseable environment override");
            None
        }
    }
}
