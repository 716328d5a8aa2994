//! Forecast engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ANOMALY_Z_THRESHOLD, DEFAULT_MIN_HISTORY, DEFAULT_PATTERN_LENGTHS,
    DEFAULT_PATTERN_MIN_OCCURRENCES, DEFAULT_TREND_THRESHOLD,
};

/// Tunables for the forecasting layers. Window sizes and fusion weights
/// are fixed; see `sicbo_core::constants`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForecastConfig {
    /// Outcomes required before a forecast is attempted. Default: 10.
    pub min_history: Option<usize>,
    /// Pattern lengths scanned by the pattern matcher. Default: [3, 5].
    #[serde(default)]
    pub pattern_lengths: Vec<usize>,
    /// Minimum occurrences for a historical pattern. Default: 2.
    pub pattern_min_occurrences: Option<u32>,
    /// Anomaly z-score threshold. Default: 2.5.
    pub anomaly_z_threshold: Option<f64>,
    /// Trend strength threshold. Default: 0.05.
    pub trend_threshold: Option<f64>,
}

impl ForecastConfig {
    pub fn effective_min_history(&self) -> usize {
        self.min_history.unwrap_or(DEFAULT_MIN_HISTORY)
    }

    pub fn effective_pattern_lengths(&self) -> Vec<usize> {
        if self.pattern_lengths.is_empty() {
            DEFAULT_PATTERN_LENGTHS.to_vec()
        } else {
            self.pattern_lengths.clone()
        }
    }

    pub fn effective_pattern_min_occurrences(&self) -> u32 {
        self.pattern_min_occurrences
            .unwrap_or(DEFAULT_PATTERN_MIN_OCCURRENCES)
    }

    pub fn effective_anomaly_z_threshold(&self) -> f64 {
        self.anomaly_z_threshold.unwrap_or(DEFAULT_ANOMALY_Z_THRESHOLD)
    }

    pub fn effective_trend_threshold(&self) -> f64 {
        self.trend_threshold.unwrap_or(DEFAULT_TREND_THRESHOLD)
    }
}
