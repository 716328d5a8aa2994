//! ForecastEngine: samples windows, runs the five layers, fuses them.
//!
//! Implements `IForecaster` from sicbo-core.

use sicbo_core::config::ForecastConfig;
use sicbo_core::errors::{ForecastError, ForecastResult};
use sicbo_core::traits::IForecaster;
use sicbo_core::{Outcome, Prediction};
use tracing::debug;

use crate::fusion;
use crate::layers::{self, LayerResults};
use crate::sampler::{self, Period};

/// Stateless forecasting engine. Holds only configuration, so one engine
/// can serve any number of sessions.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Run every analysis layer over `history` (oldest first).
    pub fn analyze(&self, history: &[Outcome]) -> ForecastResult<LayerResults> {
        let required = self.config.effective_min_history();
        if history.len() < required {
            return Err(ForecastError::InsufficientHistory {
                available: history.len(),
                required,
            });
        }

        let windows = sampler::sample(history);

        let frequency = layers::frequency::analyze(&windows);
        let streak = layers::streak::analyze(windows.get(Period::UltraShort));
        let patterns = layers::pattern::analyze(
            windows.get(Period::Medium),
            &self.config.effective_pattern_lengths(),
            self.config.effective_pattern_min_occurrences(),
        );
        let anomalies =
            layers::anomaly::analyze(history, self.config.effective_anomaly_z_threshold());
        let trend = layers::trend::analyze(
            windows.get(Period::UltraShort),
            windows.get(Period::Short),
            self.config.effective_trend_threshold(),
        );

        debug!(
            samples = history.len(),
            weighted_high = frequency.high,
            weighted_low = frequency.low,
            streak_high = streak.current.high,
            streak_low = streak.current.low,
            pattern_matches = patterns.len(),
            anomalies = anomalies.count,
            trend = %trend.direction,
            "layers analyzed"
        );

        Ok(LayerResults {
            frequency,
            streak,
            patterns,
            anomalies,
            trend,
        })
    }

    /// Analyze and fuse in one step.
    pub fn predict(&self, history: &[Outcome]) -> ForecastResult<Prediction> {
        let layers = self.analyze(history)?;
        let prediction = fusion::fuse(&layers, history.len())?;
        debug!(
            direction = %prediction.direction,
            confidence = prediction.confidence.directional,
            top_totals = ?prediction.top_totals,
            "forecast fused"
        );
        Ok(prediction)
    }
}

impl IForecaster for ForecastEngine {
    fn forecast(&self, history: &[Outcome]) -> ForecastResult<Prediction> {
        self.predict(history)
    }

    fn min_history(&self) -> usize {
        self.config.effective_min_history()
    }
}
