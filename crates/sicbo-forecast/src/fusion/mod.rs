//! Fusion engine: combines the five layer outputs into one prediction.

pub mod confidence;
pub mod report;
pub mod score;
pub mod totals;

use sicbo_core::errors::{ForecastError, ForecastResult};
use sicbo_core::{Confidence, Parity, Prediction};

use crate::layers::LayerResults;

/// Layer weight for the weighted frequency sums.
pub const BASIC_STATS_WEIGHT: f64 = 0.4;
/// Layer weight for the streak reversal signal.
pub const STREAK_WEIGHT: f64 = 0.3;
/// Layer weight for each pattern match confidence.
pub const PATTERNS_WEIGHT: f64 = 0.2;
/// Flat contribution of a directional trend.
pub const TREND_WEIGHT: f64 = 0.1;

/// Confidence reported for the parity call, which is not scored.
pub const PARITY_CONFIDENCE: u8 = 50;

/// Fuse layer outputs into a [`Prediction`].
///
/// `sample_size` is the history length the layers were computed from; it
/// only feeds the report.
pub fn fuse(layers: &LayerResults, sample_size: usize) -> ForecastResult<Prediction> {
    let scores = score::direction_scores(layers);
    if !scores.high.is_finite() || !scores.low.is_finite() {
        return Err(ForecastError::ComputationFailure {
            reason: format!(
                "non-finite direction scores: high={}, low={}",
                scores.high, scores.low
            ),
        });
    }

    Ok(Prediction {
        direction: scores.direction(),
        // Parity scoring is a stub and always calls even.
        parity: Parity::Even,
        top_totals: totals::top_totals(&layers.frequency, &layers.anomalies),
        confidence: Confidence {
            directional: confidence::directional(layers),
            parity: PARITY_CONFIDENCE,
        },
        report: report::build(layers, sample_size),
    })
}
