use sicbo_core::Side;

use super::{BASIC_STATS_WEIGHT, PATTERNS_WEIGHT, STREAK_WEIGHT, TREND_WEIGHT};
use crate::layers::{LayerResults, TrendDirection};

/// Competing high/low scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionScores {
    pub high: f64,
    pub low: f64,
}

impl DirectionScores {
    /// `High` only when it strictly outscores `Low`.
    pub fn direction(&self) -> Side {
        if self.high > self.low {
            Side::High
        } else {
            Side::Low
        }
    }
}

/// Score both sides.
///
/// The streak layer votes for a reversal: a running high streak adds to the
/// low score and a running low streak adds to the high score.
pub fn direction_scores(layers: &LayerResults) -> DirectionScores {
    let mut high = layers.frequency.high * BASIC_STATS_WEIGHT;
    let mut low = layers.frequency.low * BASIC_STATS_WEIGHT;

    let streak = &layers.streak;
    if streak.max.high > 0 {
        low += streak.current.high as f64 / streak.max.high as f64 * STREAK_WEIGHT;
    }
    if streak.max.low > 0 {
        high += streak.current.low as f64 / streak.max.low as f64 * STREAK_WEIGHT;
    }

    for pattern in &layers.patterns {
        match pattern.prediction {
            Side::High => high += pattern.confidence * PATTERNS_WEIGHT,
            Side::Low => low += pattern.confidence * PATTERNS_WEIGHT,
        }
    }

    match layers.trend.direction {
        TrendDirection::Up => high += TREND_WEIGHT,
        TrendDirection::Down => low += TREND_WEIGHT,
        TrendDirection::Neutral => {}
    }

    DirectionScores { high, low }
}
