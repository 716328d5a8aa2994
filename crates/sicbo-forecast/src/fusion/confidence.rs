use crate::layers::{LayerResults, TrendDirection};

const IMBALANCE_POINTS: f64 = 40.0;
const STREAK_POINTS: f64 = 25.0;
const PATTERN_POINTS: f64 = 20.0;
const TREND_POINTS: f64 = 15.0;

pub const BASELINE: f64 = 50.0;
pub const CEILING: u8 = 98;

/// Directional confidence in `50..=98`.
///
/// Bonus points: up to 40 for the weighted high/low imbalance, up to 25 for
/// the dominant streak's current/max ratio, up to 20 for summed pattern
/// confidence, and 15 for a directional trend. Half the bonus is added to
/// the baseline.
pub fn directional(layers: &LayerResults) -> u8 {
    let mut bonus = 0.0;

    let freq = &layers.frequency;
    let total = freq.high + freq.low;
    if total > 0.0 {
        bonus += (freq.high - freq.low).abs() / total * IMBALANCE_POINTS;
    }

    let (current, max) = if layers.streak.current.high > layers.streak.current.low {
        (layers.streak.current.high, layers.streak.max.high)
    } else {
        (layers.streak.current.low, layers.streak.max.low)
    };
    let streak_ratio = current as f64 / max.max(1) as f64;
    bonus += streak_ratio.min(1.0) * STREAK_POINTS;

    let pattern_sum: f64 = layers.patterns.iter().map(|p| p.confidence).sum();
    bonus += pattern_sum.min(1.0) * PATTERN_POINTS;

    if layers.trend.direction != TrendDirection::Neutral {
        bonus += TREND_POINTS;
    }

    let score = (BASELINE + bonus / 2.0).round();
    if score.is_nan() {
        return BASELINE as u8;
    }
    score.clamp(BASELINE, CEILING as f64) as u8
}
