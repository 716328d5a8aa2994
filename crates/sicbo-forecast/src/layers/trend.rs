use std::fmt;

use serde::{Deserialize, Serialize};
use sicbo_core::constants::TREND_DAMPING;
use sicbo_core::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// The ultra-short window leans higher than the short window.
    Up,
    Down,
    Neutral,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    /// `(ultra_short_ratio - short_ratio) * 0.7`
    pub strength: f64,
    pub ultra_short_ratio: f64,
    pub short_ratio: f64,
}

impl Default for TrendAnalysis {
    fn default() -> Self {
        Self {
            direction: TrendDirection::Neutral,
            strength: 0.0,
            ultra_short_ratio: 0.5,
            short_ratio: 0.5,
        }
    }
}

/// Share of high outcomes; 0.5 for windows with fewer than 2 entries.
pub fn high_ratio(window: &[Outcome]) -> f64 {
    if window.len() < 2 {
        return 0.5;
    }
    window.iter().filter(|o| o.is_high()).count() as f64 / window.len() as f64
}

/// Compare the high ratio of the ultra-short window against the short one.
pub fn analyze(ultra_short: &[Outcome], short: &[Outcome], threshold: f64) -> TrendAnalysis {
    let ultra_short_ratio = high_ratio(ultra_short);
    let short_ratio = high_ratio(short);
    let strength = (ultra_short_ratio - short_ratio) * TREND_DAMPING;

    let direction = if strength.abs() > threshold {
        if strength > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    } else {
        TrendDirection::Neutral
    };

    TrendAnalysis {
        direction,
        strength,
        ultra_short_ratio,
        short_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes(totals: &[u32]) -> Vec<Outcome> {
        totals.iter().map(|&t| Outcome::new(t).unwrap()).collect()
    }

    #[test]
    fn identical_windows_are_neutral() {
        let w = outcomes(&[12, 5, 12, 5]);
        let t = analyze(&w, &w, 0.05);
        assert_eq!(t.direction, TrendDirection::Neutral);
        assert_eq!(t.strength, 0.0);
    }

    #[test]
    fn recent_high_run_trends_up() {
        let short = outcomes(&[5, 5, 5, 5, 12, 12]);
        let ultra = outcomes(&[12, 12]);
        let t = analyze(&ultra, &short, 0.05);
        assert_eq!(t.direction, TrendDirection::Up);
        assert!((t.strength - (1.0 - 1.0 / 3.0) * 0.7).abs() < 1e-12);
    }

    #[test]
    fn recent_low_run_trends_down() {
        let short = outcomes(&[12, 12, 12, 12, 5, 5]);
        let ultra = outcomes(&[5, 5]);
        assert_eq!(analyze(&ultra, &short, 0.05).direction, TrendDirection::Down);
    }

    #[test]
    fn degenerate_windows_default_to_half() {
        let t = analyze(&outcomes(&[12]), &[], 0.05);
        assert_eq!(t.ultra_short_ratio, 0.5);
        assert_eq!(t.short_ratio, 0.5);
        assert_eq!(t.direction, TrendDirection::Neutral);
    }
}
