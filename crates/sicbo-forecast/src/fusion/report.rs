use sicbo_core::AnalysisReport;

use crate::layers::{LayerResults, PatternMatch};

/// Highest-confidence pattern match; the earliest wins ties.
pub fn best_pattern(patterns: &[PatternMatch]) -> Option<&PatternMatch> {
    let mut best: Option<&PatternMatch> = None;
    for p in patterns {
        if best.map_or(true, |b| p.confidence > b.confidence) {
            best = Some(p);
        }
    }
    best
}

pub fn build(layers: &LayerResults, sample_size: usize) -> AnalysisReport {
    let streak = &layers.streak.current;
    let streak_finding = if streak.high > streak.low {
        format!("Streak: High {}.", streak.high)
    } else {
        format!("Streak: Low {}.", streak.low)
    };

    let pattern_finding = match best_pattern(&layers.patterns) {
        Some(p) => format!("Pattern: {} -> {}.", p.best_match.pattern, p.prediction),
        None => "Pattern: none.".to_string(),
    };

    AnalysisReport {
        summary: format!("Analyzed {sample_size} rounds."),
        key_findings: vec![
            format!("Trend: {}.", layers.trend.direction),
            streak_finding,
            pattern_finding,
        ],
    }
}
