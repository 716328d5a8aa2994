use serde::{Deserialize, Serialize};
use sicbo_core::constants::RECENT_ANOMALY_SPAN;
use sicbo_core::Outcome;

/// Histories shorter than this produce an empty report.
pub const MIN_ANOMALY_HISTORY: usize = 10;

/// One outlying total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Position in the analyzed history, oldest first.
    pub index: usize,
    pub total: u8,
    pub z_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Anomalies across the whole history.
    pub count: usize,
    /// Anomalies among the last 10 entries, oldest first.
    pub recent: Vec<Anomaly>,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Flag totals whose z-score exceeds `z_threshold`.
///
/// Uses the population standard deviation of the whole history. A constant
/// history has `std_dev == 0` and no anomalies.
pub fn analyze(history: &[Outcome], z_threshold: f64) -> AnomalyReport {
    if history.len() < MIN_ANOMALY_HISTORY {
        return AnomalyReport::default();
    }

    let n = history.len() as f64;
    let mean = history.iter().map(|o| o.total() as f64).sum::<f64>() / n;
    let variance = history
        .iter()
        .map(|o| (o.total() as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    let mut anomalies = Vec::new();
    if std_dev > 0.0 {
        for (index, outcome) in history.iter().enumerate() {
            let z_score = ((outcome.total() as f64 - mean) / std_dev).abs();
            if z_score > z_threshold {
                anomalies.push(Anomaly {
                    index,
                    total: outcome.total(),
                    z_score,
                });
            }
        }
    }

    let recent_from = history.len().saturating_sub(RECENT_ANOMALY_SPAN);
    AnomalyReport {
        count: anomalies.len(),
        recent: anomalies
            .into_iter()
            .filter(|a| a.index >= recent_from)
            .collect(),
        mean,
        std_dev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes(totals: &[u32]) -> Vec<Outcome> {
        totals.iter().map(|&t| Outcome::new(t).unwrap()).collect()
    }

    #[test]
    fn short_history_is_zero_state() {
        let report = analyze(&outcomes(&[3, 18, 3]), 2.5);
        assert_eq!(report, AnomalyReport::default());
    }

    #[test]
    fn constant_history_has_no_anomalies() {
        let report = analyze(&outcomes(&[10; 25]), 2.5);
        assert_eq!(report.std_dev, 0.0);
        assert_eq!(report.count, 0);
        assert!(report.recent.is_empty());
        assert_eq!(report.mean, 10.0);
    }

    #[test]
    fn flags_lone_outlier() {
        let mut totals = vec![10u32; 19];
        totals.push(18);
        let report = analyze(&outcomes(&totals), 2.5);
        // mean 10.4, std dev ~1.744, z(18) ~4.36
        assert_eq!(report.count, 1);
        assert_eq!(report.recent.len(), 1);
        assert_eq!(report.recent[0].total, 18);
        assert_eq!(report.recent[0].index, 19);
    }

    #[test]
    fn old_anomalies_are_not_recent() {
        let mut totals = vec![18u32];
        totals.extend(std::iter::repeat(10).take(29));
        let report = analyze(&outcomes(&totals), 2.5);
        assert_eq!(report.count, 1);
        assert!(report.recent.is_empty());
    }
}
