use sicbo_core::constants::TOP_TOTALS;

use crate::layers::{AnomalyReport, WeightedFrequency};

const HISTOGRAM_SCALE: f64 = 0.6;
const ANOMALY_DISCOUNT: f64 = 0.5;

/// Most likely totals, best first.
///
/// The histogram is scaled by 0.6, then each recent anomaly halves the
/// weight of its total (an anomalous total seen twice is halved twice).
/// Equal weights keep ascending-total order.
pub fn top_totals(frequency: &WeightedFrequency, anomalies: &AnomalyReport) -> Vec<u8> {
    let mut weighted: Vec<(u8, f64)> = frequency
        .histogram
        .iter()
        .map(|(&total, &weight)| (total, weight * HISTOGRAM_SCALE))
        .collect();

    for anomaly in &anomalies.recent {
        if let Some(entry) = weighted.iter_mut().find(|(t, _)| *t == anomaly.total) {
            entry.1 *= ANOMALY_DISCOUNT;
        }
    }

    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    weighted
        .into_iter()
        .take(TOP_TOTALS)
        .map(|(total, _)| total)
        .collect()
}
