use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sampler::{Period, WindowSet};

/// Recency-weighted counts across all windows.
///
/// `histogram` is keyed by total and iterates in ascending total order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedFrequency {
    pub high: f64,
    pub low: f64,
    pub even: f64,
    pub odd: f64,
    pub histogram: BTreeMap<u8, f64>,
}

impl WeightedFrequency {
    fn absorb(&mut self, other: &WeightedFrequency) {
        self.high += other.high;
        self.low += other.low;
        self.even += other.even;
        self.odd += other.odd;
        for (&total, &weight) in &other.histogram {
            *self.histogram.entry(total).or_insert(0.0) += weight;
        }
    }
}

/// Weight of the element at `index` in a window of `len` elements:
/// from `base/2` for the oldest up to just under `base` for the newest.
pub fn item_weight(base: f64, index: usize, len: usize) -> f64 {
    base * (0.5 + 0.5 * (index as f64 / len as f64))
}

/// Accumulate weighted counts, windows in declared order and elements
/// oldest first. Each window is summed on its own before being added to
/// the running totals. Empty windows are skipped.
pub fn analyze(windows: &WindowSet<'_>) -> WeightedFrequency {
    let mut stats = WeightedFrequency::default();

    for period in Period::ALL {
        let data = match windows.require(period) {
            Ok(data) => data,
            Err(e) => {
                debug!(error = %e, "skipping window in weighted frequency");
                continue;
            }
        };

        let base = period.base_weight();
        let mut period_stats = WeightedFrequency::default();
        for (index, outcome) in data.iter().enumerate() {
            let w = item_weight(base, index, data.len());
            if outcome.is_high() {
                period_stats.high += w;
            } else {
                period_stats.low += w;
            }
            if outcome.is_even() {
                period_stats.even += w;
            } else {
                period_stats.odd += w;
            }
            *period_stats.histogram.entry(outcome.total()).or_insert(0.0) += w;
        }
        stats.absorb(&period_stats);
    }

    stats
}
