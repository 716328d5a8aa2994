//! Period sampler: nested recency windows over the history.

use serde::{Deserialize, Serialize};
use sicbo_core::constants::{DEFAULT_PERIOD_WEIGHTS, DEFAULT_WINDOW_SIZES};
use sicbo_core::errors::{ForecastError, ForecastResult};
use sicbo_core::Outcome;

/// Named recency window. Declaration order is the accumulation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    UltraShort,
    Short,
    Medium,
    Long,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::UltraShort,
        Period::Short,
        Period::Medium,
        Period::Long,
    ];

    fn index(self) -> usize {
        match self {
            Period::UltraShort => 0,
            Period::Short => 1,
            Period::Medium => 2,
            Period::Long => 3,
        }
    }

    /// Maximum window length.
    pub fn size(self) -> usize {
        DEFAULT_WINDOW_SIZES[self.index()]
    }

    /// Base weight used by the weighted frequency layer.
    pub fn base_weight(self) -> f64 {
        DEFAULT_PERIOD_WEIGHTS[self.index()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::UltraShort => "ultraShort",
            Period::Short => "short",
            Period::Medium => "medium",
            Period::Long => "long",
        }
    }
}

/// Suffix slices of one history snapshot, one per [`Period`].
#[derive(Debug, Clone, Copy)]
pub struct WindowSet<'a> {
    windows: [&'a [Outcome]; 4],
}

impl<'a> WindowSet<'a> {
    /// Window for `period`; may be empty.
    pub fn get(&self, period: Period) -> &'a [Outcome] {
        self.windows[period.index()]
    }

    /// Window for `period`, or `DegenerateWindow` if it is empty.
    pub fn require(&self, period: Period) -> ForecastResult<&'a [Outcome]> {
        let window = self.get(period);
        if window.is_empty() {
            return Err(ForecastError::DegenerateWindow {
                window: period.label(),
                len: 0,
            });
        }
        Ok(window)
    }

    /// Iterate windows in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Period, &'a [Outcome])> + '_ {
        Period::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// Slice `history` into the four recency windows.
/// Each window is the last `period.size()` outcomes, or all of them if fewer.
pub fn sample(history: &[Outcome]) -> WindowSet<'_> {
    let suffix = |size: usize| &history[history.len().saturating_sub(size)..];
    WindowSet {
        windows: Period::ALL.map(|p| suffix(p.size())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<Outcome> {
        (0..n)
            .map(|i| Outcome::new(3 + (i % 16) as u32).unwrap())
            .collect()
    }

    #[test]
    fn windows_are_suffixes() {
        let h = history(120);
        let windows = sample(&h);
        assert_eq!(windows.get(Period::UltraShort), &h[110..]);
        assert_eq!(windows.get(Period::Short), &h[90..]);
        assert_eq!(windows.get(Period::Medium), &h[20..]);
        assert_eq!(windows.get(Period::Long), &h[..]);
    }

    #[test]
    fn short_history_fills_every_window() {
        let h = history(7);
        let windows = sample(&h);
        for (_, window) in windows.iter() {
            assert_eq!(window.len(), 7);
        }
    }

    #[test]
    fn empty_history_is_degenerate() {
        let windows = sample(&[]);
        assert_eq!(
            windows.require(Period::Short),
            Err(ForecastError::DegenerateWindow {
                window: "short",
                len: 0
            })
        );
    }
}
