//! Rolling, capacity-bounded outcome history.

use crate::constants::DEFAULT_HISTORY_CAPACITY;
use crate::outcome::Outcome;

/// Chronological (oldest first) outcome history with FIFO eviction.
///
/// Live entries are `entries[start..]`. Evicted entries stay in place until
/// `start` reaches `capacity`, then they are drained in one pass, so the
/// backing `Vec` never holds more than `2 * capacity` outcomes and each push
/// is amortized O(1).
///
/// Invariant: `len() <= capacity()`.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Outcome>,
    start: usize,
    capacity: usize,
}

impl History {
    /// Create an empty history retaining at most `capacity` outcomes.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity * 2),
            start: 0,
            capacity,
        }
    }

    /// Append an outcome, evicting the oldest one when full.
    /// Returns the evicted outcome, if any.
    pub fn push(&mut self, outcome: Outcome) -> Option<Outcome> {
        let evicted = if self.len() >= self.capacity {
            let oldest = self.entries[self.start];
            self.start += 1;
            Some(oldest)
        } else {
            None
        };
        if self.start >= self.capacity {
            self.entries.drain(..self.start);
            self.start = 0;
        }
        self.entries.push(outcome);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.as_slice().iter().copied()
    }

    /// Read-only view, oldest first.
    pub fn as_slice(&self) -> &[Outcome] {
        &self.entries[self.start..]
    }

    /// The most recent `n` outcomes as `H`/`L` symbols, oldest first.
    pub fn symbols(&self, n: usize) -> String {
        let live = self.as_slice();
        live[live.len().saturating_sub(n)..]
            .iter()
            .map(|o| o.side().symbol())
            .collect()
    }

    #[cfg(test)]
    fn backing_len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl Extend<Outcome> for History {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(total: u32) -> Outcome {
        Outcome::new(total).unwrap()
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = History::with_capacity(3);
        assert_eq!(history.push(outcome(3)), None);
        history.push(outcome(4));
        history.push(outcome(5));
        assert_eq!(history.push(outcome(6)), Some(outcome(3)));

        let totals: Vec<u8> = history.iter().map(|o| o.total()).collect();
        assert_eq!(totals, vec![4, 5, 6]);
        assert_eq!(history.len(), history.capacity());
    }

    #[test]
    fn symbols_take_most_recent() {
        let mut history = History::default();
        history.extend([12, 5, 11, 10].map(outcome));
        assert_eq!(history.symbols(3), "LHL");
        assert_eq!(history.symbols(20), "HLHL");
        assert_eq!(history.symbols(0), "");
    }

    #[test]
    fn slice_after_eviction() {
        let mut history = History::with_capacity(2);
        history.extend([3, 4, 5, 6, 7].map(outcome));
        assert_eq!(history.as_slice(), &[outcome(6), outcome(7)]);
    }

    #[test]
    fn backing_storage_stays_bounded() {
        let mut history = History::with_capacity(1000);
        for i in 0..5_000u32 {
            history.push(outcome(3 + i % 16));
            assert!(history.backing_len() <= 2 * history.capacity());
        }
        assert_eq!(history.len(), 1000);
        let expected: Vec<Outcome> = (4_000..5_000u32).map(|i| outcome(3 + i % 16)).collect();
        assert_eq!(history.as_slice(), expected.as_slice());
    }
}
