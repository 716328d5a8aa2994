//! Hit/miss tally of exposed calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use sicbo_core::Side;

/// Result of grading the most recent call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Grade {
    Correct,
    Incorrect,
    /// No call has been graded yet.
    #[default]
    Unset,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Correct => write!(f, "correct"),
            Grade::Incorrect => write!(f, "incorrect"),
            Grade::Unset => write!(f, "unset"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyTracker {
    hits: u64,
    misses: u64,
    last_graded: Grade,
}

impl AccuracyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grade `call` against `actual`; bumps exactly one counter.
    pub fn grade(&mut self, call: Side, actual: Side) -> Grade {
        let grade = if call == actual {
            self.hits += 1;
            Grade::Correct
        } else {
            self.misses += 1;
            Grade::Incorrect
        };
        self.last_graded = grade;
        grade
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn graded(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn last_graded(&self) -> Grade {
        self.last_graded
    }

    /// Share of correct calls, `None` before the first grade.
    pub fn hit_rate(&self) -> Option<f64> {
        match self.graded() {
            0 => None,
            n => Some(self.hits as f64 / n as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let tracker = AccuracyTracker::new();
        assert_eq!(tracker.last_graded(), Grade::Unset);
        assert_eq!(tracker.hit_rate(), None);
    }

    #[test]
    fn grades_bump_one_counter() {
        let mut tracker = AccuracyTracker::new();
        assert_eq!(tracker.grade(Side::High, Side::High), Grade::Correct);
        assert_eq!(tracker.grade(Side::High, Side::Low), Grade::Incorrect);
        assert_eq!(tracker.grade(Side::Low, Side::Low), Grade::Correct);
        assert_eq!(tracker.hits(), 2);
        assert_eq!(tracker.misses(), 1);
        assert_eq!(tracker.last_graded(), Grade::Correct);
        assert!((tracker.hit_rate().unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }
}
