//! Sequence-pattern matcher over the high/low axis.
//!
//! For a pattern length `L`, every length-`L` run of symbols in the window
//! is tallied with the symbol that followed it. The tallied pattern most
//! similar to the latest `L` symbols (weighted by how often it occurred)
//! supplies the call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sicbo_core::{Outcome, Side};

/// Follow-up counts for one historical pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTally {
    pub pattern: String,
    /// Times the pattern was followed by a high outcome.
    pub high: u32,
    /// Times the pattern was followed by a low outcome.
    pub low: u32,
    pub occurrences: u32,
}

impl PatternTally {
    fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            high: 0,
            low: 0,
            occurrences: 0,
        }
    }

    fn record(&mut self, next: Side) {
        match next {
            Side::High => self.high += 1,
            Side::Low => self.low += 1,
        }
        self.occurrences += 1;
    }

    /// Majority follow-up; ties go to `Low`.
    pub fn majority(&self) -> Side {
        if self.high > self.low {
            Side::High
        } else {
            Side::Low
        }
    }
}

/// Best match for one pattern length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub length: usize,
    pub current_pattern: String,
    pub best_match: PatternTally,
    /// `similarity * ln(occurrences + 1)` of the best match.
    pub confidence: f64,
    pub prediction: Side,
}

/// Fraction of positions at which two equal-length patterns agree.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let matching = a.bytes().zip(b.bytes()).filter(|(x, y)| x == y).count();
    matching as f64 / a.len() as f64
}

/// Tally every length-`length` pattern in `symbols` with its follow-up,
/// preserving first-seen order.
fn tally(symbols: &str, length: usize) -> Vec<PatternTally> {
    let sides: Vec<Side> = symbols
        .bytes()
        .map(|b| if b == b'H' { Side::High } else { Side::Low })
        .collect();

    let mut tallies: Vec<PatternTally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for i in 0..sides.len() - length {
        let pattern = &symbols[i..i + length];
        let slot = *index.entry(pattern).or_insert_with(|| {
            tallies.push(PatternTally::new(pattern));
            tallies.len() - 1
        });
        tallies[slot].record(sides[i + length]);
    }

    tallies
}

/// Run the matcher for each length in `lengths`.
///
/// A length needs at least `2 * length` outcomes in the window; lengths
/// whose candidates all fall below `min_occurrences`, or that score zero,
/// contribute nothing. Ties keep the first-seen pattern.
pub fn analyze(window: &[Outcome], lengths: &[usize], min_occurrences: u32) -> Vec<PatternMatch> {
    let symbols: String = window.iter().map(|o| o.side().symbol()).collect();
    let mut results = Vec::new();

    for &length in lengths {
        if length == 0 || window.len() < length * 2 {
            continue;
        }

        let current_pattern = &symbols[symbols.len() - length..];
        let mut best: Option<(PatternTally, f64)> = None;
        let mut best_score = 0.0;

        for candidate in tally(&symbols, length)
            .into_iter()
            .filter(|t| t.occurrences >= min_occurrences)
        {
            let score = similarity(current_pattern, &candidate.pattern)
                * (candidate.occurrences as f64 + 1.0).ln();
            if score > best_score {
                best_score = score;
                best = Some((candidate, score));
            }
        }

        if let Some((best_match, confidence)) = best {
            results.push(PatternMatch {
                length,
                current_pattern: current_pattern.to_string(),
                prediction: best_match.majority(),
                best_match,
                confidence,
            });
        }
    }

    results
}
