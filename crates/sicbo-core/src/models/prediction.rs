use serde::{Deserialize, Serialize};

use crate::outcome::{Parity, Side};

/// Heuristic confidence scores, 50..=98. Not probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    pub directional: u8,
    /// The parity path is a stub; this is always 50.
    pub parity: u8,
}

/// Human-readable summary of one forecast.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: String,
    pub key_findings: Vec<String>,
}

/// Fused forecast for the next round, as produced by the engine.
///
/// `direction` is the engine's raw call. The session decides what is shown
/// to users (see its inversion policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Side,
    /// Always `Even`: parity scoring is not implemented.
    pub parity: Parity,
    /// Up to five totals, most likely first.
    pub top_totals: Vec<u8>,
    pub confidence: Confidence,
    pub report: AnalysisReport,
}
