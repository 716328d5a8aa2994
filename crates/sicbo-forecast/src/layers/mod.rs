//! Independent analysis layers. Each is a pure function over read-only
//! windows or the full history snapshot.

pub mod anomaly;
pub mod frequency;
pub mod pattern;
pub mod streak;
pub mod trend;

pub use anomaly::{Anomaly, AnomalyReport};
pub use frequency::WeightedFrequency;
pub use pattern::{PatternMatch, PatternTally};
pub use streak::{StreakAnalysis, StreakCounts};
pub use trend::{TrendAnalysis, TrendDirection};

use serde::{Deserialize, Serialize};

/// Outputs of all five layers for one prediction cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerResults {
    pub frequency: WeightedFrequency,
    pub streak: StreakAnalysis,
    /// One entry per pattern length that produced a match, in configured order.
    pub patterns: Vec<PatternMatch>,
    pub anomalies: AnomalyReport,
    pub trend: TrendAnalysis,
}
