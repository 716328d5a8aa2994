//! Serializable view of a session for reporting surfaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sicbo_core::traits::IForecaster;
use sicbo_core::{Confidence, Side};

use crate::accuracy::Grade;
use crate::session::{PendingCall, Session};

/// Point-in-time copy of everything a reporting surface needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub rounds: u64,
    pub history_len: usize,
    /// Most recent outcomes as `H`/`L` symbols.
    pub pattern: String,
    pub pending: PendingCall,
    /// Human-readable form of `pending`.
    pub call_label: String,
    pub exposed_call: Option<Side>,
    pub confidence: Option<Confidence>,
    pub top_totals: Vec<u8>,
    pub key_findings: Vec<String>,
    pub last_graded: Grade,
    pub hits: u64,
    pub misses: u64,
    pub captured_at: DateTime<Utc>,
}

impl SessionSnapshot {
    pub fn capture<F: IForecaster>(session: &Session<F>) -> Self {
        let prediction = session.latest_prediction();
        Self {
            rounds: session.rounds(),
            history_len: session.history().len(),
            pattern: session.pattern_string(),
            pending: session.pending(),
            call_label: session.pending().to_string(),
            exposed_call: session.pending().exposed(),
            confidence: prediction.map(|p| p.confidence),
            top_totals: prediction.map(|p| p.top_totals.clone()).unwrap_or_default(),
            key_findings: prediction
                .map(|p| p.report.key_findings.clone())
                .unwrap_or_default(),
            last_graded: session.last_graded(),
            hits: session.hits(),
            misses: session.misses(),
            captured_at: Utc::now(),
        }
    }
}
