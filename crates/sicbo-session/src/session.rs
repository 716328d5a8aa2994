//! Session: owns the history and the accuracy state for one feed.

use std::fmt;

use serde::{Deserialize, Serialize};
use sicbo_core::errors::{ForecastError, ForecastResult, SicboErrorCode};
use sicbo_core::traits::IForecaster;
use sicbo_core::{History, Outcome, Prediction, Side, SicboConfig};
use sicbo_forecast::ForecastEngine;
use tracing::{debug, info, warn};

use crate::accuracy::{AccuracyTracker, Grade};
use crate::inversion::InversionPolicy;
use crate::snapshot::SessionSnapshot;

/// What the session currently exposes for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingCall {
    /// Not enough history yet.
    Waiting { have: usize, need: usize },
    /// `raw` is the engine's call; `exposed` is what users see and what is graded.
    Call { raw: Side, exposed: Side },
    /// The last forecast cycle failed; nothing is graded next round.
    AnalysisFailed,
}

impl PendingCall {
    /// The gradeable call, if any.
    pub fn exposed(&self) -> Option<Side> {
        match self {
            PendingCall::Call { exposed, .. } => Some(*exposed),
            _ => None,
        }
    }
}

impl fmt::Display for PendingCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingCall::Waiting { have, need } => write!(f, "Waiting for data ({have}/{need})"),
            PendingCall::Call { exposed, .. } => write!(f, "{exposed}"),
            PendingCall::AnalysisFailed => write!(f, "Analysis failed"),
        }
    }
}

/// What happened when one outcome was appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub actual: Side,
    /// `None` when there was no gradeable call for this round.
    pub grade: Option<Grade>,
    /// Call exposed for the following round.
    pub next: PendingCall,
}

/// A prediction session over one outcome stream.
///
/// Constructed with zeroed counters, an `Unset` grade, and an empty history.
/// Sessions share nothing, so any number can coexist.
pub struct Session<F: IForecaster = ForecastEngine> {
    history: History,
    forecaster: F,
    inversion: InversionPolicy,
    accuracy: AccuracyTracker,
    pending: PendingCall,
    latest: Option<Prediction>,
    rounds: u64,
    pattern_display_len: usize,
}

impl Session<ForecastEngine> {
    /// Session backed by the default engine, configured from `config`.
    pub fn with_config(config: &SicboConfig) -> Self {
        Self::new(ForecastEngine::new(config.forecast.clone()), config)
    }
}

impl Default for Session<ForecastEngine> {
    fn default() -> Self {
        Self::with_config(&SicboConfig::default())
    }
}

impl<F: IForecaster> Session<F> {
    pub fn new(forecaster: F, config: &SicboConfig) -> Self {
        let need = forecaster.min_history();
        Self {
            history: History::with_capacity(config.history.effective_capacity()),
            forecaster,
            inversion: InversionPolicy::from_config(&config.session),
            accuracy: AccuracyTracker::new(),
            pending: PendingCall::Waiting { have: 0, need },
            latest: None,
            rounds: 0,
            pattern_display_len: config.session.effective_pattern_display_len(),
        }
    }

    /// Grade the pending call, append `outcome`, and compute the next call.
    ///
    /// Never fails: forecast errors degrade to `Waiting` or `AnalysisFailed`.
    pub fn append_outcome(&mut self, outcome: Outcome) -> RoundReport {
        let actual = outcome.side();
        let grade = self
            .pending
            .exposed()
            .map(|call| self.accuracy.grade(call, actual));

        self.history.push(outcome);
        self.rounds += 1;
        self.refresh();

        let grade_label = grade.map_or_else(|| "ungraded".to_string(), |g| g.to_string());
        info!(
            round = self.rounds,
            total = outcome.total(),
            actual = %actual,
            grade = %grade_label,
            hits = self.accuracy.hits(),
            misses = self.accuracy.misses(),
            next = %self.pending,
            "round recorded"
        );

        RoundReport {
            actual,
            grade,
            next: self.pending,
        }
    }

    /// Forecast from the current history without touching session state.
    pub fn request_prediction(&self) -> ForecastResult<Prediction> {
        self.forecaster.forecast(self.history.as_slice())
    }

    fn refresh(&mut self) {
        let need = self.forecaster.min_history();
        if self.history.len() < need {
            self.pending = PendingCall::Waiting {
                have: self.history.len(),
                need,
            };
            self.latest = None;
            return;
        }

        match self.request_prediction() {
            Ok(prediction) => {
                let raw = prediction.direction;
                let exposed = self.inversion.apply(raw);
                debug!(%raw, %exposed, policy = ?self.inversion, "call exposed");
                self.pending = PendingCall::Call { raw, exposed };
                self.latest = Some(prediction);
            }
            Err(ForecastError::InsufficientHistory { available, required }) => {
                self.pending = PendingCall::Waiting {
                    have: available,
                    need: required,
                };
                self.latest = None;
            }
            Err(e) => {
                warn!(code = e.error_code(), error = %e, "forecast failed; ingestion continues");
                self.pending = PendingCall::AnalysisFailed;
                self.latest = None;
            }
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn pending(&self) -> PendingCall {
        self.pending
    }

    /// Engine output behind the current call.
    pub fn latest_prediction(&self) -> Option<&Prediction> {
        self.latest.as_ref()
    }

    pub fn accuracy(&self) -> &AccuracyTracker {
        &self.accuracy
    }

    pub fn hits(&self) -> u64 {
        self.accuracy.hits()
    }

    pub fn misses(&self) -> u64 {
        self.accuracy.misses()
    }

    pub fn last_graded(&self) -> Grade {
        self.accuracy.last_graded()
    }

    pub fn inversion(&self) -> InversionPolicy {
        self.inversion
    }

    /// Outcomes appended over the session's lifetime, including evicted ones.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Most recent outcomes as `H`/`L` symbols for diagnostic display.
    pub fn pattern_string(&self) -> String {
        self.history.symbols(self.pattern_display_len)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}
