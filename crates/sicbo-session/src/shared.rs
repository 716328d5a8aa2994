//! SharedSession: one mutex around grade + append + recompute.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sicbo_core::errors::ForecastResult;
use sicbo_core::traits::IForecaster;
use sicbo_core::{Outcome, Prediction, SicboConfig};
use sicbo_forecast::ForecastEngine;

use crate::session::{RoundReport, Session};
use crate::snapshot::SessionSnapshot;

/// Cloneable handle for concurrent ingestion and readers.
///
/// Every operation takes the same lock, so readers never see a history
/// that is ahead of its prediction or an accuracy tally without the
/// matching call. A poisoned lock is recovered rather than propagated so
/// the ingestion loop keeps running.
pub struct SharedSession<F: IForecaster = ForecastEngine> {
    inner: Arc<Mutex<Session<F>>>,
}

impl<F: IForecaster> Clone for SharedSession<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedSession<ForecastEngine> {
    pub fn with_config(config: &SicboConfig) -> Self {
        Self::new(Session::with_config(config))
    }
}

impl Default for SharedSession<ForecastEngine> {
    fn default() -> Self {
        Self::new(Session::default())
    }
}

impl<F: IForecaster> SharedSession<F> {
    pub fn new(session: Session<F>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session<F>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append_outcome(&self, outcome: Outcome) -> RoundReport {
        self.lock().append_outcome(outcome)
    }

    pub fn request_prediction(&self) -> ForecastResult<Prediction> {
        self.lock().request_prediction()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Run `f` against the session under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Session<F>) -> R) -> R {
        f(&self.lock())
    }
}
