//! Forecast errors.

use super::error_code::{self, SicboErrorCode};

/// Errors that can occur while computing a forecast.
///
/// `DegenerateWindow` never escapes the engine: analyzers that hit it
/// degrade to a neutral result. `ComputationFailure` is caught at the
/// session boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    #[error("insufficient history: have {available} outcomes, need {required}")]
    InsufficientHistory { available: usize, required: usize },

    #[error("window {window} is degenerate: {len} outcomes")]
    DegenerateWindow { window: &'static str, len: usize },

    #[error("forecast computation failed: {reason}")]
    ComputationFailure { reason: String },
}

impl SicboErrorCode for ForecastError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientHistory { .. } => error_code::INSUFFICIENT_HISTORY,
            Self::DegenerateWindow { .. } => error_code::DEGENERATE_WINDOW,
            Self::ComputationFailure { .. } => error_code::COMPUTATION_FAILURE,
        }
    }
}

/// Result alias for forecast operations.
pub type ForecastResult<T> = Result<T, ForecastError>;
