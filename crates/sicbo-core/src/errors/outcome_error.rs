//! Outcome construction errors.

use super::error_code::{self, SicboErrorCode};

/// Errors raised when building an [`Outcome`](crate::Outcome) from raw values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    #[error("total {total} is outside 3..=18")]
    TotalOutOfRange { total: u32 },

    #[error("die face {face} is outside 1..=6")]
    FaceOutOfRange { face: u32 },
}

impl SicboErrorCode for OutcomeError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_OUTCOME
    }
}
