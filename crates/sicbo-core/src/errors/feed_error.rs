//! Feed codec and ingestion errors.

use super::error_code::{self, SicboErrorCode};
use super::OutcomeError;

/// Errors raised while decoding or reading feed frames.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("malformed frame: {0}")]
    Malformed(String),

    #[error("invalid round result: {0}")]
    InvalidRound(#[from] OutcomeError),

    #[error("feed read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SicboErrorCode for FeedError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => error_code::FEED_MALFORMED,
            Self::InvalidRound(e) => e.error_code(),
            Self::Io(_) => error_code::FEED_IO,
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}
