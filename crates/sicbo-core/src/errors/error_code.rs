//! SicboErrorCode trait for presentation-layer error codes.

/// Every error enum implements this to provide a stable error code
/// string for whatever reporting surface sits on top of the session.
pub trait SicboErrorCode {
    /// Returns the error code string (e.g., "INSUFFICIENT_HISTORY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_OUTCOME: &str = "INVALID_OUTCOME";
pub const INSUFFICIENT_HISTORY: &str = "INSUFFICIENT_HISTORY";
pub const DEGENERATE_WINDOW: &str = "DEGENERATE_WINDOW";
pub const COMPUTATION_FAILURE: &str = "COMPUTATION_FAILURE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FEED_MALFORMED: &str = "FEED_MALFORMED";
pub const FEED_IO: &str = "FEED_IO";
