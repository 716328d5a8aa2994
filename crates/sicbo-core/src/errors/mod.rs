//! Error handling for sicbo.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod feed_error;
pub mod forecast_error;
pub mod outcome_error;

pub use config_error::ConfigError;
pub use error_code::SicboErrorCode;
pub use feed_error::FeedError;
pub use forecast_error::{ForecastError, ForecastResult};
pub use outcome_error::OutcomeError;
