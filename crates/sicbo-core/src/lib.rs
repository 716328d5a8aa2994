//! # sicbo-core
//!
//! Foundation crate for the sicbo forecaster.
//! Defines the outcome record, the rolling history, prediction models,
//! the forecaster trait, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod history;
pub mod models;
pub mod outcome;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SicboConfig;
pub use errors::{ConfigError, FeedError, ForecastError, OutcomeError, SicboErrorCode};
pub use history::History;
pub use models::{AnalysisReport, Confidence, Prediction};
pub use outcome::{Outcome, Parity, RoundResult, Side, UpcomingRound};
pub use traits::IForecaster;
