//! Records exchanged between the forecasting engine and its callers.

pub mod prediction;

pub use prediction::{AnalysisReport, Confidence, Prediction};
