//! Seams between the session and the forecasting engine.

pub mod forecaster;

pub use forecaster::IForecaster;
