//! # sicbo-forecast
//!
//! Statistical forecasting engine for three-dice outcomes.
//!
//! ## 5 Analysis Layers
//!
//! | Layer | Input | Output |
//! |-------|-------|--------|
//! | Weighted frequency | all windows | recency-weighted high/low/even/odd sums + total histogram |
//! | Streak | ultra-short window | current/max/average runs per state |
//! | Pattern | medium window | best historical H/L pattern match per length |
//! | Anomaly | full history | z-score outliers, recent ones discount the histogram |
//! | Trend | ultra-short vs short | up/down/neutral drift of the high ratio |
//!
//! ## Fusion
//!
//! Layer outputs are combined with fixed weights
//! (stats 0.4, streak 0.3, patterns 0.2, trend 0.1) into a high/low call,
//! a 50..=98 confidence, a top-5 total forecast, and a short report.

pub mod engine;
pub mod fusion;
pub mod layers;
pub mod sampler;

pub use engine::ForecastEngine;
pub use layers::LayerResults;
pub use sampler::{Period, WindowSet};
