//! # sicbo-session
//!
//! Prediction session orchestrating the forecaster for a live feed.
//!
//! Per appended outcome, in one step:
//! 1. Grade the previously exposed call against the actual side
//! 2. Append the outcome to the rolling history
//! 3. Recompute the forecast and expose the call chosen by the
//!    inversion policy (the opposite of the engine's call by default)
//!
//! `SharedSession` wraps that step in a single mutex for concurrent
//! ingestion and readers.

pub mod accuracy;
pub mod inversion;
pub mod session;
pub mod shared;
pub mod snapshot;

pub use accuracy::{AccuracyTracker, Grade};
pub use inversion::InversionPolicy;
pub use session::{PendingCall, RoundReport, Session};
pub use shared::SharedSession;
pub use snapshot::SessionSnapshot;
