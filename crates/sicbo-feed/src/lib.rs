//! # sicbo-feed
//!
//! Wire side of the forecaster: decodes the game feed's JSON array frames
//! into round events, encodes the outbound handshake, and drives a
//! [`SharedSession`](sicbo_session::SharedSession) from any line source.
//!
//! Inbound frames of interest have the shape `[5, {"d": {...}}]`:
//!
//! | `cmd` | Fields | Event |
//! |-------|--------|-------|
//! | 2006 | `sid`, `d1`, `d2`, `d3` | [`FeedEvent::RoundResult`] |
//! | 2005 | `sid`, `md5` | [`FeedEvent::UpcomingRound`] |
//!
//! Everything else decodes to [`FeedEvent::Ignored`].

pub mod frames;
pub mod ingest;
pub mod status;

pub use frames::{decode_frame, FeedEvent, FrameEncoder};
pub use ingest::{FeedIngestor, IngestStats};
pub use status::StatusSnapshot;
