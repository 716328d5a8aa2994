//! Status view combining the feed's round metadata with session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sicbo_core::{RoundResult, Side, UpcomingRound};
use sicbo_session::{Grade, SessionSnapshot};

/// What a status endpoint reports after the latest round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub round_id: u64,
    pub dice: [u8; 3],
    pub total: u8,
    pub actual: Side,
    /// Last outcomes as `H`/`L` symbols.
    pub pattern: String,
    /// Call for the upcoming round, or the waiting/failure label.
    pub call: String,
    pub exposed_call: Option<Side>,
    pub upcoming_round_id: u64,
    pub md5: String,
    pub last_graded: Grade,
    pub hits: u64,
    pub misses: u64,
    pub captured_at: DateTime<Utc>,
}

impl StatusSnapshot {
    pub fn new(last: &RoundResult, upcoming: &UpcomingRound, session: SessionSnapshot) -> Self {
        let outcome = last.outcome();
        Self {
            round_id: last.round_id(),
            dice: last.dice(),
            total: outcome.total(),
            actual: outcome.side(),
            pattern: session.pattern,
            call: session.call_label,
            exposed_call: session.exposed_call,
            upcoming_round_id: upcoming.round_id,
            md5: upcoming.md5.clone(),
            last_graded: session.last_graded,
            hits: session.hits,
            misses: session.misses,
            captured_at: session.captured_at,
        }
    }
}
