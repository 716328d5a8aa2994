//! FeedIngestor: applies decoded frames to a shared session.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use sicbo_core::errors::{FeedError, SicboErrorCode};
use sicbo_core::traits::IForecaster;
use sicbo_core::{RoundResult, UpcomingRound};
use sicbo_forecast::ForecastEngine;
use sicbo_session::{RoundReport, SharedSession};
use tracing::{debug, info, warn};

use crate::frames::{decode_frame, FeedEvent};
use crate::status::StatusSnapshot;

/// Frame counters since the ingestor was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    pub frames: u64,
    pub rounds: u64,
    pub upcoming: u64,
    pub ignored: u64,
    pub errors: u64,
}

/// Drives a session from feed frames and remembers the round metadata
/// the status view needs.
///
/// A bad frame is counted and skipped; it never stops ingestion.
pub struct FeedIngestor<F: IForecaster = ForecastEngine> {
    session: SharedSession<F>,
    last_round: Option<RoundResult>,
    upcoming: Option<UpcomingRound>,
    stats: IngestStats,
}

impl<F: IForecaster> FeedIngestor<F> {
    pub fn new(session: SharedSession<F>) -> Self {
        Self {
            session,
            last_round: None,
            upcoming: None,
            stats: IngestStats::default(),
        }
    }

    /// Handle to the session, for readers running alongside ingestion.
    pub fn session(&self) -> &SharedSession<F> {
        &self.session
    }

    /// Decode and apply one frame.
    ///
    /// Returns the round report when the frame finished a round.
    pub fn handle_frame(&mut self, line: &str) -> Result<Option<RoundReport>, FeedError> {
        self.stats.frames += 1;
        match decode_frame(line) {
            Ok(event) => Ok(self.apply(event)),
            Err(e) => {
                self.stats.errors += 1;
                Err(e)
            }
        }
    }

    /// Apply an already decoded event.
    pub fn apply(&mut self, event: FeedEvent) -> Option<RoundReport> {
        match event {
            FeedEvent::RoundResult(round) => {
                self.stats.rounds += 1;
                let report = self.session.append_outcome(round.outcome());
                debug!(round_id = round.round_id(), dice = ?round.dice(), "round result applied");
                self.last_round = Some(round);
                Some(report)
            }
            FeedEvent::UpcomingRound(upcoming) => {
                self.stats.upcoming += 1;
                debug!(round_id = upcoming.round_id, md5 = %upcoming.md5, "upcoming round");
                self.upcoming = Some(upcoming);
                None
            }
            FeedEvent::Ignored => {
                self.stats.ignored += 1;
                None
            }
        }
    }

    /// Feed every line of `reader` through [`handle_frame`](Self::handle_frame).
    ///
    /// Blank lines are skipped. Decode failures are logged and skipped;
    /// only a read failure ends ingestion early.
    pub fn ingest_lines<R: BufRead>(&mut self, reader: R) -> Result<IngestStats, FeedError> {
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Err(e) = self.handle_frame(line) {
                warn!(line = line_no + 1, code = e.error_code(), error = %e, "skipping bad frame");
            }
        }

        info!(
            frames = self.stats.frames,
            rounds = self.stats.rounds,
            upcoming = self.stats.upcoming,
            ignored = self.stats.ignored,
            errors = self.stats.errors,
            "ingestion finished"
        );
        Ok(self.stats)
    }

    pub fn last_round(&self) -> Option<&RoundResult> {
        self.last_round.as_ref()
    }

    pub fn upcoming(&self) -> Option<&UpcomingRound> {
        self.upcoming.as_ref()
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// `None` until both a finished round and an upcoming round were seen.
    pub fn status(&self) -> Option<StatusSnapshot> {
        let last = self.last_round.as_ref()?;
        let upcoming = self.upcoming.as_ref()?;
        Some(StatusSnapshot::new(last, upcoming, self.session.snapshot()))
    }
}

impl Default for FeedIngestor<ForecastEngine> {
    fn default() -> Self {
        Self::new(SharedSession::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sicbo_session::Grade;

    #[test]
    fn status_needs_round_and_upcoming() {
        let mut ingestor = FeedIngestor::default();
        assert!(ingestor.status().is_none());

        ingestor
            .handle_frame(r#"[5,{"d":{"cmd":2006,"sid":1,"d1":6,"d2":5,"d3":1}}]"#)
            .unwrap();
        assert!(ingestor.status().is_none());

        ingestor
            .handle_frame(r#"[5,{"d":{"cmd":2005,"sid":2,"md5":"ff"}}]"#)
            .unwrap();
        let status = ingestor.status().unwrap();
        assert_eq!(status.round_id, 1);
        assert_eq!(status.dice, [6, 5, 1]);
        assert_eq!(status.total, 12);
        assert_eq!(status.upcoming_round_id, 2);
        assert_eq!(status.md5, "ff");
        assert_eq!(status.pattern, "H");
        assert_eq!(status.call, "Waiting for data (1/10)");
        assert_eq!(status.last_graded, Grade::Unset);
    }

    #[test]
    fn bad_frames_are_counted() {
        let mut ingestor = FeedIngestor::default();
        assert!(ingestor.handle_frame("{").is_err());
        assert!(ingestor.handle_frame("[7]").unwrap().is_none());
        let stats = ingestor.stats();
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.ignored, 1);
    }
}
