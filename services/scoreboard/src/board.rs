//! Scoreboard registry
//!
//! Owns every active match and is the only place they are created, scored
//! and removed. Records are kept in insertion order; that order is what
//! `get_matches` returns and what breaks the final summary tie.

use tracing::{debug, info};
use types::errors::ScoreboardError;
use types::numeric::Score;
use types::record::MatchRecord;
use types::team::MatchKey;

use crate::clock::{Clock, DynClock, SystemClock};
use crate::config::ScoreboardConfig;
use crate::summary::{sorted_summary, SummarySnapshot};

/// Registry of matches in progress
///
/// Every operation checks its input before touching state, so a failed call
/// leaves the board exactly as it was.
pub struct Scoreboard<C: Clock = SystemClock> {
    /// Active matches in insertion order
    matches: Vec<MatchRecord>,
    /// Start-time source
    clock: C,
}

impl Scoreboard<SystemClock> {
    /// Create an empty scoreboard stamped with wall-clock start times
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for Scoreboard<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard<DynClock> {
    /// Create an empty scoreboard using the configured clock
    pub fn from_config(config: &ScoreboardConfig) -> Self {
        info!(clock = ?config.clock, "Scoreboard configured");
        Self::with_clock(config.build_clock())
    }
}

impl<C: Clock> Scoreboard<C> {
    /// Create an empty scoreboard with a specific clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            matches: Vec::new(),
            clock,
        }
    }

    /// Start a new match at 0-0
    ///
    /// Names are trimmed first. Fails if either is blank, if both are the
    /// same team, or if this exact (home, away) pair is already live. The
    /// reversed pair is a different match and may run at the same time.
    ///
    /// Returns a copy of the new record; later changes go through
    /// `update_score`.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<MatchRecord, ScoreboardError> {
        let key = MatchKey::new(home_team, away_team)?;

        if self.matches.iter().any(|record| record.key() == &key) {
            return Err(ScoreboardError::MatchAlreadyStarted);
        }

        let record = MatchRecord::new(key, self.clock.now());
        debug!(
            match_id = %record.match_id(),
            home = %record.home_team(),
            away = %record.away_team(),
            start_time = record.start_time().as_nanos(),
            "Match started"
        );

        self.matches.push(record.clone());
        Ok(record)
    }

    /// Replace the score of a live match
    ///
    /// Both scores are validated (home first) before the match is looked
    /// up, so a bad score is reported even for an unknown pair. Scores are
    /// overwritten, not added to.
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: f64,
        away_score: f64,
    ) -> Result<(), ScoreboardError> {
        let home_score = Score::try_new(home_score)?;
        let away_score = Score::try_new(away_score)?;

        let index = self
            .position(home_team, away_team)
            .ok_or(ScoreboardError::MatchNotFound)?;

        let record = &mut self.matches[index];
        record.update_score(home_score, away_score);
        debug!(
            match_id = %record.match_id(),
            home = %record.home_team(),
            away = %record.away_team(),
            home_score = home_score.as_f64(),
            away_score = away_score.as_f64(),
            "Score updated"
        );

        Ok(())
    }

    /// Remove a live match
    ///
    /// The pair is free to be started again straight away. Remaining
    /// matches keep their relative order. Returns the removed record.
    pub fn finish_match(&mut self, home_team: &str, away_team: &str) -> Result<MatchRecord, ScoreboardError> {
        let index = self
            .position(home_team, away_team)
            .ok_or(ScoreboardError::MatchNotFound)?;

        // Vec::remove shifts the tail, preserving order
        let record = self.matches.remove(index);
        debug!(
            match_id = %record.match_id(),
            home = %record.home_team(),
            away = %record.away_team(),
            "Match finished"
        );

        Ok(record)
    }

    /// Active matches in insertion order
    pub fn get_matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Active matches in summary order
    ///
    /// Highest total first, then most recently started, then insertion
    /// order. Sorts references only; `get_matches` is unaffected.
    pub fn get_summary(&self) -> Vec<&MatchRecord> {
        sorted_summary(&self.matches)
    }

    /// Owned copy of the current summary
    pub fn summary_snapshot(&self) -> SummarySnapshot {
        SummarySnapshot::capture(self.get_summary())
    }

    /// Look up a live match by (untrimmed) team names
    pub fn find(&self, home_team: &str, away_team: &str) -> Option<&MatchRecord> {
        self.position(home_team, away_team).map(|index| &self.matches[index])
    }

    /// Number of active matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn position(&self, home_team: &str, away_team: &str) -> Option<usize> {
        self.matches
            .iter()
            .position(|record| record.key().matches(home_team, away_team))
    }
}
