//! Match record types
//!
//! A record holds the immutable identity of a live match (teams, start time)
//! and its mutable score. It performs no validation of its own; the registry
//! decides what is legal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::ids::MatchId;
use crate::numeric::Score;
use crate::team::{MatchKey, TeamName};

/// Instant a match was started, in Unix nanos
///
/// Only used to order matches with equal totals; it need not be wall-clock
/// time as long as it grows with creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StartTime(i64);

impl StartTime {
    pub fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    /// Interpret as a UTC wall-clock instant
    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }
}

impl From<DateTime<Utc>> for StartTime {
    fn from(dt: DateTime<Utc>) -> Self {
        // Out-of-range instants (beyond year 2262) clamp to the max
        Self(dt.timestamp_nanos_opt().unwrap_or(i64::MAX))
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A match in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    match_id: MatchId,
    key: MatchKey,
    home_score: Score,
    away_score: Score,
    start_time: StartTime,
}

impl MatchRecord {
    /// Create a new record with a 0-0 score
    pub fn new(key: MatchKey, start_time: StartTime) -> Self {
        Self {
            match_id: MatchId::new(),
            key,
            home_score: Score::zero(),
            away_score: Score::zero(),
            start_time,
        }
    }

    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    pub fn key(&self) -> &MatchKey {
        &self.key
    }

    pub fn home_team(&self) -> &TeamName {
        &self.key.home
    }

    pub fn away_team(&self) -> &TeamName {
        &self.key.away
    }

    pub fn home_score(&self) -> Score {
        self.home_score
    }

    pub fn away_score(&self) -> Score {
        self.away_score
    }

    pub fn start_time(&self) -> StartTime {
        self.start_time
    }

    /// Combined score of both sides
    ///
    /// Saturates at `f64::MAX`, so the total is always finite.
    pub fn total_score(&self) -> f64 {
        (self.home_score.as_f64() + self.away_score.as_f64()).min(f64::MAX)
    }

    /// Order two records by combined score without summing
    ///
    /// Halving first keeps the sum finite, so totals past `f64::MAX` still
    /// compare by their real size.
    pub fn cmp_total(&self, other: &Self) -> Ordering {
        self.half_total().total_cmp(&other.half_total())
    }

    fn half_total(&self) -> f64 {
        self.home_score.as_f64() / 2.0 + self.away_score.as_f64() / 2.0
    }

    /// Overwrite both scores
    ///
    /// Replaces rather than increments. No checks happen here.
    pub fn update_score(&mut self, home_score: Score, away_score: Score) {
        self.home_score = home_score;
        self.away_score = away_score;
    }
}

/// Renders the scoreboard line, e.g. `Mexico 0 - 5 Canada`
impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.key.home, self.home_score, self.away_score, self.key.away
        )
    }
}
