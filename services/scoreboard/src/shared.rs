//! Thread-safe scoreboard handle
//!
//! The registry itself assumes exclusive access per call. Hosts that touch
//! it from several threads share a `SharedScoreboard`, which serializes all
//! operations behind one lock.

use std::sync::{Arc, Mutex, MutexGuard};

use types::errors::ScoreboardError;
use types::record::MatchRecord;

use crate::board::Scoreboard;
use crate::clock::{Clock, SystemClock};
use crate::summary::SummarySnapshot;

/// Cloneable handle to a scoreboard guarded by a single mutex
pub struct SharedScoreboard<C: Clock = SystemClock> {
    inner: Arc<Mutex<Scoreboard<C>>>,
}

impl<C: Clock> Clone for SharedScoreboard<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedScoreboard<C> {
    pub fn new(board: Scoreboard<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Scoreboard<C>> {
        // Every operation validates before mutating; a poisoned board is still consistent
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn start_match(&self, home_team: &str, away_team: &str) -> Result<MatchRecord, ScoreboardError> {
        self.lock().start_match(home_team, away_team)
    }

    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: f64,
        away_score: f64,
    ) -> Result<(), ScoreboardError> {
        self.lock().update_score(home_team, away_team, home_score, away_score)
    }

    pub fn finish_match(&self, home_team: &str, away_team: &str) -> Result<MatchRecord, ScoreboardError> {
        self.lock().finish_match(home_team, away_team)
    }

    /// Copy of the active matches in insertion order
    pub fn get_matches(&self) -> Vec<MatchRecord> {
        self.lock().get_matches().to_vec()
    }

    /// Copy of the active matches in summary order
    pub fn get_summary(&self) -> Vec<MatchRecord> {
        self.lock().get_summary().into_iter().cloned().collect()
    }

    pub fn summary_snapshot(&self) -> SummarySnapshot {
        self.lock().summary_snapshot()
    }

    /// Run several reads or writes under one lock acquisition
    pub fn with_board<R>(&self, f: impl FnOnce(&mut Scoreboard<C>) -> R) -> R {
        f(&mut *self.lock())
    }
}

impl<C: Clock> From<Scoreboard<C>> for SharedScoreboard<C> {
    fn from(board: Scoreboard<C>) -> Self {
        Self::new(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::LogicalClock;
    use std::thread;

    #[test]
    fn test_shared_operations() {
        let shared = SharedScoreboard::new(Scoreboard::with_clock(LogicalClock::new(1)));

        shared.start_match("Mexico", "Canada").unwrap();
        shared.update_score("Mexico", "Canada", 0.0, 5.0).unwrap();
        shared.start_match("Spain", "Brazil").unwrap();

        let summary = shared.get_summary();
        assert_eq!(summary[0].to_string(), "Mexico 0 - 5 Canada");

        shared.finish_match("Mexico", "Canada").unwrap();
        assert_eq!(shared.get_matches().len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = SharedScoreboard::new(Scoreboard::with_clock(LogicalClock::new(1)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let home = format!("Home {i}");
                    let away = format!("Away {i}");
                    shared.start_match(&home, &away).unwrap();
                    shared.update_score(&home, &away, f64::from(i), 0.0).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let summary = shared.get_summary();
        assert_eq!(summary.len(), 8);
        assert_eq!(summary[0].home_team().as_str(), "Home 7");

        // Start times are unique under the lock
        let mut starts: Vec<i64> = shared
            .get_matches()
            .iter()
            .map(|record| record.start_time().as_nanos())
            .collect();
        starts.sort_unstable();
        starts.dedup();
        assert_eq!(starts.len(), 8);
    }

    #[test]
    fn test_duplicate_start_race_has_one_winner() {
        let shared = SharedScoreboard::new(Scoreboard::with_clock(LogicalClock::new(1)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.start_match("Mexico", "Canada").is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(shared.get_matches().len(), 1);
    }

    #[test]
    fn test_with_board_batches() {
        let shared = SharedScoreboard::new(Scoreboard::with_clock(LogicalClock::new(1)));

        let count = shared.with_board(|board| {
            board.start_match("A", "B").unwrap();
            board.start_match("C", "D").unwrap();
            board.len()
        });

        assert_eq!(count, 2);
    }
}
