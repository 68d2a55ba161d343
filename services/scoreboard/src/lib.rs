//! Live Football Scoreboard
//!
//! In-process registry of matches currently in progress, with a
//! deterministic summary ordering for display.
//!
//! **Key Invariants:**
//! - At most one active match per ordered (home, away) pair, after trimming
//! - Every operation validates before it mutates (all-or-nothing)
//! - Summary order: total score desc, start time desc, insertion order
//! - Producing a summary never reorders the underlying registry

pub mod board;
pub mod clock;
pub mod config;
pub mod shared;
pub mod summary;

pub use board::Scoreboard;
pub use clock::{Clock, LogicalClock, ManualClock, SystemClock};
pub use config::{ClockKind, ConfigError, ScoreboardConfig};
pub use shared::SharedScoreboard;
pub use summary::SummarySnapshot;
pub use types::errors::ScoreboardError;
pub use types::record::{MatchRecord, StartTime};
