//! Unique identifier types for scoreboard entities
//!
//! Match identity for lookups is the ordered team pair (see `team::MatchKey`).
//! The `MatchId` minted here is a correlation handle for logs and hosts; it
//! uses UUID v7 so ids sort in creation order.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a started match
///
/// A fresh id is minted every time a match is started, so a pair that is
/// finished and started again gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Create a new MatchId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
