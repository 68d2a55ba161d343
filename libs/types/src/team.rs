//! Team names and match keys
//!
//! Names are compared after trimming surrounding whitespace. A match is keyed
//! by the ordered (home, away) pair, so a reversed fixture is a different key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ScoreboardError;

/// Trim surrounding whitespace from a raw team name
///
/// No validation; used for lookups where an empty name simply finds nothing.
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}

/// A normalized, non-empty team name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Normalize and validate a team name
    pub fn parse(raw: &str) -> Result<Self, ScoreboardError> {
        let trimmed = normalize(raw);
        if trimmed.is_empty() {
            return Err(ScoreboardError::TeamNamesRequired);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TeamName {
    type Error = ScoreboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl PartialEq<str> for TeamName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TeamName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered (home, away) pair identifying an active match
///
/// Deserialization goes through `MatchKey::new`, so a decoded key obeys the
/// same rules as a freshly started one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMatchKey")]
pub struct MatchKey {
    pub home: TeamName,
    pub away: TeamName,
}

impl MatchKey {
    /// Build a key for a new fixture
    ///
    /// Fails with `TeamNamesRequired` if either name is blank, then with
    /// `TeamsMustDiffer` if both normalize to the same name.
    pub fn new(home: &str, away: &str) -> Result<Self, ScoreboardError> {
        let home = TeamName::parse(home)?;
        let away = TeamName::parse(away)?;

        if home == away {
            return Err(ScoreboardError::TeamsMustDiffer);
        }

        Ok(Self { home, away })
    }

    /// Check whether this key matches a raw (unnormalized) pair
    pub fn matches(&self, home: &str, away: &str) -> bool {
        self.home == normalize(home) && self.away == normalize(away)
    }
}

/// Wire form of a key before validation
#[derive(Deserialize)]
struct RawMatchKey {
    home: String,
    away: String,
}

impl TryFrom<RawMatchKey> for MatchKey {
    type Error = ScoreboardError;

    fn try_from(raw: RawMatchKey) -> Result<Self, Self::Error> {
        Self::new(&raw.home, &raw.away)
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}
