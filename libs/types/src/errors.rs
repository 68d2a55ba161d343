//! Error types for the scoreboard
//!
//! Closed error taxonomy using thiserror. Callers switch on the variant (or
//! its stable `code()`), never on the rendered message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way a scoreboard operation can be rejected
///
/// All kinds are caller-correctable input errors; none is transient.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreboardError {
    #[error("Team names are required")]
    TeamNamesRequired,

    #[error("Teams must be different")]
    TeamsMustDiffer,

    #[error("Match already started")]
    MatchAlreadyStarted,

    #[error("Match is not found")]
    MatchNotFound,

    #[error("Score cannot be NaN")]
    #[serde(rename = "SCORE_NAN")]
    ScoreNaN,

    #[error("Score cannot be Infinity")]
    ScoreInfinity,

    #[error("Score cannot be -Infinity")]
    ScoreNegInfinity,

    #[error("Score cannot be negative")]
    ScoreNegative,
}

impl ScoreboardError {
    /// Stable machine-readable identifier for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            ScoreboardError::TeamNamesRequired => "TEAM_NAMES_REQUIRED",
            ScoreboardError::TeamsMustDiffer => "TEAMS_MUST_DIFFER",
            ScoreboardError::MatchAlreadyStarted => "MATCH_ALREADY_STARTED",
            ScoreboardError::MatchNotFound => "MATCH_NOT_FOUND",
            ScoreboardError::ScoreNaN => "SCORE_NAN",
            ScoreboardError::ScoreInfinity => "SCORE_INFINITY",
            ScoreboardError::ScoreNegInfinity => "SCORE_NEG_INFINITY",
            ScoreboardError::ScoreNegative => "SCORE_NEGATIVE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ScoreboardError::TeamNamesRequired.to_string(), "Team names are required");
        assert_eq!(ScoreboardError::TeamsMustDiffer.to_string(), "Teams must be different");
        assert_eq!(ScoreboardError::MatchAlreadyStarted.to_string(), "Match already started");
        assert_eq!(ScoreboardError::MatchNotFound.to_string(), "Match is not found");
        assert_eq!(ScoreboardError::ScoreNaN.to_string(), "Score cannot be NaN");
        assert_eq!(ScoreboardError::ScoreInfinity.to_string(), "Score cannot be Infinity");
        assert_eq!(ScoreboardError::ScoreNegInfinity.to_string(), "Score cannot be -Infinity");
        assert_eq!(ScoreboardError::ScoreNegative.to_string(), "Score cannot be negative");
    }

    #[test]
    fn test_code_matches_serialized_form() {
        let err = ScoreboardError::ScoreNegInfinity;
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, format!("\"{}\"", err.code()));
    }
}
