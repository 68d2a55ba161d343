//! Validated score values
//!
//! Scores arrive as `f64` so hosts can pass through whatever a form field or
//! script produced. Only non-negative finite values are ever stored.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::errors::ScoreboardError;

/// A non-negative, finite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Validate a raw score
    ///
    /// Checks run in a fixed order and the first violation wins:
    /// NaN, positive infinity, negative infinity, then negative.
    pub fn try_new(value: f64) -> Result<Self, ScoreboardError> {
        if value.is_nan() {
            return Err(ScoreboardError::ScoreNaN);
        }
        if value == f64::INFINITY {
            return Err(ScoreboardError::ScoreInfinity);
        }
        if value == f64::NEG_INFINITY {
            return Err(ScoreboardError::ScoreNegInfinity);
        }
        if value < 0.0 {
            return Err(ScoreboardError::ScoreNegative);
        }
        // -0.0 is accepted but stored as 0.0
        Ok(Self(value + 0.0))
    }

    /// Zero score
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Create from a whole number of goals
    pub fn from_goals(goals: u32) -> Self {
        Self(f64::from(goals))
    }

    /// Get the raw value
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::zero()
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Score {
    type Error = ScoreboardError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_accepts_zero_and_positive() {
        assert_eq!(Score::try_new(0.0).unwrap(), Score::zero());
        assert_eq!(Score::try_new(3.0).unwrap().as_f64(), 3.0);
        assert_eq!(Score::try_new(2.5).unwrap().as_f64(), 2.5);
    }

    #[test]
    fn test_score_rejection_order() {
        assert_eq!(Score::try_new(f64::NAN), Err(ScoreboardError::ScoreNaN));
        assert_eq!(Score::try_new(f64::INFINITY), Err(ScoreboardError::ScoreInfinity));
        assert_eq!(Score::try_new(f64::NEG_INFINITY), Err(ScoreboardError::ScoreNegInfinity));
        assert_eq!(Score::try_new(-1.0), Err(ScoreboardError::ScoreNegative));
        assert_eq!(Score::try_new(-0.001), Err(ScoreboardError::ScoreNegative));
    }

    #[test]
    fn test_negative_zero_normalized() {
        let score = Score::try_new(-0.0).unwrap();
        assert!(score.is_zero());
        assert!(score.as_f64().is_sign_positive());
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::from_goals(4).to_string(), "4");
        assert_eq!(Score::try_new(1.5).unwrap().to_string(), "1.5");
    }

    #[test]
    fn test_score_order() {
        assert!(Score::from_goals(3) < Score::from_goals(4));
        assert!(Score::try_new(f64::MAX).unwrap() > Score::from_goals(4));
    }

    #[test]
    fn test_score_deserialize_validates() {
        let score: Score = serde_json::from_str("5").unwrap();
        assert_eq!(score, Score::from_goals(5));
        assert!(serde_json::from_str::<Score>("-1").is_err());
    }

    proptest! {
        #[test]
        fn prop_negative_finite_rejected(value in -1.0e12f64..-1.0e-9) {
            prop_assert_eq!(Score::try_new(value), Err(ScoreboardError::ScoreNegative));
        }

        #[test]
        fn prop_non_negative_finite_accepted(value in 0.0f64..1.0e12) {
            let score = Score::try_new(value).unwrap();
            prop_assert_eq!(score.as_f64(), value);
        }
    }
}
