//! Scoreboard configuration
//!
//! Hosts build a `ScoreboardConfig` in code or load it from JSON.

use serde::{Deserialize, Serialize};

use crate::clock::{DynClock, LogicalClock, SystemClock};

/// Errors loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid scoreboard config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which start-time source the registry uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Wall-clock Unix nanos, forced strictly increasing
    #[default]
    System,
    /// Counter starting at `logical_origin`
    Logical,
}

/// Configuration for a scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreboardConfig {
    /// Start-time source.
    pub clock: ClockKind,
    /// First value handed out by the logical clock.
    pub logical_origin: i64,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            clock: ClockKind::System,
            logical_origin: 0,
        }
    }
}

impl ScoreboardConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the configured clock
    pub fn build_clock(&self) -> DynClock {
        match self.clock {
            ClockKind::System => Box::new(SystemClock::new()),
            ClockKind::Logical => Box::new(LogicalClock::new(self.logical_origin)),
        }
    }
}
