//! Types library for the live football scoreboard
//!
//! This library provides the core type definitions shared by the scoreboard
//! registry and any host that renders it, keeping identity, score validation
//! and the error taxonomy in one place.
//!
//! # Modules
//! - `ids`: Unique identifiers (MatchId)
//! - `team`: Normalized team names and the ordered (home, away) match key
//! - `numeric`: Validated score values
//! - `record`: The match record and its start time
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod team;
pub mod numeric;
pub mod record;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::team::*;
    pub use crate::numeric::*;
    pub use crate::record::*;
    pub use crate::errors::*;
}
