//! Summary ordering
//!
//! Matches with the highest combined score come first. Equal totals put the
//! most recently started match first, and matches that also share a start
//! time keep their registry (insertion) order. The sort is stable and works
//! on a vector of references, so the registry itself is never reordered.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use types::record::{MatchRecord, StartTime};

/// Comparator for summary order
///
/// Returns `Equal` when total and start time tie; callers must use a stable
/// sort so insertion order decides those.
pub fn summary_order(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    b.cmp_total(a)
        .then_with(|| b.start_time().cmp(&a.start_time()))
}

/// Sort records (given in insertion order) into summary order
pub fn sorted_summary(records: &[MatchRecord]) -> Vec<&MatchRecord> {
    let mut summary: Vec<&MatchRecord> = records.iter().collect();
    // `sort_by` is stable
    summary.sort_by(|a, b| summary_order(a, b));
    summary
}

/// One row of a rendered summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// 1-based position in the summary
    pub position: usize,
    pub home_team: String,
    pub away_team: String,
    pub home_score: f64,
    pub away_score: f64,
    pub total_score: f64,
    pub started_at: StartTime,
    /// Display line, e.g. `Mexico 0 - 5 Canada`
    pub line: String,
}

/// Owned, serializable copy of a summary for hosts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub rows: Vec<SummaryRow>,
}

impl SummarySnapshot {
    /// Capture an already-ordered summary
    pub fn capture<'a>(summary: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let rows = summary
            .into_iter()
            .enumerate()
            .map(|(index, record)| SummaryRow {
                position: index + 1,
                home_team: record.home_team().to_string(),
                away_team: record.away_team().to_string(),
                home_score: record.home_score().as_f64(),
                away_score: record.away_score().as_f64(),
                total_score: record.total_score(),
                started_at: record.start_time(),
                line: record.to_string(),
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
