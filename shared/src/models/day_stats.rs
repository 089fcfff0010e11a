//! Day counter model

use serde::{Deserialize, Serialize};

/// Running counters for the current calendar day
///
/// Reset whenever the stored `date` no longer matches today; the reset happens
/// before the first increment (or read) of the new day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayStats {
    /// Calendar date (YYYY-MM-DD) the counters belong to
    pub date: String,
    /// Revenue in currency units
    pub revenue: i64,
    pub sessions: i64,
}

impl DayStats {
    /// Zeroed counters for the given date
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            revenue: 0,
            sessions: 0,
        }
    }
}
