use serde::{Deserialize, Serialize};

/// One archived day of the history ledger.
///
/// `balance` is frozen when the day is archived and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String, // date key "DD/MM/YYYY"
    pub balance: i64, // signed minutes (worked - goal)
}

impl DayRecord {
    pub fn new(date: impl Into<String>, balance: i64) -> Self {
        Self {
            date: date.into(),
            balance,
        }
    }
}
