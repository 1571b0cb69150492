use super::punch_kind::PunchKind;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single clock-in/out event.
///
/// JSON shape: `{ "id": number, "time": string, "type": string, "timestamp": number }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    pub id: i64,        // creation time in ms, bumped on collisions
    pub time: String,   // "HH:MM", display only
    #[serde(rename = "type")]
    pub kind: PunchKind,
    pub timestamp: i64, // epoch milliseconds
}

impl PunchEvent {
    pub fn new(id: i64, at: DateTime<Local>, kind: PunchKind) -> Self {
        Self {
            id,
            time: at.format("%H:%M").to_string(),
            kind,
            timestamp: at.timestamp_millis(),
        }
    }
}
