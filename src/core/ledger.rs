//! Punch ledger: today's punch list, the append-only history and the
//! day-rollover that moves a finished day into history.
//!
//! Everything here is pure: state goes in, state comes out. Persisting
//! it is the job of [`crate::core::session::Session`].

use crate::core::calculator::compute_daily;
use crate::models::day_record::DayRecord;
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerState {
    pub today_punches: Vec<PunchEvent>, // newest first
    pub date_key: String,
    pub history: Vec<DayRecord>,
}

/// Builds the ledger state from whatever was persisted.
///
/// - same day → today's list is resumed as-is
/// - stale day → that day is archived (at most once per date key) and
///   today's list starts empty
/// - nothing persisted → empty list for `today_key`
pub fn initialize(
    persisted_today: Option<Vec<PunchEvent>>,
    persisted_date_key: Option<String>,
    persisted_history: Option<Vec<DayRecord>>,
    today_key: &str,
) -> LedgerState {
    let mut history = persisted_history.unwrap_or_default();

    match (persisted_today, persisted_date_key) {
        (Some(punches), Some(key)) if key == today_key => LedgerState {
            today_punches: punches,
            date_key: key,
            history,
        },
        (persisted, stale_key) => {
            if let (Some(punches), Some(key)) = (persisted, stale_key) {
                archive_day(&mut history, &key, &punches);
            }

            LedgerState {
                today_punches: Vec::new(),
                date_key: today_key.to_string(),
                history,
            }
        }
    }
}

/// Freezes `punches` into a history entry for `date_key`.
///
/// Returns the new record, or `None` when the date was already archived.
pub fn archive_day(
    history: &mut Vec<DayRecord>,
    date_key: &str,
    punches: &[PunchEvent],
) -> Option<DayRecord> {
    if history.iter().any(|h| h.date == date_key) {
        tracing::debug!(date = date_key, "day already archived, skipping");
        return None;
    }

    let stats = compute_daily(punches);
    let record = DayRecord::new(date_key, stats.balance);
    history.push(record.clone());

    tracing::info!(
        date = date_key,
        punches = punches.len(),
        balance = stats.balance,
        "archived day"
    );

    Some(record)
}

/// Records a new punch at `now` and puts it at the front of the list.
///
/// The kind follows the positional rule on the current list length.
/// The id is the creation time in ms, bumped past any existing id so it
/// is never reused.
pub fn add_punch(today_punches: &mut Vec<PunchEvent>, now: DateTime<Local>) -> PunchEvent {
    let kind = PunchKind::for_position(today_punches.len());

    let now_ms = now.timestamp_millis();
    let id = match today_punches.iter().map(|p| p.id).max() {
        Some(last) if last >= now_ms => last + 1,
        _ => now_ms,
    };

    let punch = PunchEvent::new(id, now, kind);
    today_punches.insert(0, punch.clone());
    punch
}

/// Drops every punch of today. History is untouched.
pub fn clear_today(today_punches: &mut Vec<PunchEvent>) {
    today_punches.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn five_punches_follow_the_positional_rule() {
        let mut today = Vec::new();
        let kinds: Vec<PunchKind> = (0..5)
            .map(|i| add_punch(&mut today, local(2024, 3, 5, 8 + i, 0)).kind)
            .collect();

        assert_eq!(
            kinds,
            vec![
                PunchKind::Entry,
                PunchKind::BreakStart,
                PunchKind::BreakEnd,
                PunchKind::Exit,
                PunchKind::ExtraEntry,
            ]
        );
        // newest first
        assert_eq!(today[0].kind, PunchKind::ExtraEntry);
        assert_eq!(today[4].kind, PunchKind::Entry);
    }

    #[test]
    fn punch_carries_display_time_and_timestamp() {
        let mut today = Vec::new();
        let now = local(2024, 3, 5, 8, 7);
        let p = add_punch(&mut today, now);

        assert_eq!(p.time, "08:07");
        assert_eq!(p.timestamp, now.timestamp_millis());
        assert_eq!(p.id, now.timestamp_millis());
    }

    #[test]
    fn ids_stay_unique_within_the_same_millisecond() {
        let mut today = Vec::new();
        let now = local(2024, 3, 5, 8, 0);
        let a = add_punch(&mut today, now);
        let b = add_punch(&mut today, now);
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
    }

    #[test]
    fn same_day_resumes_persisted_punches() {
        let mut punches = Vec::new();
        add_punch(&mut punches, local(2024, 3, 5, 8, 0));

        let state = initialize(
            Some(punches.clone()),
            Some("05/03/2024".into()),
            None,
            "05/03/2024",
        );

        assert_eq!(state.today_punches, punches);
        assert_eq!(state.date_key, "05/03/2024");
        assert!(state.history.is_empty());
    }

    #[test]
    fn stale_day_is_archived_and_today_reset() {
        let mut punches = Vec::new();
        add_punch(&mut punches, local(2024, 3, 4, 8, 0));

        let state = initialize(Some(punches), Some("04/03/2024".into()), None, "05/03/2024");

        assert!(state.today_punches.is_empty());
        assert_eq!(state.date_key, "05/03/2024");
        assert_eq!(state.history, vec![DayRecord::new("04/03/2024", -480)]);
    }

    #[test]
    fn rollover_twice_keeps_one_entry() {
        let mut punches = Vec::new();
        add_punch(&mut punches, local(2024, 3, 4, 8, 0));
        add_punch(&mut punches, local(2024, 3, 4, 17, 0));

        let first = initialize(
            Some(punches.clone()),
            Some("04/03/2024".into()),
            None,
            "05/03/2024",
        );
        let second = initialize(
            Some(punches),
            Some("04/03/2024".into()),
            Some(first.history.clone()),
            "05/03/2024",
        );

        assert_eq!(second.history, vec![DayRecord::new("04/03/2024", 60)]);
    }

    #[test]
    fn archived_balance_is_never_overwritten() {
        let mut history = vec![DayRecord::new("04/03/2024", 30)];
        assert!(archive_day(&mut history, "04/03/2024", &[]).is_none());
        assert_eq!(history, vec![DayRecord::new("04/03/2024", 30)]);
    }

    #[test]
    fn nothing_persisted_starts_fresh() {
        let state = initialize(None, None, None, "05/03/2024");
        assert_eq!(
            state,
            LedgerState {
                today_punches: vec![],
                date_key: "05/03/2024".into(),
                history: vec![],
            }
        );
    }

    #[test]
    fn date_key_without_punches_does_not_archive() {
        let state = initialize(
            None,
            Some("04/03/2024".into()),
            Some(vec![DayRecord::new("01/03/2024", 5)]),
            "05/03/2024",
        );
        assert_eq!(state.history, vec![DayRecord::new("01/03/2024", 5)]);
    }

    #[test]
    fn cleared_stale_day_archives_as_full_deficit() {
        let state = initialize(Some(vec![]), Some("04/03/2024".into()), None, "05/03/2024");
        assert_eq!(state.history, vec![DayRecord::new("04/03/2024", -480)]);
    }

    #[test]
    fn clear_today_leaves_history_alone() {
        let mut state = initialize(
            None,
            None,
            Some(vec![DayRecord::new("04/03/2024", 12)]),
            "05/03/2024",
        );
        add_punch(&mut state.today_punches, local(2024, 3, 5, 8, 0));
        clear_today(&mut state.today_punches);

        assert!(state.today_punches.is_empty());
        assert_eq!(state.history.len(), 1);
    }
}
