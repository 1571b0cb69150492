use crate::models::punch::PunchEvent;

/// A work period opened by Entry/BreakEnd and (maybe) closed by
/// BreakStart/Exit.
#[derive(Debug, Clone)]
pub struct Period {
    pub open: PunchEvent,
    pub close: Option<PunchEvent>,
    pub duration_minutes: i64,
}

#[derive(Debug, Default, Clone)]
pub struct Timeline {
    pub punches: Vec<PunchEvent>, // oldest first
    pub periods: Vec<Period>,
    pub total_worked_minutes: i64,
}

/// Punches oldest-first.
///
/// Stored lists are newest-first, so the list is reversed and then
/// stably sorted by timestamp: equal timestamps keep insertion order.
pub fn chronological(punches: &[PunchEvent]) -> Vec<PunchEvent> {
    let mut sorted: Vec<PunchEvent> = punches.iter().rev().cloned().collect();
    sorted.sort_by_key(|p| p.timestamp);
    sorted
}

/// Whole minutes between two epoch-ms timestamps, floored.
///
/// Timestamps come from the store and may be anything; a gap that does
/// not fit an `i64` counts as zero.
fn elapsed_minutes(open_ms: i64, close_ms: i64) -> i64 {
    match close_ms.checked_sub(open_ms) {
        Some(ms) => ms.div_euclid(60_000),
        None => {
            tracing::warn!(open_ms, close_ms, "punch timestamps out of range, period ignored");
            0
        }
    }
}

pub fn build_timeline(punches: &[PunchEvent]) -> Timeline {
    if punches.is_empty() {
        return Timeline::default();
    }

    let sorted = chronological(punches);

    let mut periods: Vec<Period> = Vec::new();
    let mut open: Option<PunchEvent> = None;
    let mut total: i64 = 0;

    for p in &sorted {
        if p.kind.opens_period() {
            // already open → ignored, no reset
            if open.is_none() {
                open = Some(p.clone());
            }
        } else if p.kind.closes_period() {
            // nothing open → ignored, no negative contribution
            if let Some(start) = open.take() {
                let duration = elapsed_minutes(start.timestamp, p.timestamp);
                total = total.saturating_add(duration);

                periods.push(Period {
                    open: start,
                    close: Some(p.clone()),
                    duration_minutes: duration,
                });
            }
        }
        // ExtraEntry, Unknown: inert
    }

    // Unfinished period: listed, but counts zero
    if let Some(start) = open {
        periods.push(Period {
            open: start,
            close: None,
            duration_minutes: 0,
        });
    }

    Timeline {
        punches: sorted,
        periods,
        total_worked_minutes: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::punch_kind::PunchKind;

    fn punch(id: i64, ts: i64, kind: PunchKind) -> PunchEvent {
        PunchEvent {
            id,
            time: String::new(),
            kind,
            timestamp: ts,
        }
    }

    #[test]
    fn reorders_newest_first_input() {
        let newest_first = vec![
            punch(3, 3_000, PunchKind::BreakEnd),
            punch(2, 2_000, PunchKind::BreakStart),
            punch(1, 1_000, PunchKind::Entry),
        ];

        let ids: Vec<i64> = chronological(&newest_first).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn open_period_is_kept_but_not_counted() {
        let tl = build_timeline(&[
            punch(3, 7_200_000, PunchKind::BreakEnd),
            punch(2, 3_600_000, PunchKind::BreakStart),
            punch(1, 0, PunchKind::Entry),
        ]);

        assert_eq!(tl.periods.len(), 2);
        assert_eq!(tl.periods[0].duration_minutes, 60);
        assert!(tl.periods[1].close.is_none());
        assert_eq!(tl.total_worked_minutes, 60);
    }

    #[test]
    fn partial_minutes_are_floored() {
        let tl = build_timeline(&[
            punch(2, 119_999, PunchKind::Exit),
            punch(1, 0, PunchKind::Entry),
        ]);
        assert_eq!(tl.total_worked_minutes, 1);
    }

    #[test]
    fn shuffled_input_gives_the_same_periods() {
        let tl = build_timeline(&[
            punch(3, 3 * 3_600_000, PunchKind::BreakEnd),
            punch(1, 0, PunchKind::Entry),
            punch(4, 7 * 3_600_000, PunchKind::Exit),
            punch(2, 2 * 3_600_000, PunchKind::BreakStart),
        ]);

        let ids: Vec<i64> = tl.punches.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(tl.periods.len(), 2);
        assert_eq!(tl.periods[0].open.id, 1);
        assert_eq!(tl.periods[1].open.id, 3);
        assert_eq!(tl.total_worked_minutes, 6 * 60);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        // stored newest first: the Exit was recorded after the Entry
        let tl = build_timeline(&[
            punch(2, 60_000, PunchKind::Exit),
            punch(1, 60_000, PunchKind::Entry),
            punch(0, 0, PunchKind::ExtraEntry),
        ]);

        let ids: Vec<i64> = tl.punches.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(tl.periods.len(), 1);
        assert_eq!(tl.periods[0].close.as_ref().map(|p| p.id), Some(2));
        assert_eq!(tl.total_worked_minutes, 0);
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let tl = build_timeline(&[
            punch(2, 5_000_000_000_000_000_000, PunchKind::Exit),
            punch(1, -5_000_000_000_000_000_000, PunchKind::Entry),
        ]);
        assert_eq!(tl.periods.len(), 1);
        assert_eq!(tl.total_worked_minutes, 0);

        let tl = build_timeline(&[
            punch(2, i64::MAX, PunchKind::Exit),
            punch(1, 0, PunchKind::Entry),
        ]);
        assert_eq!(tl.total_worked_minutes, i64::MAX / 60_000);
    }
}
