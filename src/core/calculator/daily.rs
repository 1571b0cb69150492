use super::DAILY_GOAL_MINUTES;
use super::timeline::build_timeline;
use crate::models::day_summary::DailyStats;
use crate::models::punch::PunchEvent;

/// Worked minutes and balance for a day's punches.
///
/// Input order is not trusted. Only closed periods count; empty or
/// malformed input yields 0 worked minutes and a balance of -480.
pub fn compute_daily(punches: &[PunchEvent]) -> DailyStats {
    let minutes_worked = build_timeline(punches).total_worked_minutes;

    DailyStats {
        minutes_worked,
        balance: minutes_worked - DAILY_GOAL_MINUTES,
    }
}
