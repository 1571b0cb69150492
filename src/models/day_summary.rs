use serde::Serialize;

/// Worked time and balance of a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub minutes_worked: i64,
    pub balance: i64,
}

/// Figures shown for the current day: today's stats plus the balance of
/// the whole month so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TodayStats {
    pub minutes_worked: i64,
    pub balance: i64,
    pub monthly_balance: i64,
}
