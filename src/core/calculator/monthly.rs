use crate::models::day_record::DayRecord;
use crate::utils::date::parse_date_key;
use chrono::{Datelike, NaiveDate};

/// Whether a date key falls in the month and year of `reference`.
/// Malformed keys never match.
pub fn in_month(date_key: &str, reference: NaiveDate) -> bool {
    match parse_date_key(date_key) {
        Some((_, month, year)) => month == reference.month() && year == reference.year(),
        None => {
            tracing::debug!(date = date_key, "skipping history entry with malformed date key");
            false
        }
    }
}

/// Today's balance plus every archived balance of the same month and
/// year as `reference`.
///
/// Entries are matched by their stored date key only; their frozen
/// balance is summed as-is. Malformed keys are skipped. The sum saturates
/// instead of overflowing on absurd stored balances.
pub fn compute_monthly_balance(
    today_balance: i64,
    history: &[DayRecord],
    reference: NaiveDate,
) -> i64 {
    history
        .iter()
        .filter(|day| in_month(&day.date, reference))
        .map(|day| day.balance)
        .fold(today_balance, i64::saturating_add)
}
