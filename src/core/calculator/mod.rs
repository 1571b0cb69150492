pub mod daily;
pub mod monthly;
pub mod timeline;

pub use daily::compute_daily;
pub use monthly::compute_monthly_balance;

/// Fixed daily goal: 8 hours.
pub const DAILY_GOAL_MINUTES: i64 = 8 * 60;
