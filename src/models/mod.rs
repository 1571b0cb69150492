pub mod day_record;
pub mod day_summary;
pub mod punch;
pub mod punch_kind;
