/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Balance color: ≥0 → green, <0 → red
pub fn color_for_balance(value: i64) -> &'static str {
    if value >= 0 { GREEN } else { RED }
}

/// Wraps `text` in the balance color of `value`.
pub fn colorize_balance(text: &str, value: i64) -> String {
    format!("{}{}{}", color_for_balance(value), text, RESET)
}

pub fn dimmed(text: &str) -> String {
    format!("{GREY}{text}{RESET}")
}
