//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Minutes → "[-]HH:MM".
///
/// Negative values carry a leading "-", positive values no sign.
/// Hours are padded to two digits but may grow beyond them.
pub fn minutes_to_hm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Uppercases the first character (used for the long date line).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_signed_minutes() {
        assert_eq!(minutes_to_hm(0), "00:00");
        assert_eq!(minutes_to_hm(480), "08:00");
        assert_eq!(minutes_to_hm(-480), "-08:00");
        assert_eq!(minutes_to_hm(-5), "-00:05");
        assert_eq!(minutes_to_hm(6000), "100:00");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize_first("saturday, 17 october"), "Saturday, 17 october");
        assert_eq!(capitalize_first(""), "");
    }
}
