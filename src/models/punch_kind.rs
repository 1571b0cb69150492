use serde::{Deserialize, Serialize};

/// Kind of a punch, fixed at creation time from how many punches the day
/// already holds.
///
/// The serialized label is what ends up under `type` in the store. The
/// aliases are the labels written by the old browser front-end. Any other
/// label loads as `Unknown`, which is inert like `ExtraEntry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchKind {
    #[serde(rename = "Entry", alias = "Entrada")]
    Entry,
    #[serde(rename = "Break Start", alias = "Intervalo - Saída")]
    BreakStart,
    #[serde(rename = "Break End", alias = "Intervalo - Volta")]
    BreakEnd,
    #[serde(rename = "Exit", alias = "Saída")]
    Exit,
    #[serde(rename = "Extra Entry", alias = "Registro Extra")]
    ExtraEntry,
    #[serde(other)]
    Unknown,
}

impl PunchKind {
    /// Positional rule: 0 → Entry, 1 → BreakStart, 2 → BreakEnd,
    /// 3 → Exit, anything after → ExtraEntry.
    pub fn for_position(count: usize) -> Self {
        match count {
            0 => PunchKind::Entry,
            1 => PunchKind::BreakStart,
            2 => PunchKind::BreakEnd,
            3 => PunchKind::Exit,
            _ => PunchKind::ExtraEntry,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::Entry => "Entry",
            PunchKind::BreakStart => "Break Start",
            PunchKind::BreakEnd => "Break End",
            PunchKind::Exit => "Exit",
            PunchKind::ExtraEntry => "Extra Entry",
            PunchKind::Unknown => "Unknown",
        }
    }

    /// Entry and BreakEnd start a work period.
    pub fn opens_period(&self) -> bool {
        matches!(self, PunchKind::Entry | PunchKind::BreakEnd)
    }

    /// BreakStart and Exit end a work period.
    pub fn closes_period(&self) -> bool {
        matches!(self, PunchKind::BreakStart | PunchKind::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_rule_collapses_after_fourth_punch() {
        let kinds: Vec<PunchKind> = (0..7).map(PunchKind::for_position).collect();
        assert_eq!(
            kinds,
            vec![
                PunchKind::Entry,
                PunchKind::BreakStart,
                PunchKind::BreakEnd,
                PunchKind::Exit,
                PunchKind::ExtraEntry,
                PunchKind::ExtraEntry,
                PunchKind::ExtraEntry,
            ]
        );
    }

    #[test]
    fn extra_entry_is_inert() {
        assert!(!PunchKind::ExtraEntry.opens_period());
        assert!(!PunchKind::ExtraEntry.closes_period());
    }

    #[test]
    fn legacy_labels_are_accepted() {
        let k: PunchKind = serde_json::from_str("\"Intervalo - Volta\"").unwrap();
        assert_eq!(k, PunchKind::BreakEnd);

        let k: PunchKind = serde_json::from_str("\"Saída\"").unwrap();
        assert_eq!(k, PunchKind::Exit);

        assert_eq!(
            serde_json::to_string(&PunchKind::BreakStart).unwrap(),
            "\"Break Start\""
        );
    }

    #[test]
    fn unrecognised_label_loads_as_inert_unknown() {
        let k: PunchKind = serde_json::from_str("\"Almoço\"").unwrap();
        assert_eq!(k, PunchKind::Unknown);
        assert!(!k.opens_period());
        assert!(!k.closes_period());
    }
}
