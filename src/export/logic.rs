// src/export/logic.rs

use crate::core::session::ReportData;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::utils::date::file_safe_key;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level report export.
pub struct ExportLogic;

impl ExportLogic {
    /// Default file name: `punch_report_DD-MM-YYYY.<ext>`.
    pub fn default_file_name(report: &ReportData, format: &ExportFormat) -> String {
        format!(
            "punch_report_{}.{}",
            file_safe_key(&report.date_key),
            format.as_str()
        )
    }

    /// Resolves the output path: explicit `file`, or the default name
    /// inside `report_dir`.
    pub fn resolve_path(
        report: &ReportData,
        format: &ExportFormat,
        file: Option<&str>,
        report_dir: &str,
    ) -> PathBuf {
        match file {
            Some(f) => PathBuf::from(f),
            None => Path::new(report_dir).join(Self::default_file_name(report, format)),
        }
    }

    /// Writes the report. Ledger state is never touched, whatever happens.
    pub fn export(
        report: &ReportData,
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        match format {
            ExportFormat::Pdf => export_pdf(report, path)?,
            ExportFormat::Json => export_json(report, path)?,
            ExportFormat::Csv => export_csv(report, path)?,
        }

        tracing::info!(path = %path.display(), format = format.as_str(), "report exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_summary::DailyStats;
    use crate::models::punch::PunchEvent;
    use crate::models::punch_kind::PunchKind;

    fn report() -> ReportData {
        ReportData {
            date_key: "05/03/2024".into(),
            punches: vec![
                PunchEvent {
                    id: 1,
                    time: "08:00".into(),
                    kind: PunchKind::Entry,
                    timestamp: 1_000,
                },
                PunchEvent {
                    id: 2,
                    time: "12:00".into(),
                    kind: PunchKind::BreakStart,
                    timestamp: 2_000,
                },
            ],
            stats: DailyStats {
                minutes_worked: 240,
                balance: -240,
            },
        }
    }

    #[test]
    fn default_name_uses_a_file_safe_date() {
        assert_eq!(
            ExportLogic::default_file_name(&report(), &ExportFormat::Pdf),
            "punch_report_05-03-2024.pdf"
        );
        assert_eq!(
            ExportLogic::resolve_path(&report(), &ExportFormat::Csv, None, "out"),
            Path::new("out").join("punch_report_05-03-2024.csv")
        );
    }

    #[test]
    fn csv_rows_are_chronological() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.csv");

        ExportLogic::export(&report(), &ExportFormat::Csv, &path, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "date,type,time,timestamp");
        assert_eq!(lines[1], "05/03/2024,Entry,08:00,1000");
        assert_eq!(lines[2], "05/03/2024,Break Start,12:00,2000");
    }

    #[test]
    fn json_carries_the_daily_figures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.json");

        ExportLogic::export(&report(), &ExportFormat::Json, &path, false).unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["date"], "05/03/2024");
        assert_eq!(v["minutes_worked"], 240);
        assert_eq!(v["punches"][1]["type"], "Break Start");
    }

    #[test]
    fn pdf_is_written_and_forced_over_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.pdf");
        fs::write(&path, "old").unwrap();

        ExportLogic::export(&report(), &ExportFormat::Pdf, &path, true).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
