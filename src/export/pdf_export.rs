// src/export/pdf_export.rs

use crate::core::session::ReportData;
use crate::errors::{AppError, AppResult};
use crate::export::model::{punches_to_table, summary_lines};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, ReportPage};
use crate::ui::messages::info;
use std::path::Path;

pub(crate) const REPORT_TITLE: &str = "Time Report";
pub(crate) const EMPTY_MESSAGE: &str = "No punches recorded for today.";
pub(crate) const FOOTER: &str = "Generated automatically by punchclock";

pub(crate) fn render_pdf(report: &ReportData) -> Vec<u8> {
    let rows = punches_to_table(report);
    let summary = summary_lines(report);
    let subtitle = format!("Date: {}", report.date_key);

    let mut pdf = PdfManager::new();
    pdf.write_report(&ReportPage {
        title: REPORT_TITLE,
        subtitle: &subtitle,
        headers: ["Type", "Time"],
        rows: &rows,
        empty_message: EMPTY_MESSAGE,
        summary: &summary,
        footer: FOOTER,
    });
    pdf.finish()
}

pub(crate) fn export_pdf(report: &ReportData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let bytes = render_pdf(report);
    std::fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
