// src/export/json_csv.rs

use crate::core::session::ReportData;
use crate::errors::AppResult;
use crate::export::model::{punches_to_export, report_to_export};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &ReportData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&report_to_export(report))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one row per punch (header from serde).
pub(crate) fn export_csv(report: &ReportData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    let rows = punches_to_export(report);
    if rows.is_empty() {
        // serde writes the header only with the first record
        wtr.write_record(["date", "type", "time", "timestamp"])?;
    }
    for item in &rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
