// src/export/model.rs

use crate::core::session::ReportData;
use crate::utils::minutes_to_hm;
use serde::Serialize;

/// Flat punch row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PunchExport {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    pub timestamp: i64,
}

/// JSON document: the day, its figures and its punches (oldest first).
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub date: String,
    pub minutes_worked: i64,
    pub balance: i64,
    pub punches: Vec<PunchExport>,
}

pub(crate) fn punches_to_export(report: &ReportData) -> Vec<PunchExport> {
    report
        .punches
        .iter()
        .map(|p| PunchExport {
            date: report.date_key.clone(),
            kind: p.kind.label().to_string(),
            time: p.time.clone(),
            timestamp: p.timestamp,
        })
        .collect()
}

pub(crate) fn report_to_export(report: &ReportData) -> ReportExport {
    ReportExport {
        date: report.date_key.clone(),
        minutes_worked: report.stats.minutes_worked,
        balance: report.stats.balance,
        punches: punches_to_export(report),
    }
}

/// Type / Time rows for the PDF table.
pub(crate) fn punches_to_table(report: &ReportData) -> Vec<[String; 2]> {
    report
        .punches
        .iter()
        .map(|p| [p.kind.label().to_string(), p.time.clone()])
        .collect()
}

pub(crate) fn summary_lines(report: &ReportData) -> Vec<String> {
    if report.punches.is_empty() {
        return Vec::new();
    }

    vec![
        format!("Worked: {}", minutes_to_hm(report.stats.minutes_worked)),
        format!("Balance: {}", minutes_to_hm(report.stats.balance)),
    ]
}
