// src/utils/formatter.rs
use crate::filesystem::{AgeBreakdown, FileMetadata};
use crate::utils::units::SizeReading;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use serde::Serialize;

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_age(age: &AgeBreakdown) -> String {
    format!("{}d {}h {}m", age.days, age.hours, age.minutes)
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

/// Label/value pairs in display order. Missing values render as `-`.
pub fn report_rows(report: &FileMetadata) -> Vec<(&'static str, String)> {
    fn or_dash(value: Option<String>) -> String {
        value.unwrap_or_else(|| "-".to_string())
    }

    vec![
        ("Path", report.path.display().to_string()),
        ("Name", or_dash(report.name.clone())),
        ("Extension", or_dash(report.extension.clone())),
        ("Size", or_dash(report.size.as_ref().map(SizeReading::to_string))),
        ("Created", or_dash(report.created.as_ref().map(format_timestamp))),
        ("Modified", or_dash(report.modified.as_ref().map(format_timestamp))),
        ("Age", or_dash(report.age.as_ref().map(format_age))),
        ("SHA-256", or_dash(report.checksum.clone())),
    ]
}

pub fn format_report(report: &FileMetadata) -> String {
    let rows = report_rows(report);
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    rows.into_iter()
        .map(|(label, value)| {
            let label = format!("{:>width$}", label, width = width);
            format!("{}  {}", label.bold().cyan(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
