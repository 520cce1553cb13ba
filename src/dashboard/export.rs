//! CSV export of the enrollment sequence.
//!
//! Fields with embedded delimiters or quotes are quoted per RFC 4180, so
//! free text in names never shifts columns.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::enrollment::EnrollmentRecord;

/// Fixed header row of the export.
pub const CSV_HEADERS: [&str; 7] = [
    "Enrollment ID",
    "Name",
    "Student ID",
    "Email",
    "Club",
    "Year",
    "Enrollment Date",
];

/// Render the full sequence as CSV, header row first, one row per record
/// in store order.
pub fn export_csv(records: &[EnrollmentRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;

    for record in records {
        writer
            .write_record([
                record.enrollment_id.as_str(),
                record.full_name.as_str(),
                record.student_id.as_str(),
                record.email.as_str(),
                &format_club_name(&record.club),
                &record.year.to_string(),
                &format_display_date(record.enrollment_date),
            ])
            .context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("Failed to flush CSV writer: {err}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Export filename for a given date: `club_enrollments_<YYYY-MM-DD>.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("club_enrollments_{}.csv", date.format("%Y-%m-%d"))
}

/// Club key rendered for display: `robotics` becomes `Robotics Club`.
pub fn format_club_name(club: &str) -> String {
    let mut chars = club.chars();
    match chars.next() {
        Some(first) => format!("{}{} Club", first.to_uppercase(), chars.as_str()),
        None => "Club".to_string(),
    }
}

/// Calendar-date rendering used in the table and the export.
pub fn format_display_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
