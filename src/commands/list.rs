//! Dashboard listing: table, search, club filter, stats.

use anyhow::Result;
use colored::Colorize;

use crate::dashboard::{self, format_club_name, format_display_date};
use crate::fs::auth;
use crate::fs::enrollments::EnrollmentStore;
use crate::fs::slots::StorageArea;

pub fn execute(area: &StorageArea, search: &str, club: Option<&str>) -> Result<()> {
    auth::require_login(area)?;

    let store = EnrollmentStore::new(area.clone());
    let records = store.load();

    // Stats always cover the whole store, not the filtered view
    let stats = dashboard::compute_stats(&records);
    println!(
        "{} enrollments · {} active clubs",
        stats.total.to_string().bold(),
        stats.unique_clubs.to_string().bold()
    );
    println!();

    let filtered = dashboard::list_filtered(&records, search, club);
    if filtered.is_empty() {
        println!("{} No enrollments found", "ℹ".blue());
        return Ok(());
    }

    println!(
        "{:28} {:20} {:12} {:26} {:16} {:10} {:16}",
        "ID".bold(),
        "NAME".bold(),
        "STUDENT ID".bold(),
        "EMAIL".bold(),
        "CLUB".bold(),
        "YEAR".bold(),
        "ENROLLED".bold()
    );
    println!("{}", "─".repeat(132));

    for record in filtered {
        println!(
            "{:28} {:20} {:12} {:26} {:16} {:10} {:16}",
            record.enrollment_id.cyan(),
            truncate(&record.full_name, 20),
            truncate(&record.student_id, 12),
            truncate(&record.email, 26),
            truncate(&format_club_name(&record.club), 16),
            record.year.to_string(),
            format_display_date(record.enrollment_date)
        );
    }

    Ok(())
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let prefix: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{prefix}…")
    } else {
        value.to_string()
    }
}
