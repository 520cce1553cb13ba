//! Dashboard CSV export command.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::dashboard;
use crate::fs::auth;
use crate::fs::enrollments::EnrollmentStore;
use crate::fs::slots::StorageArea;

pub fn execute(area: &StorageArea, output: Option<PathBuf>) -> Result<()> {
    auth::require_login(area)?;

    let store = EnrollmentStore::new(area.clone());
    let records = store.load();

    let csv = dashboard::export_csv(&records)?;
    let path = output
        .unwrap_or_else(|| PathBuf::from(dashboard::export_filename(Utc::now().date_naive())));

    fs::write(&path, csv)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    println!(
        "{} Exported {} enrollments to {}",
        "✓".green(),
        records.len(),
        path.display().to_string().cyan()
    );
    Ok(())
}
