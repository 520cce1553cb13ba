//! Dashboard delete command with confirmation prompt.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{stdin, stdout, Write};

use crate::dashboard;
use crate::error::DashboardError;
use crate::fs::auth;
use crate::fs::enrollments::EnrollmentStore;
use crate::fs::slots::StorageArea;

pub fn execute(area: &StorageArea, enrollment_id: &str, yes: bool) -> Result<()> {
    auth::require_login(area)?;

    if !yes && !confirm(enrollment_id)? {
        println!("Delete cancelled.");
        return Ok(());
    }

    let store = EnrollmentStore::new(area.clone());
    let mut records = store.load();

    let removed = match dashboard::delete_enrollment(&mut records, enrollment_id) {
        Ok(removed) => removed,
        Err(err @ DashboardError::NotFound(_)) => {
            eprintln!("{} {}", "✗".red(), err);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    store.save(&records)?;

    println!(
        "{} Deleted enrollment {} ({})",
        "✓".green(),
        enrollment_id.cyan(),
        removed.full_name
    );
    Ok(())
}

fn confirm(enrollment_id: &str) -> Result<bool> {
    print!("Delete enrollment {enrollment_id}? (y/n): ");
    stdout().flush()?;

    let mut response = String::new();
    stdin()
        .read_line(&mut response)
        .context("Failed to read confirmation response")?;

    Ok(response.trim().eq_ignore_ascii_case("y"))
}
