//! Enrollment intake command.

use anyhow::Result;
use colored::Colorize;

use crate::fs::enrollments::EnrollmentStore;
use crate::fs::slots::StorageArea;
use crate::intake::{self, EnrollmentForm};

pub fn execute(area: &StorageArea, form: EnrollmentForm) -> Result<()> {
    let report = intake::validate(&form);
    if !report.is_valid() {
        eprintln!("{} Enrollment not submitted:", "✗".red());
        for (field, message) in report.errors() {
            eprintln!("  {}: {}", field.to_string().cyan(), message);
        }
        std::process::exit(1);
    }

    let store = EnrollmentStore::new(area.clone());
    let record = intake::submit(&form, &store)?;

    println!("{} {}", "✓".green(), intake::CONFIRMATION_MESSAGE);
    println!(
        "  {} enrollment id: {}",
        "→".dimmed(),
        record.enrollment_id.dimmed()
    );

    Ok(())
}
