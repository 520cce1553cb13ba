//! Dashboard edit command.

use anyhow::Result;
use colored::Colorize;

use crate::dashboard;
use crate::error::DashboardError;
use crate::fs::auth;
use crate::fs::enrollments::EnrollmentStore;
use crate::fs::slots::StorageArea;
use crate::models::enrollment::ClassYear;

/// Field overrides from the command line; unset fields keep their current
/// values.
#[derive(Debug, Default)]
pub struct EditOverrides {
    pub full_name: Option<String>,
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub club: Option<String>,
    pub year: Option<String>,
}

pub fn execute(area: &StorageArea, enrollment_id: &str, overrides: EditOverrides) -> Result<()> {
    auth::require_login(area)?;

    let store = EnrollmentStore::new(area.clone());
    let mut records = store.load();

    let mut draft = match dashboard::begin_edit(&records, enrollment_id) {
        Ok(draft) => draft,
        Err(err @ DashboardError::NotFound(_)) => {
            eprintln!("{} {}", "✗".red(), err);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(full_name) = overrides.full_name {
        draft.full_name = full_name;
    }
    if let Some(student_id) = overrides.student_id {
        draft.student_id = student_id;
    }
    if let Some(email) = overrides.email {
        draft.email = email;
    }
    if let Some(club) = overrides.club {
        draft.club = club;
    }
    if let Some(year) = overrides.year {
        draft.year = year.parse::<ClassYear>()?;
    }

    if let Err(err) = dashboard::save_edit(&mut records, enrollment_id, &draft) {
        eprintln!("{} {}", "✗".red(), err);
        std::process::exit(1);
    }
    store.save(&records)?;

    println!("{} Updated enrollment {}", "✓".green(), enrollment_id.cyan());
    Ok(())
}
