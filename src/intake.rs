//! Intake form validation and submission.
//!
//! Validation is re-run from scratch on every attempt - there is no
//! incremental state, and a report always reflects the whole form.
//! Submission appends exactly one record to the store; invalid input
//! never reaches the slot.

use anyhow::Result;
use chrono::Utc;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

use crate::fs::enrollments::EnrollmentStore;
use crate::models::enrollment::{ClassYear, EnrollmentRecord, Weekday};

/// Minimum length of a student ID.
pub const MIN_STUDENT_ID_LEN: usize = 5;

/// Basic `local@domain.tld` shape; anything stricter rejects real
/// addresses.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Confirmation shown after a successful submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for your application! We will contact you soon.";

/// A form field that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    FullName,
    StudentId,
    Email,
    Year,
    Club,
    Days,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::FullName => write!(f, "fullName"),
            FormField::StudentId => write!(f, "studentId"),
            FormField::Email => write!(f, "email"),
            FormField::Year => write!(f, "year"),
            FormField::Club => write!(f, "club"),
            FormField::Days => write!(f, "days"),
        }
    }
}

/// Raw form input as submitted, before any parsing.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentForm {
    pub full_name: String,
    pub student_id: String,
    pub email: String,
    pub year: String,
    pub club: String,
    pub experience: String,
    pub days: Vec<String>,
}

/// Per-field validation outcome for one submission attempt.
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: BTreeMap<FormField, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = (&FormField, &String)> {
        self.errors.iter()
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    fn reject(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }
}

fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

fn is_valid_student_id(student_id: &str) -> bool {
    student_id.len() >= MIN_STUDENT_ID_LEN
        && student_id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validate the whole form. Every rule must pass for the report to be
/// valid; required-field checks run against trimmed values.
pub fn validate(form: &EnrollmentForm) -> ValidationReport {
    let mut report = ValidationReport::default();

    if form.full_name.trim().is_empty() {
        report.reject(FormField::FullName, "This field is required");
    }

    let student_id = form.student_id.trim();
    if student_id.is_empty() {
        report.reject(FormField::StudentId, "This field is required");
    } else if !is_valid_student_id(student_id) {
        report.reject(
            FormField::StudentId,
            format!("Please enter a valid student ID (at least {MIN_STUDENT_ID_LEN} characters, letters and digits only)"),
        );
    }

    let email = form.email.trim();
    if email.is_empty() {
        report.reject(FormField::Email, "This field is required");
    } else if !is_valid_email(email) {
        report.reject(FormField::Email, "Please enter a valid email address");
    }

    let year = form.year.trim();
    if year.is_empty() {
        report.reject(FormField::Year, "This field is required");
    } else if year.parse::<ClassYear>().is_err() {
        report.reject(
            FormField::Year,
            "Please select a class year: freshman, sophomore, junior, or senior",
        );
    }

    if form.club.trim().is_empty() {
        report.reject(FormField::Club, "This field is required");
    }

    let days: Vec<&str> = form
        .days
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect();
    if days.is_empty() {
        report.reject(
            FormField::Days,
            "Please select at least one preferred meeting day",
        );
    } else {
        for day in days {
            if day.parse::<Weekday>().is_err() {
                report.reject(FormField::Days, format!("Unknown weekday '{day}'"));
                break;
            }
        }
    }

    report
}

/// Append one validated enrollment to the store.
///
/// The record gets a freshly generated id and the current timestamp. A
/// storage failure propagates with nothing written, so the caller can
/// retry the same input.
pub fn submit(form: &EnrollmentForm, store: &EnrollmentStore) -> Result<EnrollmentRecord> {
    let report = validate(form);
    if !report.is_valid() {
        anyhow::bail!("enrollment form failed validation");
    }

    let mut days: Vec<Weekday> = Vec::new();
    for raw in &form.days {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let day: Weekday = raw.parse()?;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    let experience = form.experience.trim();
    let record = EnrollmentRecord {
        enrollment_id: EnrollmentRecord::generate_id(),
        full_name: form.full_name.trim().to_string(),
        student_id: form.student_id.trim().to_string(),
        email: form.email.trim().to_string(),
        year: form.year.trim().parse()?,
        club: form.club.trim().to_string(),
        experience: (!experience.is_empty()).then(|| experience.to_string()),
        days,
        enrollment_date: Utc::now(),
    };

    let mut records = store.load();
    records.push(record.clone());
    store.save(&records)?;
    debug!(enrollment_id = %record.enrollment_id, "enrollment appended");

    Ok(record)
}
