//! In-place edit and delete of enrollment records.
//!
//! Edits replace the matching record in place: the sequence keeps
//! insertion order and the record keeps its original `enrollmentId` and
//! `enrollmentDate`. An edit that fails validation leaves the sequence
//! untouched; dropping a draft without saving is a cancel. Targeting an
//! id that is not in the store is a `NotFound` error and changes nothing.

use crate::error::DashboardError;
use crate::models::enrollment::{ClassYear, EnrollmentRecord};

/// Editable fields of a record, seeded from its current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub full_name: String,
    pub student_id: String,
    pub email: String,
    pub club: String,
    pub year: ClassYear,
}

/// Start an edit: returns a draft pre-filled from the record with the
/// given id.
pub fn begin_edit(
    records: &[EnrollmentRecord],
    enrollment_id: &str,
) -> Result<EditDraft, DashboardError> {
    let record = records
        .iter()
        .find(|r| r.enrollment_id == enrollment_id)
        .ok_or_else(|| DashboardError::NotFound(enrollment_id.to_string()))?;

    Ok(EditDraft {
        full_name: record.full_name.clone(),
        student_id: record.student_id.clone(),
        email: record.email.clone(),
        club: record.club.clone(),
        year: record.year,
    })
}

/// Apply a draft to the record in place.
///
/// Name, student ID, and email must be non-empty after trimming; edit
/// validation is deliberately looser than intake (no format or length
/// re-check). On any error the sequence is left untouched.
pub fn save_edit(
    records: &mut [EnrollmentRecord],
    enrollment_id: &str,
    draft: &EditDraft,
) -> Result<(), DashboardError> {
    if draft.full_name.trim().is_empty() {
        return Err(DashboardError::MissingField("fullName"));
    }
    if draft.student_id.trim().is_empty() {
        return Err(DashboardError::MissingField("studentId"));
    }
    if draft.email.trim().is_empty() {
        return Err(DashboardError::MissingField("email"));
    }

    let record = records
        .iter_mut()
        .find(|r| r.enrollment_id == enrollment_id)
        .ok_or_else(|| DashboardError::NotFound(enrollment_id.to_string()))?;

    record.full_name = draft.full_name.trim().to_string();
    record.student_id = draft.student_id.trim().to_string();
    record.email = draft.email.trim().to_string();
    record.club = draft.club.trim().to_string();
    record.year = draft.year;
    // enrollment_id and enrollment_date stay as created

    Ok(())
}

/// Remove the record with the given id and return it.
pub fn delete_enrollment(
    records: &mut Vec<EnrollmentRecord>,
    enrollment_id: &str,
) -> Result<EnrollmentRecord, DashboardError> {
    let index = records
        .iter()
        .position(|r| r.enrollment_id == enrollment_id)
        .ok_or_else(|| DashboardError::NotFound(enrollment_id.to_string()))?;

    Ok(records.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollment::Weekday;
    use chrono::Utc;

    fn record(enrollment_id: &str, full_name: &str) -> EnrollmentRecord {
        EnrollmentRecord {
            enrollment_id: enrollment_id.to_string(),
            full_name: full_name.to_string(),
            student_id: "stu01".to_string(),
            email: "student@example.com".to_string(),
            year: ClassYear::Freshman,
            club: "chess".to_string(),
            experience: None,
            days: vec![Weekday::Monday],
            enrollment_date: Utc::now(),
        }
    }

    #[test]
    fn test_begin_edit_seeds_draft_from_record() {
        let records = vec![record("ENR-1-a", "Jane Smith")];
        let draft = begin_edit(&records, "ENR-1-a").unwrap();

        assert_eq!(draft.full_name, "Jane Smith");
        assert_eq!(draft.club, "chess");
        assert_eq!(draft.year, ClassYear::Freshman);
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let records = vec![record("ENR-1-a", "Jane Smith")];
        assert_eq!(
            begin_edit(&records, "ENR-9-z"),
            Err(DashboardError::NotFound("ENR-9-z".to_string()))
        );
    }

    #[test]
    fn test_save_edit_replaces_in_place() {
        let mut records = vec![record("ENR-1-a", "Jane Smith"), record("ENR-2-b", "Ken Adams")];
        let original_date = records[0].enrollment_date;

        let mut draft = begin_edit(&records, "ENR-1-a").unwrap();
        draft.full_name = "Jane Smith-Lee".to_string();
        draft.club = "robotics".to_string();
        draft.year = ClassYear::Senior;
        save_edit(&mut records, "ENR-1-a", &draft).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].full_name, "Jane Smith-Lee");
        assert_eq!(records[0].club, "robotics");
        assert_eq!(records[0].year, ClassYear::Senior);
        // identity fields survive the edit
        assert_eq!(records[0].enrollment_id, "ENR-1-a");
        assert_eq!(records[0].enrollment_date, original_date);
        // neighbors untouched
        assert_eq!(records[1].full_name, "Ken Adams");
    }

    #[test]
    fn test_save_edit_requires_core_fields() {
        let mut records = vec![record("ENR-1-a", "Jane Smith")];

        let mut draft = begin_edit(&records, "ENR-1-a").unwrap();
        draft.email = "  ".to_string();
        assert_eq!(
            save_edit(&mut records, "ENR-1-a", &draft),
            Err(DashboardError::MissingField("email"))
        );
        assert_eq!(records[0].full_name, "Jane Smith");
        assert_eq!(records[0].email, "student@example.com");
    }

    #[test]
    fn test_save_edit_unknown_id_changes_nothing() {
        let mut records = vec![record("ENR-1-a", "Jane Smith")];
        let before = records.clone();

        let draft = begin_edit(&records, "ENR-1-a").unwrap();
        assert!(matches!(
            save_edit(&mut records, "ENR-9-z", &draft),
            Err(DashboardError::NotFound(_))
        ));
        assert_eq!(records, before);
    }

    #[test]
    fn test_delete_removes_matching_record() {
        let mut records = vec![
            record("ENR-1-a", "Jane Smith"),
            record("ENR-2-b", "Ken Adams"),
            record("ENR-3-c", "Ada Park"),
        ];

        let removed = delete_enrollment(&mut records, "ENR-2-b").unwrap();
        assert_eq!(removed.full_name, "Ken Adams");

        let names: Vec<&str> = records.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith", "Ada Park"]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_store_unchanged() {
        let mut records = vec![record("ENR-1-a", "Jane Smith")];
        let before = records.clone();

        assert_eq!(
            delete_enrollment(&mut records, "ENR-9-z"),
            Err(DashboardError::NotFound("ENR-9-z".to_string()))
        );
        assert_eq!(records, before);
    }
}
