//! Admin dashboard operations over the enrollment store.
//!
//! Everything here is pure over an in-memory record sequence; command
//! handlers own the load/persist cycle and the login guard.

pub mod edit;
pub mod export;

use std::collections::HashSet;

use crate::models::enrollment::EnrollmentRecord;

pub use edit::{begin_edit, delete_enrollment, save_edit, EditDraft};
pub use export::{export_csv, export_filename, format_club_name, format_display_date};

/// Case-insensitive substring filter against name or student ID, ANDed
/// with an exact club match when a club filter is given. Store order is
/// preserved.
pub fn list_filtered<'a>(
    records: &'a [EnrollmentRecord],
    search_term: &str,
    club_filter: Option<&str>,
) -> Vec<&'a EnrollmentRecord> {
    let term = search_term.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            let matches_search = term.is_empty()
                || record.full_name.to_lowercase().contains(&term)
                || record.student_id.to_lowercase().contains(&term);
            let matches_club = club_filter.is_none_or(|club| record.club == club);
            matches_search && matches_club
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub unique_clubs: usize,
}

/// Totals shown at the top of the dashboard: record count and the number
/// of distinct clubs with at least one enrollment.
pub fn compute_stats(records: &[EnrollmentRecord]) -> DashboardStats {
    let clubs: HashSet<&str> = records.iter().map(|r| r.club.as_str()).collect();
    DashboardStats {
        total: records.len(),
        unique_clubs: clubs.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollment::{ClassYear, Weekday};
    use chrono::Utc;

    fn record(full_name: &str, student_id: &str, club: &str) -> EnrollmentRecord {
        EnrollmentRecord {
            enrollment_id: EnrollmentRecord::generate_id(),
            full_name: full_name.to_string(),
            student_id: student_id.to_string(),
            email: "student@example.com".to_string(),
            year: ClassYear::Freshman,
            club: club.to_string(),
            experience: None,
            days: vec![Weekday::Monday],
            enrollment_date: Utc::now(),
        }
    }

    #[test]
    fn test_filter_by_club_only() {
        let records = vec![
            record("Jane Smith", "stu01", "robotics"),
            record("Ken Adams", "stu02", "chess"),
            record("Ada Park", "stu03", "robotics"),
        ];

        let filtered = list_filtered(&records, "", Some("robotics"));
        let names: Vec<&str> = filtered.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith", "Ada Park"]);
    }

    #[test]
    fn test_search_matches_name_or_student_id() {
        let records = vec![
            record("Jane Smith", "stu01", "robotics"),
            record("Ken Adams", "SMITH9", "chess"),
            record("Ada Park", "stu03", "art"),
        ];

        let filtered = list_filtered(&records, "smith", None);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_search_and_club_are_anded() {
        let records = vec![
            record("Jane Smith", "stu01", "robotics"),
            record("John Smith", "stu02", "chess"),
        ];

        let filtered = list_filtered(&records, "smith", Some("chess"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].full_name, "John Smith");
    }

    #[test]
    fn test_empty_filters_return_all_in_order() {
        let records = vec![
            record("Jane Smith", "stu01", "robotics"),
            record("Ken Adams", "stu02", "chess"),
        ];

        let filtered = list_filtered(&records, "", None);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].full_name, "Jane Smith");
    }

    #[test]
    fn test_compute_stats_counts_distinct_clubs() {
        let records = vec![
            record("A", "stu01", "chess"),
            record("B", "stu02", "chess"),
            record("C", "stu03", "art"),
        ];

        let stats = compute_stats(&records);
        assert_eq!(stats, DashboardStats { total: 3, unique_clubs: 2 });
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, DashboardStats { total: 0, unique_clubs: 0 });
    }
}
