//! End-to-end flow over a temporary storage area: intake submissions,
//! admin session gate, filtering, edit, delete, and export all share one
//! persisted store.

use tempfile::TempDir;

use rollcall::config::AdminCredentials;
use rollcall::dashboard;
use rollcall::error::AuthError;
use rollcall::fs::auth::{self, SessionState};
use rollcall::fs::{EnrollmentStore, StorageArea};
use rollcall::intake::{self, EnrollmentForm};

fn form(full_name: &str, student_id: &str, club: &str) -> EnrollmentForm {
    EnrollmentForm {
        full_name: full_name.to_string(),
        student_id: student_id.to_string(),
        email: format!("{student_id}@example.com"),
        year: "sophomore".to_string(),
        club: club.to_string(),
        experience: String::new(),
        days: vec!["monday".to_string(), "thursday".to_string()],
    }
}

#[test]
fn intake_and_dashboard_share_one_store() {
    let temp = TempDir::new().unwrap();
    let area = StorageArea::new(temp.path());
    let store = EnrollmentStore::new(area.clone());

    // intake: three students across two clubs
    let jane = intake::submit(&form("Jane Smith", "stu01", "robotics"), &store).unwrap();
    intake::submit(&form("Ken Adams", "stu02", "chess"), &store).unwrap();
    intake::submit(&form("Ada Park", "stu03", "robotics"), &store).unwrap();

    // the dashboard is gated until login
    assert_eq!(auth::require_login(&area), Err(AuthError::NotLoggedIn));
    auth::login(&area, &AdminCredentials::default(), "admin", "admin123").unwrap();
    assert_eq!(auth::require_login(&area), Ok(()));

    let records = store.load();
    let stats = dashboard::compute_stats(&records);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.unique_clubs, 2);

    let robotics = dashboard::list_filtered(&records, "", Some("robotics"));
    assert_eq!(robotics.len(), 2);
    assert_eq!(robotics[0].full_name, "Jane Smith");

    // edit Jane in place; identity fields survive
    let mut records = store.load();
    let mut draft = dashboard::begin_edit(&records, &jane.enrollment_id).unwrap();
    draft.club = "chess".to_string();
    dashboard::save_edit(&mut records, &jane.enrollment_id, &draft).unwrap();
    store.save(&records).unwrap();

    let reloaded = store.load();
    assert_eq!(reloaded[0].enrollment_id, jane.enrollment_id);
    assert_eq!(reloaded[0].enrollment_date, jane.enrollment_date);
    assert_eq!(reloaded[0].club, "chess");

    // delete Ken; order of the rest is unchanged
    let mut records = store.load();
    let ken_id = records[1].enrollment_id.clone();
    dashboard::delete_enrollment(&mut records, &ken_id).unwrap();
    store.save(&records).unwrap();

    let names: Vec<String> = store.load().into_iter().map(|r| r.full_name).collect();
    assert_eq!(names, vec!["Jane Smith", "Ada Park"]);

    // export covers every remaining record
    let csv = dashboard::export_csv(&store.load()).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().nth(1).unwrap().contains("Chess Club"));

    // logout closes the gate again
    auth::logout(&area).unwrap();
    assert_eq!(SessionState::current(&area), SessionState::LoggedOut);
    assert_eq!(auth::require_login(&area), Err(AuthError::NotLoggedIn));
}

#[test]
fn store_survives_reopening_the_area() {
    let temp = TempDir::new().unwrap();

    {
        let store = EnrollmentStore::new(StorageArea::new(temp.path()));
        intake::submit(&form("Jane Smith", "stu01", "art"), &store).unwrap();
    }

    // a fresh handle over the same directory sees the same records
    let store = EnrollmentStore::new(StorageArea::new(temp.path()));
    let records = store.load();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].full_name, "Jane Smith");
}
