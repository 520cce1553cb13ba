//! Enrollment record types shared by the intake and dashboard paths.
//!
//! Records are serialized with the exact field names of the storage
//! contract (`enrollmentId`, `fullName`, ...) so a store written by any
//! other front end to the same slot stays readable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the random suffix in a generated enrollment ID.
const ID_SUFFIX_LEN: usize = 9;

/// Class year of the enrolling student
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClassYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl std::fmt::Display for ClassYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassYear::Freshman => write!(f, "freshman"),
            ClassYear::Sophomore => write!(f, "sophomore"),
            ClassYear::Junior => write!(f, "junior"),
            ClassYear::Senior => write!(f, "senior"),
        }
    }
}

impl std::str::FromStr for ClassYear {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "freshman" => Ok(ClassYear::Freshman),
            "sophomore" => Ok(ClassYear::Sophomore),
            "junior" => Ok(ClassYear::Junior),
            "senior" => Ok(ClassYear::Senior),
            _ => anyhow::bail!(
                "Invalid class year: {s}. Valid values: freshman, sophomore, junior, senior"
            ),
        }
    }
}

/// Preferred meeting day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weekday::Monday => write!(f, "monday"),
            Weekday::Tuesday => write!(f, "tuesday"),
            Weekday::Wednesday => write!(f, "wednesday"),
            Weekday::Thursday => write!(f, "thursday"),
            Weekday::Friday => write!(f, "friday"),
            Weekday::Saturday => write!(f, "saturday"),
            Weekday::Sunday => write!(f, "sunday"),
        }
    }
}

impl std::str::FromStr for Weekday {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            "sunday" | "sun" => Ok(Weekday::Sunday),
            _ => anyhow::bail!("Invalid weekday: {s}. Use full names like monday, wednesday"),
        }
    }
}

/// A single club enrollment.
///
/// `enrollment_id` and `enrollment_date` are set at creation and never
/// change afterwards; edits replace every other field in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub enrollment_id: String,
    pub full_name: String,
    pub student_id: String,
    pub email: String,
    pub year: ClassYear,
    pub club: String,
    #[serde(default)]
    pub experience: Option<String>,
    pub days: Vec<Weekday>,
    pub enrollment_date: DateTime<Utc>,
}

impl EnrollmentRecord {
    /// Generate a fresh enrollment ID: `ENR-<unix-millis>-<random suffix>`.
    pub fn generate_id() -> String {
        let millis = Utc::now().timestamp_millis();
        let uuid = Uuid::new_v4().simple().to_string();
        format!("ENR-{millis}-{}", &uuid[..ID_SUFFIX_LEN])
    }
}
