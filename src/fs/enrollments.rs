//! Enrollment store: the persisted ordered sequence of all records.
//!
//! The store is the single source of truth shared by the intake and
//! dashboard paths. There is no partial-update primitive - every mutation
//! is load-all, modify in memory, save-all, which is safe only because the
//! store is single-writer.

use anyhow::{Context, Result};
use tracing::warn;

use crate::fs::slots::{StorageArea, ENROLLMENTS_SLOT};
use crate::models::enrollment::EnrollmentRecord;

pub struct EnrollmentStore {
    area: StorageArea,
}

impl EnrollmentStore {
    pub fn new(area: StorageArea) -> Self {
        Self { area }
    }

    /// Load all records in insertion order.
    ///
    /// Fail-soft: an absent, unreadable, or malformed slot yields an empty
    /// sequence so a corrupt store never takes the tool down. The next
    /// save overwrites the slot wholesale.
    pub fn load(&self) -> Vec<EnrollmentRecord> {
        let raw = match self.area.read(ENROLLMENTS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read enrollment slot, treating as empty: {err:#}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!("enrollment slot is not a valid record array, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Persist the full sequence, overwriting the slot in one locked write.
    pub fn save(&self, records: &[EnrollmentRecord]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(records).context("Failed to serialize enrollments")?;
        self.area.write(ENROLLMENTS_SLOT, &json)
    }
}
