//! Named-slot storage area backing the enrollment store and the admin
//! session flag.
//!
//! A storage area is a directory of plain text files, one per slot.
//! Slot writes take an exclusive `fs2` advisory lock and truncate only
//! after the lock is held; reads take a shared lock. Locks keep a single
//! write from being read half-finished - they do NOT serialize
//! read-modify-write sequences across processes, so concurrent writers
//! still race with last-write-wins semantics.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Slot holding the serialized enrollment sequence.
pub const ENROLLMENTS_SLOT: &str = "enrolledStudents";

/// Slot holding the admin session flag.
pub const AUTH_SLOT: &str = "adminAuthenticated";

/// A directory of named text slots.
#[derive(Debug, Clone)]
pub struct StorageArea {
    root: PathBuf,
}

impl StorageArea {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(slot)
    }

    /// Read a slot's text with a shared lock. Returns `None` when the slot
    /// does not exist.
    pub fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)
            .with_context(|| format!("Failed to open slot: {}", path.display()))?;
        file.lock_shared()
            .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;

        let mut content = String::new();
        BufReader::new(&file)
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read slot: {}", path.display()))?;

        Ok(Some(content))
    }

    /// Overwrite a slot with the given text, creating the slot (and the
    /// storage area directory) if needed.
    ///
    /// The sequence is: open without truncation, lock exclusively, then
    /// truncate and write, so a concurrent reader never observes an empty
    /// slot between truncation and write completion.
    pub fn write(&self, slot: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create storage area: {}", self.root.display())
        })?;

        let path = self.slot_path(slot);
        #[allow(clippy::suspicious_open_options)]
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&path)
            .with_context(|| format!("Failed to open slot for writing: {}", path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
        file.set_len(0)
            .with_context(|| format!("Failed to truncate slot: {}", path.display()))?;

        let mut writer = BufWriter::new(&file);
        writer
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write slot: {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush slot: {}", path.display()))?;

        Ok(())
    }

    /// Remove a slot. Removing an absent slot is not an error.
    pub fn remove(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to remove slot: {}", path.display()))
            }
        }
    }
}
