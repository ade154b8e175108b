//! Consultant persistence.
//!
//! The whole collection lives in one slot that is read, changed and written
//! back as a unit. [`ConsultantStore`] is the injectable seam: the CLI and
//! server hand a store to the engine's callers, tests use [`MemoryStore`].
//!
//! Layout:
//!   .skillboard/consultants.json   JSON array of consultant records

use crate::consultant::Consultant;
use crate::error::{BoardError, Result};
use crate::io::{self, Format};
use crate::paths;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Outcome of [`ConsultantStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Saved {
    Added,
    Updated,
}

// ---------------------------------------------------------------------------
// ConsultantStore
// ---------------------------------------------------------------------------

pub trait ConsultantStore: Send + Sync {
    /// Current collection; an empty list when nothing has been written yet.
    fn read(&self) -> Result<Vec<Consultant>>;

    /// Replace the whole collection.
    fn write(&self, consultants: &[Consultant]) -> Result<()>;

    /// Guard held across a read-modify-write cycle. Stores shared between
    /// threads return one so concurrent mutations do not lose updates.
    fn write_lock(&self) -> Option<MutexGuard<'_, ()>> {
        None
    }

    fn get(&self, id: &str) -> Result<Consultant> {
        self.read()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| BoardError::ConsultantNotFound(id.to_string()))
    }

    /// Replace the record with the same id, or append it when the id is new.
    fn save(&self, consultant: Consultant) -> Result<Saved> {
        let _guard = self.write_lock();
        let mut list = self.read()?;
        let outcome = match list.iter_mut().find(|c| c.id == consultant.id) {
            Some(existing) => {
                *existing = consultant;
                Saved::Updated
            }
            None => {
                list.push(consultant);
                Saved::Added
            }
        };
        self.write(&list)?;
        Ok(outcome)
    }

    /// Remove by id. Returns false when no record had that id.
    fn remove(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock();
        let mut list = self.read()?;
        let before = list.len();
        list.retain(|c| c.id != id);
        if list.len() == before {
            return Ok(false);
        }
        self.write(&list)?;
        Ok(true)
    }

    /// Apply `change` to the record with `id` and write it back.
    fn update<F>(&self, id: &str, change: F) -> Result<Consultant>
    where
        F: FnOnce(&mut Consultant),
        Self: Sized,
    {
        let _guard = self.write_lock();
        let mut list = self.read()?;
        let record = list
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| BoardError::ConsultantNotFound(id.to_string()))?;
        change(record);
        // The id is the record's identity; edits never move it.
        record.id = id.to_string();
        let updated = record.clone();
        self.write(&list)?;
        Ok(updated)
    }
}

/// Shared handles are stores too, so `Arc<dyn ConsultantStore>` gets `update`.
impl<S: ConsultantStore + ?Sized> ConsultantStore for Arc<S> {
    fn read(&self) -> Result<Vec<Consultant>> {
        (**self).read()
    }

    fn write(&self, consultants: &[Consultant]) -> Result<()> {
        (**self).write(consultants)
    }

    fn write_lock(&self) -> Option<MutexGuard<'_, ()>> {
        (**self).write_lock()
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// JSON-file store rooted at a board directory.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn open(root: &Path) -> Self {
        Self::at(paths::consultants_path(root))
    }

    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConsultantStore for FileStore {
    fn read(&self) -> Result<Vec<Consultant>> {
        Ok(io::load(&self.path, Format::Json)?.unwrap_or_default())
    }

    fn write(&self, consultants: &[Consultant]) -> Result<()> {
        io::save(&self.path, Format::Json, consultants)
    }

    fn write_lock(&self) -> Option<MutexGuard<'_, ()>> {
        Some(self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store for fixtures and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<Vec<Consultant>>,
    lock: Mutex<()>,
}

impl MemoryStore {
    pub fn new(consultants: Vec<Consultant>) -> Self {
        Self {
            data: Mutex::new(consultants),
            lock: Mutex::new(()),
        }
    }
}

impl ConsultantStore for MemoryStore {
    fn read(&self) -> Result<Vec<Consultant>> {
        Ok(self
            .data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn write(&self, consultants: &[Consultant]) -> Result<()> {
        *self
            .data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = consultants.to_vec();
        Ok(())
    }

    fn write_lock(&self) -> Option<MutexGuard<'_, ()>> {
        Some(self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
