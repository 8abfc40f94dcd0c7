//! Best-effort persistence of card edits.
//!
//! Nothing here may block or undo a local edit: upserts run detached and their failures are
//! only logged; loading at session start falls back to no edits.

use crate::models::{EditRecord, EntityId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Why the edit store could not be used.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PersistenceError {
    /// Store not reachable or not provisioned yet.
    Unavailable(String),
    /// Stored data could not be read back.
    Malformed(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Unavailable(reason) => {
                write!(f, "Edit store unavailable: {}", reason)
            }
            PersistenceError::Malformed(reason) => {
                write!(f, "Edit store data malformed: {}", reason)
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Upsert/load of edits keyed by card id.
pub trait EditStore: Send + Sync {
    /// Insert, or merge into the existing record for the same card.
    fn upsert(&self, record: &EditRecord) -> Result<(), PersistenceError>;

    fn load_all(&self) -> Result<Vec<EditRecord>, PersistenceError>;
}

/// Stand-in when no store is configured; every call reports "not provisioned".
#[derive(Clone, Copy, Debug, Default)]
pub struct Unprovisioned;

impl EditStore for Unprovisioned {
    fn upsert(&self, _record: &EditRecord) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("no edit store configured".to_string()))
    }

    fn load_all(&self) -> Result<Vec<EditRecord>, PersistenceError> {
        Err(PersistenceError::Unavailable("no edit store configured".to_string()))
    }
}

/// All edits in one JSON document inside a directory that must already exist.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    /// Serialises read-modify-write cycles.
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub const FILE_NAME: &'static str = "player_edits.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(Self::FILE_NAME)
    }

    fn ensure_provisioned(&self) -> Result<(), PersistenceError> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(PersistenceError::Unavailable(format!(
                "directory {} not provisioned",
                self.dir.display()
            )))
        }
    }

    fn read(path: &Path) -> Result<BTreeMap<EntityId, EditRecord>, PersistenceError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(PersistenceError::Unavailable(e.to_string())),
        };
        serde_json::from_str(&text).map_err(|e| PersistenceError::Malformed(e.to_string()))
    }
}

impl EditStore for JsonFileStore {
    fn upsert(&self, record: &EditRecord) -> Result<(), PersistenceError> {
        self.ensure_provisioned()?;
        let _guard = self
            .lock
            .lock()
            .map_err(|_| PersistenceError::Unavailable("lock error".to_string()))?;
        let path = self.path();
        let mut records = Self::read(&path)?;
        records
            .entry(record.entity_id)
            .and_modify(|existing| existing.merge(record))
            .or_insert_with(|| record.clone());
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| PersistenceError::Malformed(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| PersistenceError::Unavailable(e.to_string()))?;
        std::fs::rename(&tmp, &path).map_err(|e| PersistenceError::Unavailable(e.to_string()))
    }

    fn load_all(&self) -> Result<Vec<EditRecord>, PersistenceError> {
        self.ensure_provisioned()?;
        let _guard = self
            .lock
            .lock()
            .map_err(|_| PersistenceError::Unavailable("lock error".to_string()))?;
        Ok(Self::read(&self.path())?.into_values().collect())
    }
}

/// Load prior edits; on failure log and start with none.
pub fn load_or_empty(store: &dyn EditStore) -> Vec<EditRecord> {
    match store.load_all() {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Starting without saved edits: {}", e);
            Vec::new()
        }
    }
}

/// Queue an upsert after the local edit has been committed. The result is only logged.
pub fn persist_in_background(
    store: Arc<dyn EditStore>,
    record: EditRecord,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || match store.upsert(&record) {
        Ok(()) => log::debug!("Saved edit for card {}", record.entity_id),
        Err(e) => log::warn!("Edit for card {} kept locally only: {}", record.entity_id, e),
    })
}
