//! Snapshot persistence behind the `SaveStore` trait.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;

use crate::world::WorldState;

/// Errors from reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium is unavailable.
    #[error("save storage unavailable: {0}")]
    Io(#[from] io::Error),

    /// The stored data does not deserialize into a world.
    #[error("saved game is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Wholesale snapshot storage for a [`WorldState`].
///
/// The interpreter saves after every turn and loads on demand. Failures
/// must be reported, never panicked on: the session degrades them to
/// in-world messages so play continues.
pub trait SaveStore {
    /// Persist a snapshot, replacing any previous one.
    fn save(&mut self, world: &WorldState) -> Result<(), StoreError>;

    /// Retrieve the last snapshot, or `None` if nothing was ever saved.
    fn load(&mut self) -> Result<Option<WorldState>, StoreError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    snapshot: Option<String>,
    saves: usize,
}

/// In-memory store with shared handles.
///
/// Cloning yields a handle onto the same storage, so a test can keep one
/// handle, give the other to a session, and observe the saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times [`SaveStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }

    /// Whether a snapshot is held.
    pub fn has_snapshot(&self) -> bool {
        self.inner.borrow().snapshot.is_some()
    }

    /// Overwrite the held snapshot with raw text, bypassing
    /// serialization. Used to simulate corrupt saved data.
    pub fn inject_raw(&self, raw: impl Into<String>) {
        self.inner.borrow_mut().snapshot = Some(raw.into());
    }
}

impl SaveStore for MemoryStore {
    fn save(&mut self, world: &WorldState) -> Result<(), StoreError> {
        let json = serde_json::to_string(world)?;
        let mut inner = self.inner.borrow_mut();
        inner.snapshot = Some(json);
        inner.saves += 1;
        Ok(())
    }

    fn load(&mut self) -> Result<Option<WorldState>, StoreError> {
        let inner = self.inner.borrow();
        match &inner.snapshot {
            None => Ok(None),
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
        }
    }
}

/// File-backed store: one JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path snapshots are written to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn save(&mut self, world: &WorldState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(world)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&mut self) -> Result<Option<WorldState>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }
}
