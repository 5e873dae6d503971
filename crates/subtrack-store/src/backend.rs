//! Durable storage boundary.
//!
//! The host persists the whole subscription list under a single durable key.
//! [`StorageBackend`] is that key: read the serialized payload if present,
//! or overwrite it wholesale. There is no partial update and no batching.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use subtrack_core::{Error, Result};

/// A single durable key holding the serialized subscription list.
pub trait StorageBackend {
    /// Reads the persisted payload, or `None` if the key has never been
    /// written.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrites the payload. Failures propagate to the caller; the store
    /// performs no retries.
    fn write(&self, payload: &str) -> Result<()>;
}

/// File-backed storage: one JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a backend for the given file path. The file need not exist
    /// yet; parent directories are created on first write.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory storage for tests: the "durable" key lives in a cell.
///
/// Can be told to fail writes, for exercising persistence-error propagation.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    payload: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryBackend {
    /// Creates an empty backend (key absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-loaded with a payload.
    pub fn with_payload<S: Into<String>>(payload: S) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
            fail_writes: Cell::new(false),
        }
    }

    /// Returns a copy of the current payload, if any.
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Makes every subsequent write fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::Io(std::io::Error::other(
                "simulated storage write failure",
            )));
        }
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
