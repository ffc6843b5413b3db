//! String key-value storage abstraction.
//!
//! The browser app implements [`KeyValueStore`] over `localStorage`; tests and
//! non-browser builds use [`MemoryStore`]. Every operation reports failure
//! through [`StorageError`] and the caller picks the fallback.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Error returned by storage reads, writes, and payload decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists (disabled storage, private mode, non-browser).
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    /// Includes quota exhaustion.
    #[error("storage write failed: {0}")]
    Write(String),
    /// The stored payload could not be decoded into the expected shape.
    #[error("malformed stored value: {0}")]
    Malformed(String),
    #[error("failed to encode value: {0}")]
    Encode(String),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the value for `key`; `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that accepts reads but rejects every write, like a full quota.
    #[must_use]
    pub fn read_only() -> Self {
        Self { entries: Rc::default(), fail_writes: true }
    }

    /// Seed `key` directly, bypassing `fail_writes`.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.insert(key, value);
        Ok(())
    }
}
