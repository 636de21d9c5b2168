//! Key-value store abstraction for the durable config copy.

use std::collections::HashMap;
use std::io;
use std::sync::RwLock;

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Callers in this crate never propagate these; they log them and fall
/// back (reads) or skip (writes).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the store file.
    #[error("Failed to read store file: {0}")]
    Read(#[source] io::Error),

    /// Store file exists but could not be parsed.
    #[error("Store file is corrupted: {reason}")]
    Corrupted {
        /// Reason for corruption (for logging/debugging).
        reason: String,
    },

    /// Failed to write the store file.
    #[error("Failed to write store file: {0}")]
    Write(#[source] io::Error),

    /// Failed to serialize the store contents.
    #[error("Failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An in-memory store lock was poisoned.
    #[error("Store lock poisoned")]
    Poisoned,
}

/// A string-to-string store that survives between runs.
///
/// Implementations should:
/// - Report a missing key as `Ok(None)`, not as an error
/// - Leave other keys untouched on `set`
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or parsed.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Process-local store; contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.into(), value.into());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Mock stores for testing.
///
/// Allows tests to inject read and write failures.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A store whose reads and/or writes fail.
    #[derive(Debug, Default)]
    pub struct FailingStore {
        inner: MemoryStore,
        fail_reads: bool,
        fail_writes: bool,
        write_attempts: AtomicUsize,
    }

    impl FailingStore {
        /// Every read fails.
        #[must_use]
        pub fn unreadable() -> Self {
            Self {
                fail_reads: true,
                ..Self::default()
            }
        }

        /// Every write fails.
        #[must_use]
        pub fn read_only() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        /// Every write fails; reads return `value` under `key`.
        #[must_use]
        pub fn read_only_with(key: &str, value: &str) -> Self {
            Self {
                inner: MemoryStore::with_entry(key, value),
                fail_writes: true,
                ..Self::default()
            }
        }

        /// Number of `set` calls, successful or not.
        #[must_use]
        pub fn write_attempts(&self) -> usize {
            self.write_attempts.load(Ordering::SeqCst)
        }
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_reads {
                return Err(StoreError::Read(io::Error::other("storage disabled")));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.write_attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(StoreError::Write(io::Error::other("quota exceeded")));
            }
            self.inner.set(key, value)
        }
    }
}
