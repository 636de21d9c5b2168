//! File-based store implementation.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::store::{KeyValueStore, StoreError};

/// Current store file format version.
///
/// Increment this when making breaking changes to the format.
const STORE_FILE_VERSION: u32 = 1;

/// On-disk store file format.
///
/// Uses JSON for readability. Files with another `version` are treated as
/// corrupted (no backward compatibility).
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    /// Format version for future compatibility.
    version: u32,

    /// Stored entries, sorted by key for stable output.
    entries: BTreeMap<String, String>,
}

impl StoreFile {
    const fn empty() -> Self {
        Self {
            version: STORE_FILE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// File-based implementation of [`KeyValueStore`].
///
/// All entries live in one JSON file, rewritten on each `set`.
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename pattern to prevent corruption:
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a new file-based store at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file; a missing file is an empty store.
    fn read(&self) -> Result<StoreFile, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreFile::empty()),
            Err(e) => return Err(StoreError::Read(e)),
        };

        let file = serde_json::from_str::<StoreFile>(&content).map_err(|e| {
            StoreError::Corrupted {
                reason: format!("Invalid JSON: {e}"),
            }
        })?;

        if file.version != STORE_FILE_VERSION {
            return Err(StoreError::Corrupted {
                reason: format!(
                    "Incompatible version: expected {STORE_FILE_VERSION}, got {}",
                    file.version
                ),
            });
        }

        Ok(file)
    }

    fn write(&self, file: &StoreFile) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(file).map_err(StoreError::Serialize)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        // Append .tmp instead of replacing extension to avoid conflicts
        // (e.g., store.json -> store.json.tmp, not store.tmp)
        let temp_path = PathBuf::from(format!("{}.tmp", self.path.display()));

        std::fs::write(&temp_path, content).map_err(StoreError::Write)?;
        std::fs::rename(&temp_path, &self.path).map_err(StoreError::Write)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupted file is replaced rather than blocking every later save
        let mut file = match self.read() {
            Ok(file) => file,
            Err(StoreError::Corrupted { reason }) => {
                tracing::warn!("Replacing corrupted store {}: {reason}", self.path.display());
                StoreFile::empty()
            }
            Err(e) => return Err(e),
        };

        file.entries.insert(key.to_string(), value.to_string());
        self.write(&file)
    }
}
