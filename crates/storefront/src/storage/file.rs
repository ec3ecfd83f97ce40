//! File-backed storage: one JSON object per profile.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::memory::used_bytes_after;
use super::{BackendError, StorageBackend};

/// Errors opening a [`FileBackend`].
#[derive(Debug, Error)]
pub enum StorageOpenError {
    /// The data file exists but cannot be read.
    #[error("cannot read data file {path}: {source}")]
    Read {
        /// Path of the data file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// A storage backend persisted as a single JSON object on disk.
///
/// The whole dictionary is loaded on open and rewritten after every
/// mutation (write to a sibling temp file, then rename).
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    items: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl FileBackend {
    /// Open the profile stored at `path`.
    ///
    /// A missing file is an empty profile. A file that isn't a JSON object of
    /// strings is logged and treated as empty; it is overwritten on the next
    /// write.
    ///
    /// # Errors
    ///
    /// Returns `StorageOpenError::Read` if the file exists but can't be read.
    pub fn open(path: impl Into<PathBuf>, quota: Option<usize>) -> Result<Self, StorageOpenError> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::error!(path = %path.display(), error = %e, "Corrupt data file, starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No data file yet");
                BTreeMap::new()
            }
            Err(source) => return Err(StorageOpenError::Read { path, source }),
        };

        Ok(Self {
            path,
            items: RefCell::new(items),
            quota,
        })
    }

    /// Path of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<(), BackendError> {
        let raw = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut items = self.items.borrow_mut();
        if let Some(quota) = self.quota {
            let used = used_bytes_after(&items, key, value);
            if used > quota {
                return Err(BackendError::QuotaExceeded { used, quota });
            }
        }

        let mut next = items.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.persist(&next)?;
        *items = next;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), BackendError> {
        let mut items = self.items.borrow_mut();
        if !items.contains_key(key) {
            return Ok(());
        }

        let mut next = items.clone();
        next.remove(key);
        self.persist(&next)?;
        *items = next;
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path().join("profile.json"), None).unwrap();
        assert!(backend.keys().is_empty());
    }

    #[test]
    fn test_writes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let backend = FileBackend::open(&path, None).unwrap();
        backend.set_item("floralink_cart", "[]").unwrap();
        backend.set_item("floralink_session", "null").unwrap();
        backend.remove_item("floralink_session").unwrap();
        drop(backend);

        let reopened = FileBackend::open(&path, None).unwrap();
        assert_eq!(reopened.get_item("floralink_cart").as_deref(), Some("[]"));
        assert!(reopened.get_item("floralink_session").is_none());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "not json at all").unwrap();

        let backend = FileBackend::open(&path, None).unwrap();
        assert!(backend.keys().is_empty());
        backend.set_item("k", "v").unwrap();

        let reopened = FileBackend::open(&path, None).unwrap();
        assert_eq!(reopened.get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_quota_rejects_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let backend = FileBackend::open(&path, Some(8)).unwrap();

        assert!(matches!(
            backend.set_item("key", "too-long-value"),
            Err(BackendError::QuotaExceeded { .. })
        ));
        assert!(!path.exists());
    }
}
