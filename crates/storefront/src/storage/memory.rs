//! In-memory storage backend.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{BackendError, StorageBackend};

/// A storage backend held entirely in memory.
///
/// Clones share the same underlying map, so a test can keep a handle to the
/// raw dictionary while a [`StorageService`](super::StorageService) owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    /// An empty, unbounded backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty backend that refuses writes once keys plus values would
    /// exceed `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Rc::default(),
            quota: Some(quota),
        }
    }
}

/// Bytes held by a dictionary: sum of key and value lengths.
pub(super) fn used_bytes(items: &BTreeMap<String, String>) -> usize {
    items.iter().map(|(k, v)| k.len() + v.len()).sum()
}

/// Bytes the dictionary would hold after replacing `key` with `value`.
pub(super) fn used_bytes_after(items: &BTreeMap<String, String>, key: &str, value: &str) -> usize {
    let previous = items.get(key).map_or(0, |v| key.len() + v.len());
    used_bytes(items) - previous + key.len() + value.len()
}

impl StorageBackend for MemoryBackend {
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
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), BackendError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }
}
