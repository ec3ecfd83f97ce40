//! Namespaced key-value persistence.
//!
//! [`StorageService`] is the only persistence boundary in the storefront.
//! Every manager composes on top of it and never sees the backing medium.
//! Values are JSON-serialized on write and parsed back on read.
//!
//! # Failure policy
//!
//! Storage never fails to its callers:
//! - `get` of a missing or corrupt key returns `None` (corruption is logged).
//! - `set` swallows serialization and backend failures. On quota exhaustion
//!   a notice is raised through [`Notices`] and the write is dropped.
//! - `remove` and `clear` log backend failures.

mod file;
mod memory;

pub use file::{FileBackend, StorageOpenError};
pub use memory::MemoryBackend;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default key prefix, keeps our keys apart from anything else in the profile.
pub const DEFAULT_NAMESPACE: &str = "floralink_";

/// Notice shown when a write is dropped because the quota is exhausted.
pub const QUOTA_NOTICE: &str = "Storage limit reached. Please clear some data.";

/// Well-known collection keys.
pub mod keys {
    /// Sequence of users.
    pub const USERS: &str = "users";
    /// The single active session.
    pub const SESSION: &str = "session";
    /// Sequence of products.
    pub const PRODUCTS: &str = "products";
    /// Sequence of cart items.
    pub const CART: &str = "cart";
    /// Sequence of orders.
    pub const ORDERS: &str = "orders";
}

/// Errors raised by a [`StorageBackend`].
#[derive(Debug, Error)]
pub enum BackendError {
    /// The write would exceed the backend's byte quota.
    #[error("storage quota exceeded ({used} of {quota} bytes)")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        used: usize,
        /// Configured quota in bytes.
        quota: usize,
    },

    /// The backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium could not be encoded.
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A raw string dictionary, the shape of a browser profile's local storage.
///
/// Implementations use interior mutability: the storefront is single-threaded
/// and every operation runs to completion before the next begins.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::QuotaExceeded` if the value does not fit, or
    /// `BackendError::Io` if the medium cannot be written. On error the
    /// previous contents are unchanged.
    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Io` if the medium cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), BackendError>;

    /// All keys currently stored, including other namespaces.
    fn keys(&self) -> Vec<String>;
}

/// Sink for user-facing notices (the browser would show an alert).
pub trait Notices {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// Default notice sink: reports through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotices;

impl Notices for LogNotices {
    fn notify(&self, message: &str) {
        tracing::warn!(notice = message, "User notice");
    }
}

/// Namespaced JSON storage over a [`StorageBackend`].
pub struct StorageService {
    backend: Box<dyn StorageBackend>,
    notices: Box<dyn Notices>,
    prefix: String,
}

impl StorageService {
    /// Create a storage service over `backend`, prefixing every key with
    /// `namespace`.
    pub fn new(backend: impl StorageBackend + 'static, namespace: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            notices: Box::new(LogNotices),
            prefix: namespace.into(),
        }
    }

    /// In-memory storage with the default namespace.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new(), DEFAULT_NAMESPACE)
    }

    /// Replace the notice sink.
    #[must_use]
    pub fn with_notices(mut self, notices: impl Notices + 'static) -> Self {
        self.notices = Box::new(notices);
        self
    }

    /// The key prefix of this store.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.prefix
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    /// Read and decode the value under `key`.
    ///
    /// Returns `None` if the key is missing or holds data that doesn't decode
    /// as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_item(&self.full_key(key))?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(key, error = %e, "Error reading from storage");
                None
            }
        }
    }

    /// Encode `value` and store it under `key`.
    ///
    /// Failures are logged and the write is dropped.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key, error = %e, "Error serializing value for storage");
                return;
            }
        };

        match self.backend.set_item(&self.full_key(key), &raw) {
            Ok(()) => tracing::debug!(key, bytes = raw.len(), "Stored value"),
            Err(BackendError::QuotaExceeded { used, quota }) => {
                tracing::error!(key, used, quota, "Storage quota exceeded");
                self.notices.notify(QUOTA_NOTICE);
            }
            Err(e) => tracing::error!(key, error = %e, "Error writing to storage"),
        }
    }

    /// Delete `key`.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(&self.full_key(key)) {
            tracing::error!(key, error = %e, "Error removing from storage");
        }
    }

    /// Whether a value (decodable or not) exists under `key`.
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.backend.get_item(&self.full_key(key)).is_some()
    }

    /// Delete every key in this namespace, leaving other keys untouched.
    pub fn clear(&self) {
        for key in self.backend.keys() {
            if key.starts_with(&self.prefix)
                && let Err(e) = self.backend.remove_item(&key)
            {
                tracing::error!(key, error = %e, "Error clearing storage");
            }
        }
    }

    /// Read a collection, treating a missing or corrupt key as empty.
    pub(crate) fn get_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.get(key).unwrap_or_default()
    }
}

impl std::fmt::Debug for StorageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageService")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde::Deserialize;

    use super::*;

    /// Notice sink that records messages for assertions.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingNotices(pub Rc<RefCell<Vec<String>>>);

    impl Notices for RecordingNotices {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_owned());
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Flower {
        name: String,
        stems: u32,
    }

    #[test]
    fn test_set_then_get() {
        let storage = StorageService::in_memory();
        let rose = Flower {
            name: "Rose".to_owned(),
            stems: 12,
        };
        storage.set("flower", &rose);
        assert_eq!(storage.get::<Flower>("flower"), Some(rose));
    }

    #[test]
    fn test_get_missing_is_none() {
        let storage = StorageService::in_memory();
        assert_eq!(storage.get::<Flower>("nothing"), None);
        assert!(!storage.exists("nothing"));
    }

    #[test]
    fn test_keys_are_namespaced() {
        let backend = MemoryBackend::new();
        let storage = StorageService::new(backend.clone(), "ns_");
        storage.set("cart", &Vec::<u32>::new());
        assert_eq!(backend.get_item("ns_cart").as_deref(), Some("[]"));
        assert!(backend.get_item("cart").is_none());
    }

    #[test]
    fn test_corrupt_json_is_none() {
        let backend = MemoryBackend::new();
        backend.set_item("floralink_products", "{not json").unwrap();
        let storage = StorageService::new(backend, DEFAULT_NAMESPACE);
        assert_eq!(storage.get::<Vec<Flower>>("products"), None);
        assert!(storage.exists("products"));
        assert!(storage.get_list::<Flower>("products").is_empty());
    }

    #[test]
    fn test_remove() {
        let storage = StorageService::in_memory();
        storage.set("session", &"abc");
        storage.remove("session");
        assert!(!storage.exists("session"));
        // Removing again is harmless.
        storage.remove("session");
    }

    #[test]
    fn test_clear_only_touches_namespace() {
        let backend = MemoryBackend::new();
        backend.set_item("other_app_token", "\"keep\"").unwrap();
        let storage = StorageService::new(backend.clone(), DEFAULT_NAMESPACE);
        storage.set("users", &Vec::<u32>::new());
        storage.set("cart", &Vec::<u32>::new());

        storage.clear();

        assert!(!storage.exists("users"));
        assert!(!storage.exists("cart"));
        assert_eq!(backend.get_item("other_app_token").as_deref(), Some("\"keep\""));
    }

    #[test]
    fn test_quota_exceeded_notifies_and_keeps_previous_value() {
        let notices = RecordingNotices::default();
        let storage = StorageService::new(MemoryBackend::with_quota(64), DEFAULT_NAMESPACE)
            .with_notices(notices.clone());

        storage.set("note", &"short");
        storage.set("note", &"x".repeat(200));

        assert_eq!(storage.get::<String>("note").as_deref(), Some("short"));
        assert_eq!(notices.0.borrow().as_slice(), [QUOTA_NOTICE.to_owned()]);
    }
}
