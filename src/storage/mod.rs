//! Client-side persistent storage: "set/get a string by key".
//!
//! The language store only needs a tiny key/value contract, so backends are
//! interchangeable:
//!
//! - [`MemoryStorage`]: process memory, shared between clones (tests, previews)
//! - [`FileStorage`]: a JSON object on disk (the preview binary)
//! - [`CookieStorage`]: the browser cookie jar of one HTTP request (the server)

mod cookie;
mod file;

pub use cookie::CookieStorage;
pub use file::FileStorage;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Failure of a storage read or write.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used right now (private mode, quota, permissions)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the key or value
    #[error("storage rejected {key:?}: {reason}")]
    Rejected { key: String, reason: String },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Minimal persistent key/value storage.
pub trait ClientStorage {
    /// Read a value. `Ok(None)` means nothing is stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same underlying map, so a clone
/// handed to a fresh store behaves like the same browser in a new session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl ClientStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_get_missing_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("language").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_set_then_get() {
        let mut storage = MemoryStorage::new();
        storage.set_item("language", "am").unwrap();
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("am"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_set_overwrites() {
        let mut storage = MemoryStorage::with_item("language", "am");
        storage.set_item("language", "en").unwrap();
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("en"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_clones_share_items() {
        let mut first = MemoryStorage::new();
        let second = first.clone();
        first.set_item("language", "am").unwrap();
        assert_eq!(second.get_item("language").unwrap().as_deref(), Some("am"));
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Unavailable("quota exceeded".to_string());
        assert_eq!(err.to_string(), "storage unavailable: quota exceeded");

        let err = StorageError::Rejected {
            key: "language".to_string(),
            reason: "invalid character".to_string(),
        };
        assert!(err.to_string().contains("\"language\""));
    }
}
