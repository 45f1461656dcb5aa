//! In-memory storage area.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{PoisonError, RwLock};

use super::StorageArea;

/// An in-memory storage area backed by a `HashMap`.
///
/// Useful for tests and as a reference implementation. Contents are lost when
/// the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageArea for MemoryStorage {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        Ok(data.contains_key(key))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let storage = MemoryStorage::new();
        storage.set("cart", "[]").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_get_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("cart").unwrap(), None);
        assert!(!storage.contains("cart").unwrap());
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("cart", "old").unwrap();
        storage.set("cart", "new").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("new"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();
        storage.set("cart", "[]").unwrap();
        storage.remove("cart").unwrap();
        assert!(storage.is_empty());

        // Removing again is fine
        storage.remove("cart").unwrap();
    }
}
