//! Synchronous string-keyed storage areas.
//!
//! A [`StorageArea`] is the persistence seam of the cart: get, set and remove
//! string values by string key, with no transactions. Methods take `&self`, so
//! implementations use interior mutability and a single area can be shared
//! between a [`CartStore`](crate::CartStore) and whatever else inspects it.

mod file;
mod memory;

use std::sync::Arc;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A persistent key-value area holding string values.
pub trait StorageArea {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;

    /// Checks whether `key` is present.
    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: StorageArea + ?Sized> StorageArea for &S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        (**self).contains(key)
    }
}

impl<S: StorageArea + ?Sized> StorageArea for Arc<S> {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        (**self).contains(key)
    }
}
