//! Typed wrapper over a key-value store with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, KeyValueStore};

/// Cache backed by any [`KeyValueStore`].
///
/// Values are stored as JSON text. The raw accessors are there for callers that
/// need to inspect a slot before deciding how to decode it.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored text
    /// does not decode as `T`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a value, replacing whatever the slot held.
    pub fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }

    /// Read the undecoded slot text.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store.get(key)
    }

    /// Delete a value from the cache.
    pub fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Slot {
        name: String,
        quantity: u32,
    }

    #[test]
    fn test_json_roundtrip() {
        let mut cache = Cache::new(MemoryStore::new());
        let value = vec![Slot {
            name: "Cap".to_string(),
            quantity: 3,
        }];

        cache.set_json("cart", &value).unwrap();
        let restored: Option<Vec<Slot>> = cache.get_json("cart").unwrap();
        assert_eq!(restored, Some(value));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::new(MemoryStore::new());
        let restored: Option<Vec<Slot>> = cache.get_json("cart").unwrap();
        assert!(restored.is_none());
    }

    #[test]
    fn test_undecodable_slot_is_error() {
        let cache = Cache::new(MemoryStore::with_entry("cart", "not json"));
        let result: Result<Option<Vec<Slot>>, _> = cache.get_json("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
        assert_eq!(cache.get_raw("cart").unwrap().as_deref(), Some("not json"));
    }
}
