//! Storage backends.
//!
//! A store maps string keys to string values. Every `set` replaces the whole
//! value under a key; there are no partial writes and no versioning.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::CacheError;

/// Extension used for slot files in a [`FileStore`].
const SLOT_EXTENSION: &str = "json";

/// A string key-value store with whole-value writes.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), CacheError>;

    /// Check whether `key` currently holds a value.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys currently holding a value.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// In-memory store. Contents live as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single slot.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        self.slots.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys: Vec<String> = self.slots.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// File-backed store: one `<key>.json` file per slot inside a directory.
///
/// Writes land in a temporary sibling first and are renamed over the slot, so a
/// reader sees either the previous value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, CacheError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        let path = self.slot_path(key)?;
        let tmp = path.with_extension(format!("{}.tmp", SLOT_EXTENSION));
        if let Err(e) = fs::write(&tmp, value) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(CacheError::StoreError(format!("replace slot {}: {}", key, e)));
        }
        tracing::trace!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.slot_path(key)?.is_file())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == SLOT_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Check that `key` can name a storage slot.
///
/// Slot keys become file names, so only `[A-Za-z0-9_.-]` is allowed and a key
/// may not start with `.`.
pub fn validate_key(key: &str) -> Result<(), CacheError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(CacheError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        assert!(store.exists("cart").unwrap());

        store.delete("cart").unwrap();
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_memory_store_overwrites_wholesale() {
        let mut store = MemoryStore::with_entry("cart", "[1,2,3]");
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("slots")).unwrap();

        assert_eq!(store.get("hustlz-cart").unwrap(), None);
        store.set("hustlz-cart", r#"[{"name":"Cap"}]"#).unwrap();
        assert_eq!(
            store.get("hustlz-cart").unwrap().as_deref(),
            Some(r#"[{"name":"Cap"}]"#)
        );
        assert_eq!(store.keys().unwrap(), vec!["hustlz-cart".to_string()]);

        store.delete("hustlz-cart").unwrap();
        assert_eq!(store.get("hustlz-cart").unwrap(), None);
        // Deleting again is fine.
        store.delete("hustlz-cart").unwrap();
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("cart", "[]").unwrap();
        store.set("cart", "[1]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["cart.json".to_string()]);
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.set("../escape", "x"),
            Err(CacheError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(CacheError::InvalidKey(_))));
        assert!(matches!(store.get(".hidden"), Err(CacheError::InvalidKey(_))));
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("hustlz-cart").is_ok());
        assert!(validate_key("cart.v2_guest").is_ok());
        assert!(validate_key("my cart").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a/b").is_err());
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        // A non-empty directory where the slot file should be blocks the rename
        fs::create_dir_all(dir.path().join("cart.json").join("inner")).unwrap();

        assert!(matches!(store.set("cart", "[]"), Err(CacheError::StoreError(_))));
        assert!(!dir.path().join("cart.json.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let slots = dir.path().join("slots");
        let mut store = FileStore::open(&slots).unwrap();
        fs::remove_dir(&slots).unwrap();

        assert!(matches!(store.set("cart", "[]"), Err(CacheError::Io(_))));
        assert!(!slots.join("cart.json.tmp").exists());
    }
}
