//! In-memory preference store.

use std::collections::HashMap;

use super::{PreferenceStore, StorageError};

/// A [`PreferenceStore`] backed by a map.
///
/// `unavailable()` and `with_quota()` reproduce the failure modes of real
/// browser-style storage: disabled storage and a full quota.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    available: bool,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
            quota: None,
        }
    }

    /// A store whose every operation fails with [`StorageError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// A store that rejects writes creating more than `limit` keys.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::new()
        }
    }

    /// Seeds a raw value, bypassing availability and quota checks.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Reads a raw value, bypassing availability checks.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        if let Some(limit) = self.quota {
            if !self.values.contains_key(key) && self.values.len() >= limit {
                return Err(StorageError::QuotaExceeded { limit });
            }
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "dark").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_unavailable_store_fails() {
        let mut store = MemoryStore::unavailable();
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable)));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn test_quota_allows_overwrite_but_not_new_keys() {
        let mut store = MemoryStore::with_quota(1);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert!(matches!(
            store.set("b", "1"),
            Err(StorageError::QuotaExceeded { limit: 1 })
        ));
        assert_eq!(store.peek("a"), Some("2"));
    }

    #[test]
    fn test_zero_quota_rejects_everything() {
        let mut store = MemoryStore::with_quota(0);
        assert!(store.set("a", "1").is_err());
    }
}
