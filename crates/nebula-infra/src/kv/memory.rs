//! In-memory key-value store - used for tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use nebula_core::ports::{KeyValueStore, KvError};

/// In-memory store using a HashMap behind an RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryKeyValueStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let store = self.store.read().map_err(|_| KvError::Poisoned)?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut store = self.store.write().map_err(|_| KvError::Poisoned)?;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut store = self.store.write().map_err(|_| KvError::Poisoned)?;
        store.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, KvError> {
        let store = self.store.read().map_err(|_| KvError::Poisoned)?;
        Ok(store.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("key1", "value1").unwrap();
        assert_eq!(kv.get("key1").unwrap(), Some("value1".to_string()));
        assert!(kv.contains("key1").unwrap());
    }

    #[test]
    fn test_delete() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("key1", "value1").unwrap();
        kv.delete("key1").unwrap();
        kv.delete("key1").unwrap();
        assert_eq!(kv.get("key1").unwrap(), None);
    }
}
