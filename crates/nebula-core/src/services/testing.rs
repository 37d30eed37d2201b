//! Test doubles for the core ports.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{KeyValueStore, KvError, WritingAssistant};

/// HashMap-backed key-value store.
#[derive(Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Assistant that answers every call with a fixed string.
pub struct CannedAssistant(pub &'static str);

#[async_trait]
impl WritingAssistant for CannedAssistant {
    async fn summarize(&self, _content: &str) -> String {
        self.0.to_string()
    }

    async fn suggest_title(&self, _content: &str) -> String {
        self.0.to_string()
    }

    async fn improve(&self, _content: &str) -> String {
        self.0.to_string()
    }
}
