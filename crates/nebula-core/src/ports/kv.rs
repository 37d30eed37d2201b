//! Key-value port - abstraction over the durable slots posts and sessions live in.

/// Key-value store trait - abstraction over storage backends (files, in-memory).
///
/// Values are opaque strings; callers serialize JSON into them. Operations are
/// synchronous and a single writer is assumed.
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key. Returns `None` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Set a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), KvError>;

    /// Check if a key exists.
    fn contains(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        (**self).delete(key)
    }

    fn contains(&self, key: &str) -> Result<bool, KvError> {
        (**self).contains(key)
    }
}

/// Key-value operation errors.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Lock poisoned")]
    Poisoned,
}
