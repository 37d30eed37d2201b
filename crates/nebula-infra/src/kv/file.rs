//! File-backed key-value store - one file per key inside a directory.
//!
//! ```text
//! data-dir/
//! ├── nebula_blog_posts.json   → nebula_blog_posts
//! └── nebula_auth_session.json → nebula_auth_session
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use nebula_core::ports::{KeyValueStore, KvError};

const EXTENSION: &str = "json";

/// Durable store keeping each key in `<root>/<key>.json`.
///
/// Writes go through a temporary file and a rename, so readers see either the
/// old value or the new one. The directory is created on first write.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KvError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::Io(format!("{}: {e}", path.display()))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)
            .map_err(|e| KvError::Io(format!("{}: {e}", self.root.display())))?;

        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));
        fs::write(&tmp, value).map_err(|e| KvError::Io(format!("{}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path).map_err(|e| KvError::Io(format!("{}: {e}", path.display())))?;

        tracing::trace!(key = %key, bytes = value.len(), "Slot written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::Io(format!("{}: {e}", path.display()))),
        }
    }

    fn contains(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.path_for(key)?.is_file())
    }
}
