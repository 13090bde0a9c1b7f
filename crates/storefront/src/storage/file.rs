//! File-backed storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{StorageBackend, StorageError};

/// Durable key-value store keeping one file per key under a root directory.
///
/// Values survive process restarts, which is what the persistent cart key
/// relies on. Writes go through a temp file and an atomic rename so a crash
/// mid-write never leaves a truncated value behind.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a file store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the root directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers (e.g. "stylemate_cart"), safe as file names.
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let temp = tempfile::NamedTempFile::new_in(&self.root)?;
        fs::write(temp.path(), value)?;
        temp.persist(self.path_for(key))
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        assert_eq!(backend.get("cart").unwrap(), None);

        backend.set("cart", "[1,2]").unwrap();
        assert_eq!(backend.get("cart").unwrap().as_deref(), Some("[1,2]"));

        backend.set("cart", "[]").unwrap();
        assert_eq!(backend.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let backend = FileBackend::new(dir.path()).unwrap();
            backend.set("cart", "persisted").unwrap();
        }

        let reopened = FileBackend::new(dir.path()).unwrap();
        assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        backend.set("cart", "x").unwrap();
        backend.remove("cart").unwrap();
        backend.remove("cart").unwrap();
        assert_eq!(backend.get("cart").unwrap(), None);
    }
}
