//! Disk-backed store provider.
//!
//! Persists each key as a single file under a directory. Writes go through
//! a temporary file renamed into place, so a crash mid-write leaves the
//! previous value intact rather than a truncated record.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::{BoxFuture, Store, StoreError};

/// File-per-key store rooted at a directory.
///
/// The directory is created on first write. Keys map directly to file
/// names, so callers should stick to short path-safe keys (the crate only
/// uses `"location"`).
#[derive(Debug, Clone)]
pub struct DiskStore {
    directory: PathBuf,
}

impl DiskStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory this store writes into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json.tmp", key))
    }
}

impl Store for DiskStore {
    fn set(&self, key: &str, value: Vec<u8>) -> BoxFuture<'_, Result<(), StoreError>> {
        let path = self.entry_path(key);
        let temp = self.temp_path(key);
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.directory).await?;
            tokio::fs::write(&temp, &value).await?;
            tokio::fs::rename(&temp, &path).await?;
            debug!(path = %path.display(), bytes = value.len(), "Persisted store entry");
            Ok(())
        })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<Vec<u8>>, StoreError>> {
        let path = self.entry_path(key);
        Box::pin(async move {
            match tokio::fs::read(&path).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StoreError::Io(e)),
            }
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, Result<bool, StoreError>> {
        let path = self.entry_path(key);
        Box::pin(async move {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => Ok(true),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
                Err(e) => Err(StoreError::Io(e)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let store = DiskStore::new(dir.path().join("nested"));

        store.set("location", b"{}".to_vec()).await.unwrap();

        let written = dir.path().join("nested").join("location.json");
        assert!(written.exists());
    }

    #[tokio::test]
    async fn test_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = DiskStore::new(dir.path());

        store.set("location", vec![1, 2, 3]).await.unwrap();
        assert_eq!(
            store.get("location").await.unwrap(),
            Some(vec![1, 2, 3])
        );
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = DiskStore::new(dir.path());
        assert_eq!(store.get("location").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let store = DiskStore::new(dir.path());

        store.set("location", b"first".to_vec()).await.unwrap();
        store.set("location", b"second".to_vec()).await.unwrap();

        assert_eq!(
            store.get("location").await.unwrap(),
            Some(b"second".to_vec())
        );
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = DiskStore::new(dir.path());

        store.set("location", b"{}".to_vec()).await.unwrap();

        assert!(!dir.path().join("location.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = TempDir::new().unwrap();
        let store = DiskStore::new(dir.path());

        store.set("location", b"{}".to_vec()).await.unwrap();
        assert!(store.delete("location").await.unwrap());
        assert!(!store.delete("location").await.unwrap());
        assert_eq!(store.get("location").await.unwrap(), None);
    }
}
