//! In-memory store provider.
//!
//! Holds records in a mutex-guarded map. Used in tests and for ephemeral
//! runs where nothing should touch the filesystem.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::store::{BoxFuture, Store, StoreError};

/// In-memory store backed by a `HashMap`.
///
/// The lock is held only for the duration of a single map operation, never
/// across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Store for MemoryStore {
    fn set(&self, key: &str, value: Vec<u8>) -> BoxFuture<'_, Result<(), StoreError>> {
        let key = key.to_string();
        Box::pin(async move {
            self.entries.lock().insert(key, value);
            Ok(())
        })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<Vec<u8>>, StoreError>> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.entries.lock().get(&key).cloned()) })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, Result<bool, StoreError>> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.entries.lock().remove(&key).is_some()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("key", vec![1, 2, 3]).await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("key", vec![1]).await.unwrap();
        store.set("key", vec![2]).await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some(vec![2]));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        store.set("key", vec![1]).await.unwrap();
        assert!(store.delete("key").await.unwrap());
        assert!(!store.delete("key").await.unwrap());
        assert!(store.is_empty());
    }
}
