//! Durable key-value store for last-known location records.
//!
//! The `Store` trait provides a minimal key-value interface for persisting
//! small records across runs. Providers implement this trait, letting the
//! rest of the crate use any backend through a consistent interface.
//!
//! # Design Principles
//!
//! - **String keys**: Human-readable for debugging, flexible for any record
//! - **Vec<u8> values**: Raw bytes, no serialization opinions imposed
//! - **Minimal interface**: set, get, delete - nothing the domain doesn't use
//! - **Dyn-compatible**: Uses `Pin<Box<dyn Future>>` for trait object support
//!
//! # Example
//!
//! ```ignore
//! use geofix::store::{MemoryStore, Store};
//!
//! let store = MemoryStore::new();
//! store.set("location", serde_json::to_vec(&record)?).await?;
//! let value = store.get("location").await?;
//! ```

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading or writing the backing storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Key-value interface for durable storage of small records.
///
/// All implementations must be `Send + Sync` for use across async tasks.
/// The interface uses `Pin<Box<dyn Future>>` so providers can be held as
/// `Arc<dyn Store>` trait objects.
pub trait Store: Send + Sync {
    /// Store a value under the given key, replacing any existing value.
    fn set(&self, key: &str, value: Vec<u8>) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key is not present.
    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<Vec<u8>>, StoreError>>;

    /// Delete a value by key.
    ///
    /// Returns `Ok(true)` if the key existed and was deleted.
    fn delete(&self, key: &str) -> BoxFuture<'_, Result<bool, StoreError>>;
}
