//! BlobStore trait for abstracting stylesheet persistence.
//!
//! This trait allows the engine to persist published stylesheets without
//! being tied to a physical backing store.

use crate::error::StoreError;
use std::fmt::Debug;
use std::sync::Arc;

/// Shared blob data type (reference-counted bytes).
pub type SharedBlob = Arc<Vec<u8>>;

/// A trait for writing and reading blobs at string keys.
///
/// The engine only ever needs three operations, so implementations can sit
/// on top of:
/// - Local filesystem
/// - In-memory storage
/// - Object storage (S3-compatible and friends)
///
/// # Implementations
///
/// - `FilesystemBlobStore`: writes under a public directory (native)
/// - `InMemoryBlobStore`: pre-populated memory (always available)
pub trait BlobStore: Send + Sync + Debug {
    /// Write a blob at the given key, replacing any previous content as a
    /// whole. Readers observe either the old bytes or the new bytes, never
    /// a mix.
    fn put(&self, key: &str, data: &[u8]) -> Result<(), StoreError>;

    /// Read the blob at the given key.
    fn get(&self, key: &str) -> Result<SharedBlob, StoreError>;

    /// Check whether a blob exists at the given key.
    fn exists(&self, key: &str) -> bool;

    /// Returns a human-readable name for this store (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory blob store.
///
/// The simplest store; used for tests and for preview environments where
/// published CSS never needs to outlive the process.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blobs: std::sync::RwLock<std::collections::HashMap<String, SharedBlob>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: std::sync::RwLock::new(std::collections::HashMap::new()),
        }
    }

    /// Get the number of blobs in the store.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.blobs.read().map(|b| b.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    ///
    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.blobs.read().map(|b| b.is_empty()).unwrap_or(true)
    }
}

impl BlobStore for InMemoryBlobStore {
    fn put(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let mut blobs = self.blobs.write().map_err(|_| StoreError::WriteFailed {
            key: key.to_string(),
            message: "blob store lock poisoned".to_string(),
        })?;
        blobs.insert(key.to_string(), Arc::new(data.to_vec()));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<SharedBlob, StoreError> {
        let blobs = self.blobs.read().map_err(|_| StoreError::ReadFailed {
            key: key.to_string(),
            message: "blob store lock poisoned".to_string(),
        })?;
        blobs
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn exists(&self, key: &str) -> bool {
        self.blobs
            .read()
            .map(|b| b.contains_key(key))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryBlobStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let store = InMemoryBlobStore::new();
        store.put("themes/a.css", b":root {}").unwrap();

        let data = store.get("themes/a.css").unwrap();
        assert_eq!(&*data, b":root {}");
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = InMemoryBlobStore::new();
        assert!(matches!(
            store.get("nope.css"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_exists() {
        let store = InMemoryBlobStore::new();
        store.put("a.css", b"x").unwrap();

        assert!(store.exists("a.css"));
        assert!(!store.exists("b.css"));
    }

    #[test]
    fn test_put_replaces_whole_blob() {
        let store = InMemoryBlobStore::new();
        store.put("a.css", b"original").unwrap();
        store.put("a.css", b"updated").unwrap();

        assert_eq!(&*store.get("a.css").unwrap(), b"updated");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_blob_round_trips() {
        let store = InMemoryBlobStore::new();
        store.put("empty.css", b"").unwrap();
        assert!(store.exists("empty.css"));
        assert!(store.get("empty.css").unwrap().is_empty());
    }
}
