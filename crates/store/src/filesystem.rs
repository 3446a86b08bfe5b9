//! Filesystem-backed blob store for native deployments.
//!
//! Writes published stylesheets under a base directory (the web server's
//! public root). Keys are validated so they cannot escape the base
//! directory, and writes go through a sibling temp file plus rename so a
//! concurrent reader sees either the fully-old or fully-new stylesheet,
//! never a torn one.

use crate::blob::{BlobStore, SharedBlob};
use crate::error::StoreError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A blob store that persists under a local base directory.
#[derive(Debug)]
pub struct FilesystemBlobStore {
    base_path: PathBuf,
}

impl FilesystemBlobStore {
    /// Creates a store rooted at the given base directory.
    ///
    /// All keys are resolved relative to this directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the base path for this store.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves and validates a key relative to the base path.
    ///
    /// Returns `None` if the key is absolute or contains a parent-dir
    /// component (it would escape the base directory).
    fn resolve_key_safe(&self, key: &str) -> Option<PathBuf> {
        let key_path = Path::new(key);
        if key_path.is_absolute() {
            return None;
        }
        for component in key_path.components() {
            if let std::path::Component::ParentDir = component {
                return None;
            }
        }
        Some(self.base_path.join(key_path))
    }
}

impl BlobStore for FilesystemBlobStore {
    fn put(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let full_path = self
            .resolve_key_safe(key)
            .ok_or_else(|| StoreError::WriteFailed {
                key: key.to_string(),
                message: "key escapes base directory".to_string(),
            })?;

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }

        // Write to a sibling temp file, then rename over the target:
        // rename within one directory is atomic on POSIX filesystems.
        let mut tmp_name = full_path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        std::fs::write(&tmp_path, data).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        std::fs::rename(&tmp_path, &full_path).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        log::debug!("wrote {} bytes at '{}'", data.len(), key);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<SharedBlob, StoreError> {
        let full_path = self
            .resolve_key_safe(key)
            .ok_or_else(|| StoreError::NotFound(format!("{} (path traversal blocked)", key)))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(key.to_string())
            } else {
                StoreError::ReadFailed {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, key: &str) -> bool {
        self.resolve_key_safe(key)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemBlobStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path());

        store.put("themes/blog.css", b":root {}").unwrap();
        assert!(store.exists("themes/blog.css"));
        assert_eq!(&*store.get("themes/blog.css").unwrap(), b":root {}");
    }

    #[test]
    fn test_put_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path());

        store.put("public/themes/deep/a.css", b"x").unwrap();
        assert!(dir.path().join("public/themes/deep/a.css").is_file());
    }

    #[test]
    fn test_put_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path());

        store.put("a.css", b"old").unwrap();
        store.put("a.css", b"new").unwrap();
        assert_eq!(&*store.get("a.css").unwrap(), b"new");
    }

    #[test]
    fn test_traversal_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path());

        assert!(store.put("../escape.css", b"x").is_err());
        assert!(matches!(
            store.get("../../etc/passwd"),
            Err(StoreError::NotFound(_))
        ));
        assert!(!store.exists("../escape.css"));
    }

    #[test]
    fn test_absolute_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path());
        assert!(store.put("/tmp/abs.css", b"x").is_err());
    }

    #[test]
    fn test_missing_blob_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path());
        assert!(matches!(store.get("nope.css"), Err(StoreError::NotFound(_))));
    }
}
