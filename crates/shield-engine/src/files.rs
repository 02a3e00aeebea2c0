//! # Document File Store
//!
//! Removal of stored upload files. Writing happens upstream (the HTTP
//! layer streams the upload to disk before the engine sees it); the
//! engine only needs to delete the file when its document record goes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by file store operations.
#[derive(Error, Debug)]
pub enum FileStoreError {
    /// The underlying filesystem operation failed.
    #[error("file store io error on {path:?}: {source}")]
    Io {
        /// The path involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Storage for uploaded document files.
pub trait FileStore: Send + Sync {
    /// Remove the stored file at the given document-root-relative path.
    ///
    /// Removing a path that no longer exists is not an error — the goal
    /// is absence.
    fn remove(&self, path: &str) -> Result<(), FileStoreError>;
}

/// [`FileStore`] over a local directory root.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileStore for LocalFileStore {
    fn remove(&self, path: &str) -> Result<(), FileStoreError> {
        let full = self.resolve(path);
        match std::fs::remove_file(&full) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FileStoreError::Io { path: full, source }),
        }
    }
}

/// [`FileStore`] that stores nothing and removes nothing. For tests and
/// deployments where uploads live behind an object store managed
/// elsewhere.
#[derive(Default)]
pub struct NullFileStore;

impl FileStore for NullFileStore {
    fn remove(&self, _path: &str) -> Result<(), FileStoreError> {
        Ok(())
    }
}
