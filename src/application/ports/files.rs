//! File store port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// File store errors
#[derive(Debug, Clone, Error)]
pub enum FileStoreError {
    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("File operation failed: {0}")]
    Io(String),
}

/// Port for the flat file store holding the audio resources
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Check whether `path` exists
    async fn exists(&self, path: &Path) -> bool;

    /// Create the directory at `path`, including parents
    async fn create_dir(&self, path: &Path) -> Result<(), FileStoreError>;

    /// List the entry names directly under `path`.
    /// Order is store-defined and not guaranteed sorted.
    async fn list_dir(&self, path: &Path) -> Result<Vec<String>, FileStoreError>;

    /// Move or rename `from` to `to`
    async fn rename(&self, from: &Path, to: &Path) -> Result<(), FileStoreError>;

    /// Delete the file at `path`
    async fn remove(&self, path: &Path) -> Result<(), FileStoreError>;
}
