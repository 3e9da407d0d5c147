//! Local filesystem file store adapter

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{FileStore, FileStoreError};

fn map_io(path: &Path, e: std::io::Error) -> FileStoreError {
    if e.kind() == ErrorKind::NotFound {
        FileStoreError::NotFound(path.display().to_string())
    } else {
        FileStoreError::Io(e.to_string())
    }
}

/// File store over the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl LocalFileStore {
    /// Create a new local file store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }

    async fn create_dir(&self, path: &Path) -> Result<(), FileStoreError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<String>, FileStoreError> {
        let mut entries = fs::read_dir(path).await.map_err(|e| map_io(path, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?
        {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), FileStoreError> {
        fs::rename(from, to).await.map_err(|e| map_io(from, e))
    }

    async fn remove(&self, path: &Path) -> Result<(), FileStoreError> {
        fs::remove_file(path).await.map_err(|e| map_io(path, e))
    }
}
