//! JSON-file metadata store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{MetadataError, MetadataStore};

/// Metadata store keeping one JSON document per key on the local
/// filesystem, `<base_dir>/<key>.json`.
pub struct JsonFileMetadataStore {
    base_dir: PathBuf,
}

impl JsonFileMetadataStore {
    /// Create a store rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a store under the platform data directory
    pub fn default_location() -> Self {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("voxnote");
        Self { base_dir }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl MetadataStore for JsonFileMetadataStore {
    async fn get(&self, key: &str) -> Result<Option<String>, MetadataError> {
        let path = self.document_path(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MetadataError::ReadFailed(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), MetadataError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| MetadataError::WriteFailed(e.to_string()))?;

        fs::write(self.document_path(key), value)
            .await
            .map_err(|e| MetadataError::WriteFailed(e.to_string()))
    }
}
