//! Key/value metadata store port interface

use async_trait::async_trait;
use thiserror::Error;

/// Metadata store errors
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    #[error("Failed to read metadata: {0}")]
    ReadFailed(String),

    #[error("Failed to write metadata: {0}")]
    WriteFailed(String),
}

/// Port for persistent key/value metadata storage.
///
/// The catalog stores the whole serialized collection under one fixed key,
/// so a store only needs get/set semantics.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Read the value stored under `key`, or None if absent
    async fn get(&self, key: &str) -> Result<Option<String>, MetadataError>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), MetadataError>;
}
