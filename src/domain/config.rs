//! Storage configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Well-known key the metadata catalog persists the whole collection under
pub const DEFAULT_COLLECTION_KEY: &str = "voice_notes";

/// Storage configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory the directory-backed catalog manages
    pub notes_dir: Option<PathBuf>,
    /// Metadata collection key
    pub collection_key: Option<String>,
}

impl StorageConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            notes_dir: Some(default_notes_dir()),
            collection_key: Some(DEFAULT_COLLECTION_KEY.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            notes_dir: other.notes_dir.or(self.notes_dir),
            collection_key: other.collection_key.or(self.collection_key),
        }
    }

    /// Get the managed notes directory, or the platform default if not set
    pub fn notes_dir_or_default(&self) -> PathBuf {
        self.notes_dir.clone().unwrap_or_else(default_notes_dir)
    }

    /// Get the collection key, or the well-known default if not set
    pub fn collection_key_or_default(&self) -> &str {
        self.collection_key
            .as_deref()
            .unwrap_or(DEFAULT_COLLECTION_KEY)
    }
}

fn default_notes_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voxnote")
        .join("recordings")
}
