//! Note catalog use cases
//!
//! Two persistence strategies coexist behind one trait: [`MetadataCatalog`]
//! keeps a serialized collection in a key/value store, while
//! [`DirectoryCatalog`] treats the backing directory listing as the source
//! of truth. The deployment picks the variant; their semantics are never
//! merged.

mod directory;
mod metadata;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::note::{Note, NoteId};

pub use directory::DirectoryCatalog;
pub use metadata::MetadataCatalog;

/// Errors from catalog operations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Note name cannot be empty")]
    InvalidName,

    #[error("No note found for identity: {0}")]
    NotFound(String),

    #[error("Failed to load notes: {0}")]
    LoadFailed(String),

    #[error("Failed to persist notes: {0}")]
    PersistenceFailed(String),
}

/// The durable collection of voice notes.
///
/// Implementations guarantee the in-memory view and the durable view
/// converge after every mutation: a failed mutation leaves both unchanged.
#[async_trait]
pub trait NoteCatalog: Send + Sync {
    /// Repopulate the in-memory list from the backing store.
    /// On failure the previous in-memory view is kept.
    async fn load(&mut self) -> Result<(), CatalogError>;

    /// Add a finalized note to the catalog
    async fn create(&mut self, note: Note) -> Result<(), CatalogError>;

    /// Change the display name of the note identified by `id`.
    ///
    /// # Returns
    /// The updated entry. In the directory-backed variant the identity
    /// changes along with the filename.
    async fn rename(&mut self, id: &NoteId, new_name: &str) -> Result<Note, CatalogError>;

    /// Remove the note identified by `id` and its audio resource
    async fn delete(&mut self, id: &NoteId) -> Result<(), CatalogError>;

    /// The current in-memory view
    fn notes(&self) -> &[Note];

    /// Derived read-only view; never mutates the backing collection
    fn filter(&self, predicate: &dyn Fn(&Note) -> bool) -> Vec<Note> {
        self.notes()
            .iter()
            .filter(|note| predicate(note))
            .cloned()
            .collect()
    }
}

/// Reject empty or whitespace-only display names
pub(crate) fn validated_name(name: &str) -> Result<&str, CatalogError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_name_rejects_empty() {
        assert!(matches!(
            validated_name(""),
            Err(CatalogError::InvalidName)
        ));
        assert!(matches!(
            validated_name("   "),
            Err(CatalogError::InvalidName)
        ));
    }

    #[test]
    fn validated_name_trims() {
        assert_eq!(validated_name("  Memo  ").unwrap(), "Memo");
    }
}
