//! Metadata-backed note catalog

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{validated_name, CatalogError, NoteCatalog};
use crate::application::ports::{FileStore, MetadataStore};
use crate::domain::note::{Note, NoteId};

/// Catalog persisting the whole collection as a JSON document under one
/// well-known key.
///
/// Consistency comes from read-modify-write of the entire collection after
/// every mutation; a persistence failure rolls the in-memory change back so
/// the two views never diverge. Insertion order is preserved.
pub struct MetadataCatalog<S, F> {
    store: S,
    files: F,
    key: String,
    notes: Vec<Note>,
}

impl<S, F> MetadataCatalog<S, F>
where
    S: MetadataStore,
    F: FileStore,
{
    /// Create a catalog over `store`, keyed by `key`.
    /// `files` is used to release audio resources on delete.
    pub fn new(store: S, files: F, key: impl Into<String>) -> Self {
        Self {
            store,
            files,
            key: key.into(),
            notes: Vec::new(),
        }
    }

    async fn persist(&self) -> Result<(), CatalogError> {
        let payload = serde_json::to_string(&self.notes)
            .map_err(|e| CatalogError::PersistenceFailed(e.to_string()))?;
        self.store
            .set(&self.key, &payload)
            .await
            .map_err(|e| CatalogError::PersistenceFailed(e.to_string()))
    }

    fn position(&self, id: &NoteId) -> Result<usize, CatalogError> {
        self.notes
            .iter()
            .position(|note| &note.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<S, F> NoteCatalog for MetadataCatalog<S, F>
where
    S: MetadataStore,
    F: FileStore,
{
    async fn load(&mut self) -> Result<(), CatalogError> {
        let raw = match self.store.get(&self.key).await {
            Ok(raw) => raw,
            // Keep the previous view when the store is unreadable
            Err(e) => return Err(CatalogError::LoadFailed(e.to_string())),
        };

        match raw {
            None => {
                self.notes.clear();
                Ok(())
            }
            Some(raw) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => {
                    debug!(count = notes.len(), "Loaded note collection");
                    self.notes = notes;
                    Ok(())
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "Stored note collection is corrupt");
                    Err(CatalogError::LoadFailed(e.to_string()))
                }
            },
        }
    }

    async fn create(&mut self, note: Note) -> Result<(), CatalogError> {
        self.notes.push(note);
        if let Err(e) = self.persist().await {
            self.notes.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn rename(&mut self, id: &NoteId, new_name: &str) -> Result<Note, CatalogError> {
        let name = validated_name(new_name)?;
        let index = self.position(id)?;

        let previous = std::mem::replace(&mut self.notes[index].name, name.to_string());
        if let Err(e) = self.persist().await {
            self.notes[index].name = previous;
            return Err(e);
        }
        Ok(self.notes[index].clone())
    }

    async fn delete(&mut self, id: &NoteId) -> Result<(), CatalogError> {
        let index = self.position(id)?;

        let removed = self.notes.remove(index);
        if let Err(e) = self.persist().await {
            self.notes.insert(index, removed);
            return Err(e);
        }

        // Both views already agree; a failure here only orphans audio bytes
        if self.files.exists(&removed.location).await {
            if let Err(e) = self.files.remove(&removed.location).await {
                warn!(
                    location = %removed.location.display(),
                    error = %e,
                    "Failed to delete audio resource"
                );
            }
        }
        Ok(())
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }
}
