//! Directory-backed note catalog

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{validated_name, CatalogError, NoteCatalog};
use crate::application::ports::{FileStore, FileStoreError};
use crate::domain::note::{derive_file_name, Note, NoteId};

/// Catalog that treats the managed directory listing as the source of
/// truth: the filename is the identity, and the in-memory view is
/// re-derived from the listing after every mutation rather than trusting
/// incremental edits.
///
/// Enumeration order is whatever the store yields; callers must not assume
/// sorted order.
pub struct DirectoryCatalog<F> {
    files: F,
    dir: PathBuf,
    notes: Vec<Note>,
}

impl<F> DirectoryCatalog<F>
where
    F: FileStore,
{
    /// Create a catalog managing `dir`
    pub fn new(files: F, dir: impl Into<PathBuf>) -> Self {
        Self {
            files,
            dir: dir.into(),
            notes: Vec::new(),
        }
    }

    /// The managed directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn refresh(&mut self) -> Result<(), CatalogError> {
        if !self.files.exists(&self.dir).await {
            self.files
                .create_dir(&self.dir)
                .await
                .map_err(|e| CatalogError::LoadFailed(e.to_string()))?;
        }

        let names = self
            .files
            .list_dir(&self.dir)
            .await
            .map_err(|e| CatalogError::LoadFailed(e.to_string()))?;

        debug!(dir = %self.dir.display(), count = names.len(), "Listed note directory");
        self.notes = names
            .iter()
            .map(|name| Note::from_listing(&self.dir, name))
            .collect();
        Ok(())
    }

    fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }
}

#[async_trait]
impl<F> NoteCatalog for DirectoryCatalog<F>
where
    F: FileStore,
{
    async fn load(&mut self) -> Result<(), CatalogError> {
        self.refresh().await
    }

    async fn create(&mut self, note: Note) -> Result<(), CatalogError> {
        let target = self.dir.join(derive_file_name(&note.name, &note.location));

        // The capture lands outside the managed directory; claim it by
        // moving it in. A note already placed under the directory is left
        // where it is.
        if note.location != target {
            if self.files.exists(&target).await {
                return Err(CatalogError::PersistenceFailed(format!(
                    "target already exists: {}",
                    target.display()
                )));
            }
            self.files
                .rename(&note.location, &target)
                .await
                .map_err(|e| CatalogError::PersistenceFailed(e.to_string()))?;
        }

        self.refresh().await
    }

    async fn rename(&mut self, id: &NoteId, new_name: &str) -> Result<Note, CatalogError> {
        let name = validated_name(new_name)?;
        let note = self
            .find(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let target_name = derive_file_name(name, &note.location);
        let target = self.dir.join(&target_name);
        if target == note.location {
            return Ok(note);
        }
        if self.files.exists(&target).await {
            return Err(CatalogError::PersistenceFailed(format!(
                "target already exists: {}",
                target.display()
            )));
        }

        self.files
            .rename(&note.location, &target)
            .await
            .map_err(|e| match e {
                FileStoreError::NotFound(path) => CatalogError::NotFound(path),
                e => CatalogError::PersistenceFailed(e.to_string()),
            })?;

        self.refresh().await?;
        // Filename is identity, so the rename produced a new one
        Ok(Note::from_listing(&self.dir, &target_name))
    }

    async fn delete(&mut self, id: &NoteId) -> Result<(), CatalogError> {
        let location = match self.find(id) {
            // Already gone; a stale second tap is treated as success
            None => return Ok(()),
            Some(note) => note.location.clone(),
        };

        if self.files.exists(&location).await {
            self.files
                .remove(&location)
                .await
                .map_err(|e| CatalogError::PersistenceFailed(e.to_string()))?;
        }

        self.refresh().await
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }
}
