//! Directory catalog integration tests
//!
//! Exercises the directory-backed catalog against the real local file
//! store: the listing is the source of truth and the filename is the
//! identity.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use voxnote::application::catalog::{CatalogError, DirectoryCatalog, NoteCatalog};
use voxnote::application::ports::FileStore;
use voxnote::domain::note::{Note, NoteId};
use voxnote::infrastructure::LocalFileStore;

fn managed_dir(root: &Path) -> PathBuf {
    root.join("recordings")
}

fn place_file(dir: &Path, name: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, b"audio-bytes").unwrap();
    path
}

fn capture(root: &Path, name: &str) -> Note {
    // A fresh capture lands outside the managed directory
    Note::finalized(Some(name), place_file(&root.join("spool"), "capture.m4a"))
}

#[tokio::test]
async fn load_creates_missing_directory() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());

    catalog.load().await.unwrap();
    assert!(catalog.notes().is_empty());
    assert!(dir.is_dir());
}

#[tokio::test]
async fn load_derives_view_from_listing() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    place_file(&dir, "standup.m4a");
    place_file(&dir, "retro.m4a");

    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());
    catalog.load().await.unwrap();

    let ids: HashSet<_> = catalog.notes().iter().map(|n| n.id.clone()).collect();
    assert_eq!(
        ids,
        HashSet::from([NoteId::from("standup.m4a"), NoteId::from("retro.m4a")])
    );
    // The view mirrors whatever order the store yields
    let listed = LocalFileStore::new().list_dir(&dir).await.unwrap();
    let names: Vec<_> = catalog.notes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(names, listed.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn create_moves_capture_into_managed_directory() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());
    catalog.load().await.unwrap();

    let note = capture(root.path(), "Standup");
    let source = note.location.clone();
    catalog.create(note).await.unwrap();

    assert!(!source.exists());
    assert!(dir.join("Standup.m4a").exists());
    assert_eq!(catalog.notes().len(), 1);
    assert_eq!(catalog.notes()[0].id, NoteId::from("Standup.m4a"));
}

#[tokio::test]
async fn create_rejects_filename_collision() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    place_file(&dir, "Standup.m4a");

    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir);
    catalog.load().await.unwrap();

    let err = catalog.create(capture(root.path(), "Standup")).await.unwrap_err();
    assert!(matches!(err, CatalogError::PersistenceFailed(_)));
    assert_eq!(catalog.notes().len(), 1);
}

#[tokio::test]
async fn rename_changes_identity_with_the_filename() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    place_file(&dir, "old.m4a");

    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());
    catalog.load().await.unwrap();

    let renamed = catalog
        .rename(&NoteId::from("old.m4a"), "new name")
        .await
        .unwrap();
    assert_eq!(renamed.id, NoteId::from("new name.m4a"));
    assert!(dir.join("new name.m4a").exists());
    assert!(!dir.join("old.m4a").exists());
    assert_eq!(catalog.notes().len(), 1);
    assert_eq!(catalog.notes()[0].id, renamed.id);
}

#[tokio::test]
async fn rename_blank_name_fails_without_touching_files() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    place_file(&dir, "old.m4a");

    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());
    catalog.load().await.unwrap();

    for name in ["", "   "] {
        let err = catalog
            .rename(&NoteId::from("old.m4a"), name)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidName));
    }
    assert!(dir.join("old.m4a").exists());
}

#[tokio::test]
async fn rename_unknown_identity_is_not_found() {
    let root = tempfile::tempdir().unwrap();
    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), managed_dir(root.path()));
    catalog.load().await.unwrap();

    let err = catalog
        .rename(&NoteId::from("missing.m4a"), "name")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn rename_to_existing_filename_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    place_file(&dir, "a.m4a");
    place_file(&dir, "b.m4a");

    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());
    catalog.load().await.unwrap();

    let err = catalog.rename(&NoteId::from("a.m4a"), "b").await.unwrap_err();
    assert!(matches!(err, CatalogError::PersistenceFailed(_)));
    assert!(dir.join("a.m4a").exists());
    assert!(dir.join("b.m4a").exists());
}

#[tokio::test]
async fn delete_removes_file_and_entry() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    place_file(&dir, "a.m4a");

    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());
    catalog.load().await.unwrap();
    catalog.delete(&NoteId::from("a.m4a")).await.unwrap();

    assert!(catalog.notes().is_empty());
    assert!(!dir.join("a.m4a").exists());
}

#[tokio::test]
async fn delete_unknown_identity_succeeds() {
    let root = tempfile::tempdir().unwrap();
    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), managed_dir(root.path()));
    catalog.load().await.unwrap();

    // A stale double-tap must not surface an error
    catalog.delete(&NoteId::from("missing.m4a")).await.unwrap();
    assert!(catalog.notes().is_empty());
}

#[tokio::test]
async fn delete_twice_is_idempotent() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    place_file(&dir, "a.m4a");

    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir);
    catalog.load().await.unwrap();
    catalog.delete(&NoteId::from("a.m4a")).await.unwrap();
    catalog.delete(&NoteId::from("a.m4a")).await.unwrap();
    assert!(catalog.notes().is_empty());
}

#[tokio::test]
async fn view_converges_with_listing_after_mutations() {
    let root = tempfile::tempdir().unwrap();
    let dir = managed_dir(root.path());
    let mut catalog = DirectoryCatalog::new(LocalFileStore::new(), dir.clone());
    catalog.load().await.unwrap();

    catalog.create(capture(root.path(), "one")).await.unwrap();
    catalog.create(capture(root.path(), "two")).await.unwrap();
    catalog.rename(&NoteId::from("one.m4a"), "uno").await.unwrap();
    catalog.delete(&NoteId::from("two.m4a")).await.unwrap();

    let listed: HashSet<_> = LocalFileStore::new()
        .list_dir(&dir)
        .await
        .unwrap()
        .into_iter()
        .collect();
    let held: HashSet<_> = catalog
        .notes()
        .iter()
        .map(|n| n.id.as_str().to_string())
        .collect();
    assert_eq!(held, listed);
    assert_eq!(held, HashSet::from(["uno.m4a".to_string()]));
}
