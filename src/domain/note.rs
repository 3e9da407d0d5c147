//! Voice note entity and identifier

use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a voice note.
///
/// The metadata-backed catalog generates a UUID independent of the display
/// name. The directory-backed catalog uses the filename itself, so the id
/// changes when the note is renamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A persisted voice memo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier within the catalog
    pub id: NoteId,
    /// User-editable display label
    pub name: String,
    /// Location of the underlying audio bytes
    pub location: PathBuf,
    /// Human-readable timestamp captured at finalize time.
    /// Absent for notes re-derived from a directory listing, where the
    /// listing cannot recover it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Note {
    /// Build the note handed off by a finalized capture.
    ///
    /// A blank or absent requested name falls back to a generated
    /// placeholder.
    pub fn finalized(requested_name: Option<&str>, location: PathBuf) -> Self {
        let name = match requested_name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => placeholder_name(),
        };

        Self {
            id: NoteId::generate(),
            name,
            location,
            created_at: Some(local_timestamp()),
        }
    }

    /// Build a note from a directory listing entry.
    /// The filename is the identity; the display name is the file stem.
    pub fn from_listing(dir: &Path, file_name: &str) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| file_name.to_string());

        Self {
            id: NoteId::from(file_name),
            name: stem,
            location: dir.join(file_name),
            created_at: None,
        }
    }
}

/// Generate a placeholder display name with a random numeric suffix
pub fn placeholder_name() -> String {
    format!("Audio_{}", rand::thread_rng().gen_range(0..1000))
}

/// Current local time formatted for display
fn local_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Derive a filename from a display name, preserving the extension of the
/// source file. Path separators and other unsafe characters are replaced so
/// the result stays inside the managed directory.
pub fn derive_file_name(name: &str, source: &Path) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' | ':' => '_',
            c => c,
        })
        .collect();

    match source.extension() {
        Some(ext) => format!("{}.{}", sanitized, ext.to_string_lossy()),
        None => sanitized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = NoteId::generate();
        let b = NoteId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn finalized_uses_requested_name() {
        let note = Note::finalized(Some("Standup notes"), PathBuf::from("/tmp/a.m4a"));
        assert_eq!(note.name, "Standup notes");
        assert!(note.created_at.is_some());
    }

    #[test]
    fn finalized_trims_requested_name() {
        let note = Note::finalized(Some("  Standup  "), PathBuf::from("/tmp/a.m4a"));
        assert_eq!(note.name, "Standup");
    }

    #[test]
    fn finalized_blank_name_gets_placeholder() {
        let note = Note::finalized(Some("   "), PathBuf::from("/tmp/a.m4a"));
        assert!(note.name.starts_with("Audio_"));

        let note = Note::finalized(None, PathBuf::from("/tmp/a.m4a"));
        assert!(note.name.starts_with("Audio_"));
    }

    #[test]
    fn placeholder_suffix_in_range() {
        for _ in 0..32 {
            let name = placeholder_name();
            let suffix: u32 = name.strip_prefix("Audio_").unwrap().parse().unwrap();
            assert!(suffix < 1000);
        }
    }

    #[test]
    fn from_listing_uses_filename_as_identity() {
        let note = Note::from_listing(Path::new("/notes"), "memo.m4a");
        assert_eq!(note.id, NoteId::from("memo.m4a"));
        assert_eq!(note.name, "memo");
        assert_eq!(note.location, PathBuf::from("/notes/memo.m4a"));
        assert!(note.created_at.is_none());
    }

    #[test]
    fn derive_file_name_keeps_extension() {
        let name = derive_file_name("Standup", Path::new("/notes/old.m4a"));
        assert_eq!(name, "Standup.m4a");
    }

    #[test]
    fn derive_file_name_replaces_separators() {
        let name = derive_file_name("a/b\\c", Path::new("/notes/old.wav"));
        assert_eq!(name, "a_b_c.wav");
    }

    #[test]
    fn note_serde_round_trip() {
        let note = Note::finalized(Some("Memo"), PathBuf::from("/tmp/x.m4a"));
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }
}
