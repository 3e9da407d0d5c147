//! Application layer - Use cases and port interfaces
//!
//! Contains the core lifecycle operations and trait definitions
//! for external system interactions.

pub mod catalog;
pub mod playback;
pub mod ports;
pub mod recording;

// Re-export use cases
pub use catalog::{CatalogError, DirectoryCatalog, MetadataCatalog, NoteCatalog};
pub use playback::PlaybackController;
pub use recording::{RecordingSession, SessionError};
