//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces for plain
//! filesystem storage, plus no-op capture/playback adapters for headless
//! environments.

pub mod capture;
pub mod config;
pub mod playback;
pub mod store;

// Re-export adapters
pub use capture::NoOpCaptureDriver;
pub use config::XdgConfigStore;
pub use playback::NoOpPlaybackDriver;
pub use store::{JsonFileMetadataStore, LocalFileStore};
