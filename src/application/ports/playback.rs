//! Audio playback port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("Failed to start playback: {0}")]
    StartFailed(String),

    #[error("Failed to stop playback: {0}")]
    StopFailed(String),

    #[error("Audio resource not found: {0}")]
    SourceMissing(String),
}

/// Opaque token identifying an active playback, issued by the driver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackHandle(String);

impl PlaybackHandle {
    /// Create a handle from a driver-assigned token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the driver-assigned token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Port for audio playback
#[async_trait]
pub trait PlaybackDriver: Send + Sync {
    /// Start playing the audio at `location`.
    ///
    /// # Returns
    /// A handle identifying the active playback
    async fn play(&self, location: &Path) -> Result<PlaybackHandle, PlaybackError>;

    /// Stop the playback identified by `handle`
    async fn stop(&self, handle: PlaybackHandle) -> Result<(), PlaybackError>;
}
