//! No-op playback adapter

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{PlaybackDriver, PlaybackError, PlaybackHandle};

/// No-op playback adapter that does nothing
///
/// Used when no audio output is available or playback is disabled.
#[derive(Debug, Default)]
pub struct NoOpPlaybackDriver;

impl NoOpPlaybackDriver {
    /// Create a new no-op playback adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlaybackDriver for NoOpPlaybackDriver {
    async fn play(&self, _location: &Path) -> Result<PlaybackHandle, PlaybackError> {
        Ok(PlaybackHandle::new("noop"))
    }

    async fn stop(&self, _handle: PlaybackHandle) -> Result<(), PlaybackError> {
        Ok(())
    }
}
