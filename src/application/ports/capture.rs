//! Audio capture port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::CaptureHandle;

/// Capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Failed to configure capture: {0}")]
    ConfigureFailed(String),

    #[error("Failed to start capture: {0}")]
    StartFailed(String),

    #[error("Failed to stop capture: {0}")]
    StopFailed(String),

    #[error("No audio input device available")]
    NoAudioDevice,
}

/// Outcome of a capture permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Capture quality mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// High-quality preset for voice memos
    #[default]
    HighQuality,
    /// Speech-optimized preset (lower bitrate)
    Speech,
}

/// Port for the audio capture driver
#[async_trait]
pub trait CaptureDriver: Send + Sync {
    /// Ask the platform for capture permission.
    /// Must be cheap to call repeatedly; the session checks before every
    /// start.
    async fn request_permission(&self) -> Result<Permission, CaptureError>;

    /// Configure the driver for an upcoming capture
    async fn configure(&self, mode: CaptureMode) -> Result<(), CaptureError>;

    /// Start capturing.
    ///
    /// # Returns
    /// A handle identifying the in-progress capture
    async fn start(&self) -> Result<CaptureHandle, CaptureError>;

    /// Stop the capture identified by `handle` and release its resources.
    ///
    /// # Returns
    /// The location of the captured audio, or None if the driver produced
    /// no usable recording
    async fn stop(&self, handle: CaptureHandle) -> Result<Option<PathBuf>, CaptureError>;

    /// Check if a capture is currently running.
    /// Reports false as soon as the driver considers the capture finished,
    /// even if teardown is still in progress.
    fn is_capturing(&self) -> bool;
}
