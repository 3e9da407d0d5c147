//! No-op capture adapter

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{CaptureDriver, CaptureError, CaptureMode, Permission};
use crate::domain::session::CaptureHandle;

/// No-op capture driver for environments without capture hardware.
///
/// Permission is granted and start succeeds, but stop never yields a
/// usable recording, so the session reports the capture as unavailable.
#[derive(Debug, Default)]
pub struct NoOpCaptureDriver;

impl NoOpCaptureDriver {
    /// Create a new no-op capture driver
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CaptureDriver for NoOpCaptureDriver {
    async fn request_permission(&self) -> Result<Permission, CaptureError> {
        Ok(Permission::Granted)
    }

    async fn configure(&self, _mode: CaptureMode) -> Result<(), CaptureError> {
        Ok(())
    }

    async fn start(&self) -> Result<CaptureHandle, CaptureError> {
        Ok(CaptureHandle::new("noop"))
    }

    async fn stop(&self, _handle: CaptureHandle) -> Result<Option<PathBuf>, CaptureError> {
        Ok(None)
    }

    fn is_capturing(&self) -> bool {
        false
    }
}
