//! Capture session state machine

use std::fmt;

use thiserror::Error;

/// Opaque token identifying an in-progress capture, issued by the driver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureHandle(String);

impl CaptureHandle {
    /// Create a handle from a driver-assigned token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the driver-assigned token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Capture session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Recording,
    Finalizing,
}

impl SessionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Finalizing => "finalizing",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: SessionState,
    pub action: String,
}

/// Capture session entity.
/// Owns the state of a single in-progress capture and the driver handle
/// while one is active.
///
/// State machine:
///   IDLE -> RECORDING (begin_recording)
///   RECORDING -> FINALIZING (begin_finalizing)
///   FINALIZING -> IDLE (finish)
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: SessionState,
    handle: Option<CaptureHandle>,
}

impl CaptureSession {
    /// Create a new capture session in idle state
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            handle: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == SessionState::Recording
    }

    /// Check if currently finalizing
    pub fn is_finalizing(&self) -> bool {
        self.state == SessionState::Finalizing
    }

    /// Transition from IDLE to RECORDING, taking ownership of the driver
    /// handle for the duration of the capture
    pub fn begin_recording(
        &mut self,
        handle: CaptureHandle,
    ) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start recording".to_string(),
            });
        }
        self.state = SessionState::Recording;
        self.handle = Some(handle);
        Ok(())
    }

    /// Transition from RECORDING to FINALIZING, releasing the driver handle
    /// to the caller for teardown
    pub fn begin_finalizing(&mut self) -> Result<CaptureHandle, InvalidStateTransition> {
        if self.state != SessionState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop recording".to_string(),
            });
        }
        self.state = SessionState::Finalizing;
        // Handle is always present in the recording state
        self.handle.take().ok_or(InvalidStateTransition {
            current_state: self.state,
            action: "stop recording".to_string(),
        })
    }

    /// Transition from FINALIZING to IDLE
    pub fn finish(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Finalizing {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "finish".to_string(),
            });
        }
        self.state = SessionState::Idle;
        self.handle = None;
        Ok(())
    }
}
