//! Recording session use case

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};

use super::catalog::{CatalogError, NoteCatalog};
use super::ports::{CaptureDriver, CaptureError, CaptureMode, Permission};
use crate::domain::note::Note;
use crate::domain::session::{CaptureSession, InvalidStateTransition, SessionState};

/// Errors from the recording session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Microphone permission denied")]
    PermissionDenied,

    #[error("A recording is already in progress")]
    AlreadyRecording,

    #[error("Capture produced no usable recording")]
    CaptureUnavailable,

    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Drives a single in-progress capture.
///
/// Owns the capture state machine, an elapsed-seconds counter for caller
/// display, and the translation of driver failures into typed signals. The
/// state lock is held across every driver await, so an interleaved trigger
/// (a rapid second tap) observes the recording state instead of racing.
pub struct RecordingSession<D> {
    driver: Arc<D>,
    mode: CaptureMode,
    session: Mutex<CaptureSession>,
    elapsed_secs: Arc<AtomicU64>,
    elapsed_tx: watch::Sender<u64>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl<D> RecordingSession<D>
where
    D: CaptureDriver + 'static,
{
    /// Create a session over `driver` with the default capture mode
    pub fn new(driver: D) -> Self {
        Self::with_mode(driver, CaptureMode::default())
    }

    /// Create a session over `driver` with an explicit capture mode
    pub fn with_mode(driver: D, mode: CaptureMode) -> Self {
        let (elapsed_tx, _) = watch::channel(0);
        Self {
            driver: Arc::new(driver),
            mode,
            session: Mutex::new(CaptureSession::new()),
            elapsed_secs: Arc::new(AtomicU64::new(0)),
            elapsed_tx,
            ticker: Mutex::new(None),
        }
    }

    /// Get the current session state
    pub async fn state(&self) -> SessionState {
        self.session.lock().await.state()
    }

    /// Check if currently recording
    pub async fn is_recording(&self) -> bool {
        self.session.lock().await.is_recording()
    }

    /// Get elapsed recording time in whole seconds
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs.load(Ordering::SeqCst)
    }

    /// Subscribe to elapsed-seconds updates (one per second while
    /// recording, reset to zero between captures)
    pub fn subscribe_elapsed(&self) -> watch::Receiver<u64> {
        self.elapsed_tx.subscribe()
    }

    /// Start a new capture.
    ///
    /// Permission is checked before any state changes; a denial leaves the
    /// session idle. A start while a capture is active fails with
    /// `AlreadyRecording` and leaves the active capture untouched.
    pub async fn start(&self) -> Result<(), SessionError> {
        let mut session = self.session.lock().await;
        if !session.is_idle() {
            return Err(SessionError::AlreadyRecording);
        }

        match self.driver.request_permission().await? {
            Permission::Granted => {}
            Permission::Denied => return Err(SessionError::PermissionDenied),
        }

        self.driver.configure(self.mode).await?;
        let handle = self.driver.start().await?;
        session.begin_recording(handle)?;

        self.reset_elapsed();
        *self.ticker.lock().await = Some(self.spawn_ticker());

        info!("Recording started");
        Ok(())
    }

    /// Stop the active capture and build the resulting note.
    ///
    /// A blank or absent `requested_name` falls back to a generated
    /// placeholder. A stop with no active capture is a logged no-op
    /// returning `None`. If the driver yields no usable location the
    /// session reports `CaptureUnavailable` and returns to idle without
    /// producing a note.
    pub async fn stop(&self, requested_name: Option<&str>) -> Result<Option<Note>, SessionError> {
        let mut session = self.session.lock().await;
        if session.is_idle() {
            warn!("Stop requested with no active recording");
            return Ok(None);
        }

        let handle = session.begin_finalizing()?;
        // No counter updates once teardown begins
        self.halt_ticker().await;

        let location = match self.driver.stop(handle).await {
            Ok(location) => location,
            Err(e) => {
                session.finish()?;
                self.reset_elapsed();
                return Err(e.into());
            }
        };

        session.finish()?;
        self.reset_elapsed();

        match location {
            None => Err(SessionError::CaptureUnavailable),
            Some(path) => {
                let note = Note::finalized(requested_name, path);
                info!(name = %note.name, "Recording finalized");
                Ok(Some(note))
            }
        }
    }

    /// Stop the active capture and hand the finalized note to `catalog`.
    ///
    /// The note's location is owned by the catalog from here on. If the
    /// catalog rejects the note the caller is told creation failed and the
    /// note does not appear in the collection.
    pub async fn stop_into<C>(
        &self,
        requested_name: Option<&str>,
        catalog: &mut C,
    ) -> Result<Option<Note>, SessionError>
    where
        C: NoteCatalog + ?Sized,
    {
        match self.stop(requested_name).await? {
            None => Ok(None),
            Some(note) => {
                catalog.create(note.clone()).await?;
                Ok(Some(note))
            }
        }
    }

    fn reset_elapsed(&self) {
        self.elapsed_secs.store(0, Ordering::SeqCst);
        let _ = self.elapsed_tx.send(0);
    }

    fn spawn_ticker(&self) -> JoinHandle<()> {
        let driver = Arc::clone(&self.driver);
        let elapsed = Arc::clone(&self.elapsed_secs);
        let tx = self.elapsed_tx.clone();

        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                // The counter stops the moment the driver reports the
                // capture finished, even mid-finalize
                if !driver.is_capturing() {
                    break;
                }
                let secs = elapsed.fetch_add(1, Ordering::SeqCst) + 1;
                let _ = tx.send(secs);
            }
        })
    }

    async fn halt_ticker(&self) {
        if let Some(task) = self.ticker.lock().await.take() {
            task.abort();
            let _ = task.await;
        }
    }
}
