//! Playback control use case

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use super::ports::{PlaybackDriver, PlaybackError, PlaybackHandle};
use crate::domain::note::{Note, NoteId};

/// Keeps at most one playback active process-wide.
///
/// Starting a note while another is playing stops the active one first.
/// Deleting or renaming a note does not stop its playback.
pub struct PlaybackController<P> {
    driver: Arc<P>,
    active: Mutex<Option<(NoteId, PlaybackHandle)>>,
}

impl<P> PlaybackController<P>
where
    P: PlaybackDriver,
{
    /// Create a controller over `driver`
    pub fn new(driver: P) -> Self {
        Self {
            driver: Arc::new(driver),
            active: Mutex::new(None),
        }
    }

    /// Start playing `note`, stopping the active playback first if any
    pub async fn play(&self, note: &Note) -> Result<(), PlaybackError> {
        let mut active = self.active.lock().await;

        if let Some((id, handle)) = active.take() {
            if let Err(e) = self.driver.stop(handle).await {
                warn!(note = %id, error = %e, "Failed to stop active playback");
            }
        }

        let handle = self.driver.play(&note.location).await?;
        *active = Some((note.id.clone(), handle));
        Ok(())
    }

    /// Stop the active playback; a stop with nothing playing is a no-op
    pub async fn stop(&self) -> Result<(), PlaybackError> {
        let mut active = self.active.lock().await;
        match active.take() {
            None => Ok(()),
            Some((_, handle)) => self.driver.stop(handle).await,
        }
    }

    /// Clear the active handle after the driver reports natural completion
    pub async fn on_finished(&self, handle: &PlaybackHandle) {
        let mut active = self.active.lock().await;
        if matches!(active.as_ref(), Some((_, current)) if current == handle) {
            *active = None;
        }
    }

    /// Id of the currently playing note, if any
    pub async fn current(&self) -> Option<NoteId> {
        self.active.lock().await.as_ref().map(|(id, _)| id.clone())
    }

    /// Check if a playback is active
    pub async fn is_playing(&self) -> bool {
        self.active.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockPlayback {
        plays: AtomicUsize,
        stops: AtomicUsize,
    }

    #[async_trait]
    impl PlaybackDriver for MockPlayback {
        async fn play(&self, _location: &Path) -> Result<PlaybackHandle, PlaybackError> {
            let n = self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(PlaybackHandle::new(format!("play-{}", n)))
        }

        async fn stop(&self, _handle: PlaybackHandle) -> Result<(), PlaybackError> {
            self.stops.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn note(id: &str) -> Note {
        Note {
            id: NoteId::from(id),
            name: id.to_string(),
            location: PathBuf::from(format!("/notes/{}.m4a", id)),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn play_tracks_current_note() {
        let controller = PlaybackController::new(MockPlayback::default());
        controller.play(&note("a")).await.unwrap();

        assert!(controller.is_playing().await);
        assert_eq!(controller.current().await, Some(NoteId::from("a")));
    }

    #[tokio::test]
    async fn play_while_playing_stops_the_first() {
        let controller = PlaybackController::new(MockPlayback::default());
        controller.play(&note("a")).await.unwrap();
        controller.play(&note("b")).await.unwrap();

        assert_eq!(controller.driver.stops.load(Ordering::SeqCst), 1);
        assert_eq!(controller.current().await, Some(NoteId::from("b")));
    }

    #[tokio::test]
    async fn stop_clears_active() {
        let controller = PlaybackController::new(MockPlayback::default());
        controller.play(&note("a")).await.unwrap();
        controller.stop().await.unwrap();

        assert!(!controller.is_playing().await);
        assert_eq!(controller.driver.stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stop_with_nothing_playing_is_noop() {
        let controller = PlaybackController::new(MockPlayback::default());
        controller.stop().await.unwrap();
        assert_eq!(controller.driver.stops.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn on_finished_clears_matching_handle() {
        let controller = PlaybackController::new(MockPlayback::default());
        controller.play(&note("a")).await.unwrap();

        let handle = {
            let active = controller.active.lock().await;
            active.as_ref().map(|(_, h)| h.clone()).unwrap()
        };
        controller.on_finished(&handle).await;
        assert!(!controller.is_playing().await);
    }

    #[tokio::test]
    async fn on_finished_ignores_stale_handle() {
        let controller = PlaybackController::new(MockPlayback::default());
        controller.play(&note("a")).await.unwrap();

        controller.on_finished(&PlaybackHandle::new("stale")).await;
        assert!(controller.is_playing().await);
    }
}
