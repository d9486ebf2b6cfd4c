//! Playback coordinator
//!
//! Admits at most one playback at a time. State machine over the busy flag:
//!
//! ```text
//! Idle --play() accepted--> Busy --player task finished--> Idle
//! ```
//!
//! A call made while Busy is rejected with `PlaybackInProgress`; there is no
//! queue. The lock is held only for the check-and-set and for the final clear,
//! never while the player runs.
//!
//! There is no timeout: a player that never exits keeps the coordinator Busy.

use crate::error::{PlaybackError, Result};
use crate::playback::resolver::{resolve, PlaybackCommand, Platform};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tracing::{debug, error, info};

/// Entry point used by the HTTP layer
pub trait Player: Send + Sync {
    /// Start playing `audio_path` and return without waiting for it to finish
    fn play(&self, audio_path: &str) -> Result<()>;
}

#[derive(Debug, Default)]
struct PlaybackState {
    busy: bool,
}

fn lock_state(state: &Mutex<PlaybackState>) -> MutexGuard<'_, PlaybackState> {
    // A plain bool cannot be left inconsistent by a panicking holder
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the busy flag when dropped
///
/// Moved into the player task so the flag is released on every exit path,
/// including a panic or the runtime dropping the task.
struct BusyGuard {
    state: Arc<Mutex<PlaybackState>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        lock_state(&self.state).busy = false;
        debug!("Playback slot released");
    }
}

/// Single-slot playback coordinator
pub struct PlaybackCoordinator {
    state: Arc<Mutex<PlaybackState>>,
    platform: Platform,
    /// Runtime the player tasks are spawned on
    runtime: Handle,
}

impl PlaybackCoordinator {
    /// Create an idle coordinator
    ///
    /// `runtime` lets `play` be called from threads outside the runtime.
    pub fn new(platform: Platform, runtime: Handle) -> Self {
        Self {
            state: Arc::new(Mutex::new(PlaybackState::default())),
            platform,
            runtime,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Whether a playback is currently in flight
    pub fn is_busy(&self) -> bool {
        lock_state(&self.state).busy
    }
}

impl Player for PlaybackCoordinator {
    fn play(&self, audio_path: &str) -> Result<()> {
        let command = {
            let mut state = lock_state(&self.state);
            if state.busy {
                debug!("Rejecting playback of {}: already playing", audio_path);
                return Err(PlaybackError::PlaybackInProgress);
            }

            let command = resolve(audio_path, &self.platform)?;
            state.busy = true;
            command
        };

        let guard = BusyGuard {
            state: Arc::clone(&self.state),
        };

        info!("Playback started: {}", command);
        self.runtime.spawn(async move {
            let _guard = guard;
            match run_player(&command).await {
                Ok(()) => info!("Playback finished: {}", command),
                Err(e) => error!("Playback error: {}", e),
            }
        });

        Ok(())
    }
}

/// Run the player to completion
///
/// A player that cannot be started and one that exits with a failure status
/// are both reported as `LaunchFailure`.
pub async fn run_player(command: &PlaybackCommand) -> Result<()> {
    let status = command.to_command().status().await.map_err(|e| {
        PlaybackError::LaunchFailure(format!("failed to start {}: {}", command.program(), e))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(PlaybackError::LaunchFailure(format!(
            "{} exited with {}",
            command.program(),
            status
        )))
    }
}
