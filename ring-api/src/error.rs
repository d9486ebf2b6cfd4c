//! Error types for ring-api
//!
//! Only admission and command resolution errors reach a `play` caller.
//! `LaunchFailure` is produced inside the background playback task and is
//! logged there.

use thiserror::Error;

/// Playback error taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Audio path is empty or does not exist
    #[error("invalid audio path")]
    InvalidAudioPath,

    /// No known player for this operating system
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    /// Another playback is still running
    #[error("playback in progress")]
    PlaybackInProgress,

    /// Player process could not start or exited abnormally
    #[error("{0}")]
    LaunchFailure(String),
}

/// Convenience Result type using PlaybackError
pub type Result<T> = std::result::Result<T, PlaybackError>;
