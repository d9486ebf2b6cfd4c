//! Ring trigger endpoint
//!
//! | Condition            | Status | Body                          |
//! |----------------------|--------|-------------------------------|
//! | Accepted             | 202    | `Playback started`            |
//! | Already busy         | 429    | error message                 |
//! | Unsupported platform | 501    | error message                 |
//! | Invalid audio path   | 500    | `Invalid audio configuration` |
//! | Anything else        | 500    | `Playback failed: <detail>`   |

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::error::PlaybackError;
use crate::AppState;

/// GET /api/ring
///
/// Starts playback of the configured audio file and returns without waiting
/// for it to finish.
pub async fn ring(State(state): State<AppState>) -> Response {
    match state.player.play(&state.audio_path) {
        Ok(()) => (StatusCode::ACCEPTED, "Playback started").into_response(),
        Err(e) => {
            match &e {
                PlaybackError::PlaybackInProgress => warn!("Ring rejected: {}", e),
                PlaybackError::InvalidAudioPath => {
                    error!("Configured audio path is invalid: {}", state.audio_path)
                }
                _ => error!("Ring failed: {}", e),
            }
            e.into_response()
        }
    }
}

impl IntoResponse for PlaybackError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PlaybackError::PlaybackInProgress => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            PlaybackError::UnsupportedPlatform(_) => (StatusCode::NOT_IMPLEMENTED, self.to_string()),
            // The path comes from configuration; keep it out of the response
            PlaybackError::InvalidAudioPath => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid audio configuration".to_string(),
            ),
            PlaybackError::LaunchFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Playback failed: {}", self),
            ),
        };

        (status, message).into_response()
    }
}
