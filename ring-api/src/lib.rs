//! # Ring API Library (ring-api)
//!
//! HTTP trigger for playing a fixed local audio file through the host's
//! command-line player.
//!
//! **Architecture:** `GET /api/ring` → [`Player::play`] → background player
//! process. At most one playback runs at a time; overlapping requests are
//! rejected, never queued.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod playback;

pub use error::{PlaybackError, Result};
pub use playback::{PlaybackCoordinator, Platform, Player};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Playback entry point
    pub player: Arc<dyn Player>,
    /// Audio file played on every ring (from configuration, never from the request)
    pub audio_path: Arc<str>,
}

impl AppState {
    /// Create new application state
    pub fn new(player: Arc<dyn Player>, audio_path: impl Into<Arc<str>>) -> Self {
        Self {
            player,
            audio_path: audio_path.into(),
        }
    }
}

/// Build application router
///
/// Routes registered with `get` only, so other methods get 405 from axum.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/ring", get(api::ring))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
