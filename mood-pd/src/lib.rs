//! mood-pd library - playlist director for mood music
//!
//! Serves playlists per mood over HTTP, from Spotify when credentials are
//! configured and from a built-in catalogue otherwise.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod catalog;
pub mod director;
pub mod spotify;

use director::PlaylistDirector;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Playlist selection (Spotify and catalogue)
    pub director: Arc<PlaylistDirector>,
}

impl AppState {
    /// Create new application state
    pub fn new(director: PlaylistDirector) -> Self {
        Self {
            director: Arc::new(director),
        }
    }
}

/// Build application router
///
/// Browser clients are served from any origin, so CORS is permissive.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::chat_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
