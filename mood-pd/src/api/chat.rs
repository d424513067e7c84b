//! Playlist endpoint
//!
//! `GET /chat?mood=<name>&refresh=<bool>` returns songs for a mood.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use mood_common::api::{ChatQuery, ChatResponse};
use mood_common::MoodLabel;
use tracing::{debug, info};

use crate::AppState;

/// GET /chat?mood=Happy&refresh=true
///
/// `mood` is matched case-insensitively against the mood names; a name
/// that matches none is served the fallback songs. With `refresh` a
/// different selection is made. A request without `mood` is rejected
/// by the query extractor.
pub async fn get_chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
) -> Json<ChatResponse> {
    let mood = query.mood.parse::<MoodLabel>().ok();
    if mood.is_none() {
        debug!(mood = %query.mood, "Unrecognised mood, serving fallback");
    }

    let playlist = state.director.playlist(mood, query.refresh).await;

    info!(
        mood = %query.mood,
        refresh = query.refresh,
        origin = playlist.origin.describe(),
        songs = playlist.songs.len(),
        "Serving playlist"
    );

    Json(ChatResponse {
        message: Some(format!(
            "Here are some {} {} songs:",
            playlist.origin.describe(),
            query.mood.to_lowercase()
        )),
        mood: Some(query.mood),
        playlist: Some(playlist.songs),
        error: None,
    })
}

/// Build playlist routes
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", get(get_chat))
}
