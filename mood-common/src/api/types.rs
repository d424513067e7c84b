//! Chat API request/response types
//!
//! `GET /chat?mood=<name>&refresh=<bool>` returns a [`ChatResponse`].

use serde::{Deserialize, Serialize};

use crate::MoodLabel;

// ========================================
// Song Types
// ========================================

/// One song of a playlist
///
/// Wire field names follow the backend JSON (`album_cover`, `spotify_url`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    /// Cover image URL
    #[serde(rename = "album_cover")]
    pub album_cover_url: String,
    /// Link to listen to the song
    #[serde(rename = "spotify_url")]
    pub streaming_url: String,
}

// ========================================
// Chat Types
// ========================================

/// Query parameters of `GET /chat`
///
/// # Examples
///
/// ```
/// use mood_common::api::ChatQuery;
/// use mood_common::MoodLabel;
///
/// let query = ChatQuery::new(MoodLabel::Happy, true);
/// assert_eq!(query.mood, "Happy");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuery {
    /// Mood label name, any letter case
    pub mood: String,

    /// Ask for a different selection than last time
    #[serde(default)]
    pub refresh: bool,
}

impl ChatQuery {
    pub fn new(mood: MoodLabel, refresh: bool) -> Self {
        Self {
            mood: mood.as_str().to_string(),
            refresh,
        }
    }
}

/// Response of `GET /chat`
///
/// A present `error` marks the call as failed regardless of `playlist`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Human-readable bot reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Mood echoed back as requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist: Option<Vec<SongRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    /// Error-only response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

// ========================================
// Health Types
// ========================================

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}
