//! Playlist sources
//!
//! A playlist source answers "songs for this mood". It is called once per
//! user action and never caches: a refresh re-issues the request.

use async_trait::async_trait;
use mood_common::api::SongRecord;
use mood_common::MoodLabel;
use thiserror::Error;

pub mod canned;
pub mod http;

pub use canned::CannedPlaylistSource;
pub use http::HttpPlaylistSource;

/// Message shown for any failure other than an explicit backend error
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch songs. Try again.";

/// Playlist fetch errors
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Backend returned a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse response JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Backend answered with an explicit error payload
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Fetch task ended without producing a result
    #[error("Aborted: {0}")]
    Aborted(String),
}

impl FetchError {
    /// Text to show the user
    ///
    /// Explicit backend errors are shown verbatim, everything else collapses
    /// into one generic message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Rejected(message) => message.clone(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Successful fetch result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    /// Bot reply accompanying the songs, if any
    pub message: Option<String>,
    /// Songs, possibly empty
    pub songs: Vec<SongRecord>,
}

/// Source of playlists for a mood
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Source identifier for logging (e.g., "http", "canned")
    fn name(&self) -> &'static str;

    /// Fetch songs for a mood
    ///
    /// # Arguments
    /// * `mood` - Mood to fetch songs for
    /// * `refresh` - Ask for a different selection for the same mood
    async fn fetch(&self, mood: MoodLabel, refresh: bool) -> Result<Playlist, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_shown_verbatim() {
        let error = FetchError::Rejected("No playlist for that mood".to_string());
        assert_eq!(error.user_message(), "No playlist for that mood");
    }

    #[test]
    fn test_other_errors_use_generic_message() {
        let errors = [
            FetchError::Network("connection refused".to_string()),
            FetchError::Api(500, "boom".to_string()),
            FetchError::Parse("expected value".to_string()),
            FetchError::Aborted("task panicked".to_string()),
        ];
        for error in errors {
            assert_eq!(error.user_message(), FETCH_FAILED_MESSAGE);
        }
    }
}
