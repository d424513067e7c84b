//! Canned playlist source
//!
//! Stands in for the backend: answers every request with the same bot reply
//! and song list (or the same error), optionally after a delay. Used for
//! offline chatting and in tests. Every request is recorded.

use async_trait::async_trait;
use mood_common::api::SongRecord;
use mood_common::MoodLabel;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::{FetchError, Playlist, PlaylistSource};

/// Reply of the simulated bot
pub const CANNED_REPLY: &str = "Hello! How can I assist you?";

/// Fixed-answer playlist source
#[derive(Debug)]
pub struct CannedPlaylistSource {
    answer: Result<Playlist, FetchError>,
    delay: Duration,
    requests: Mutex<Vec<(MoodLabel, bool)>>,
}

impl CannedPlaylistSource {
    /// Source replying with [`CANNED_REPLY`] and no songs
    pub fn new() -> Self {
        Self::with_songs(Vec::new())
    }

    /// Source replying with [`CANNED_REPLY`] and the given songs
    pub fn with_songs(songs: Vec<SongRecord>) -> Self {
        Self {
            answer: Ok(Playlist {
                message: Some(CANNED_REPLY.to_string()),
                songs,
            }),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Source failing every request with `error`
    pub fn failing(error: FetchError) -> Self {
        Self {
            answer: Err(error),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Wait `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<(MoodLabel, bool)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for CannedPlaylistSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaylistSource for CannedPlaylistSource {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn fetch(&self, mood: MoodLabel, refresh: bool) -> Result<Playlist, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((mood, refresh));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.answer.clone()
    }
}
