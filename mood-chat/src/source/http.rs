//! Playlist backend HTTP client
//!
//! Issues `GET {base_url}/chat?mood=<Name>&refresh=<bool>` and maps the
//! JSON answer to a [`Playlist`]. No retry, no caching.

use async_trait::async_trait;
use mood_common::api::{ChatQuery, ChatResponse};
use mood_common::MoodLabel;
use std::time::Duration;

use super::{FetchError, Playlist, PlaylistSource};

const USER_AGENT: &str = concat!("mood-chat/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Playlist source backed by the playlist backend
pub struct HttpPlaylistSource {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpPlaylistSource {
    /// Create a client for the backend at `base_url` (e.g. `http://127.0.0.1:8000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PlaylistSource for HttpPlaylistSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, mood: MoodLabel, refresh: bool) -> Result<Playlist, FetchError> {
        let url = format!("{}/chat", self.base_url);

        tracing::debug!(mood = %mood, refresh, url = %url, "Requesting playlist");

        let response = self
            .http_client
            .get(&url)
            .query(&ChatQuery::new(mood, refresh))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            // Prefer the backend's own error message when the body carries one
            let detail = serde_json::from_str::<ChatResponse>(&error_text)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or(error_text);
            return Err(FetchError::Api(status.as_u16(), detail));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(FetchError::Rejected(error));
        }

        let songs = body.playlist.unwrap_or_default();

        tracing::info!(mood = %mood, refresh, songs = songs.len(), "Playlist received");

        Ok(Playlist {
            message: body.message,
            songs,
        })
    }
}
