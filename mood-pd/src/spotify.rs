//! Spotify Web API client
//!
//! Client-credentials flow only: the access token is fetched on first use,
//! cached, and renewed shortly before it expires. Covers the three calls
//! the playlist director needs:
//! - playlist search by keyword
//! - first tracks of a playlist
//! - single track lookup by title and artist

use std::time::{Duration, Instant};

use mood_common::api::SongRecord;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::catalog::PLACEHOLDER_COVER;

/// Accounts service base URL (token endpoint lives under `/api/token`)
pub const SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Web API base URL
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

const USER_AGENT: &str = concat!("mood-pd/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

/// Spotify client errors
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Spotify API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Application credentials for the client-credentials flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl SpotifyCredentials {
    /// Credentials when both halves are present
    pub fn from_parts(client_id: Option<String>, client_secret: Option<String>) -> Option<Self> {
        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Some(Self {
                client_id,
                client_secret,
            }),
            _ => None,
        }
    }
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Spotify Web API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    credentials: SpotifyCredentials,
    accounts_url: String,
    api_url: String,
    token: Mutex<Option<CachedToken>>,
}

impl SpotifyClient {
    /// Client against the public Spotify endpoints
    pub fn new(credentials: SpotifyCredentials) -> Result<Self, SpotifyError> {
        Self::with_endpoints(credentials, SPOTIFY_ACCOUNTS_URL, SPOTIFY_API_URL)
    }

    /// Client against custom accounts and API base URLs
    pub fn with_endpoints(
        credentials: SpotifyCredentials,
        accounts_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, SpotifyError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            credentials,
            accounts_url: accounts_url.into().trim_end_matches('/').to_string(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        })
    }

    async fn access_token(&self) -> Result<String, SpotifyError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let url = format!("{}/api/token", self.accounts_url);
        debug!(url = %url, "Requesting Spotify access token");

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Auth(format!("{}: {}", status.as_u16(), error_text)));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Parse(e.to_string()))?;

        let lifetime = body.expires_in.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS);
        *cached = Some(CachedToken {
            access_token: body.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });

        Ok(body.access_token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SpotifyError> {
        let token = self.access_token().await?;
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| SpotifyError::Parse(e.to_string()))
    }

    /// Ids of playlists matching `query`, best match first
    pub async fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<String>, SpotifyError> {
        let limit = limit.to_string();
        let body: PlaylistSearchResponse = self
            .get_json(
                "/search",
                &[("q", query), ("type", "playlist"), ("limit", limit.as_str())],
            )
            .await?;

        // Search results may contain null entries
        Ok(body
            .playlists
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|playlist| playlist.id)
            .collect())
    }

    /// First `limit` tracks of a playlist
    pub async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: u32,
    ) -> Result<Vec<SongRecord>, SpotifyError> {
        let limit = limit.to_string();
        let body: PlaylistTracksResponse = self
            .get_json(
                &format!("/playlists/{}/tracks", playlist_id),
                &[("limit", limit.as_str())],
            )
            .await?;

        Ok(body
            .items
            .into_iter()
            .filter_map(|item| item.track)
            .filter_map(Track::into_song)
            .collect())
    }

    /// Best match for a title and artist, if Spotify knows the song
    pub async fn find_track(
        &self,
        title: &str,
        artist: &str,
    ) -> Result<Option<SongRecord>, SpotifyError> {
        let query = format!("track:{} artist:{}", title, artist);
        let body: TrackSearchResponse = self
            .get_json("/search", &[("q", query.as_str()), ("type", "track"), ("limit", "1")])
            .await?;

        Ok(body
            .tracks
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .find_map(Track::into_song))
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct PlaylistSearchResponse {
    playlists: Option<Page<Option<PlaylistItem>>>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistTracksResponse {
    #[serde(default)]
    items: Vec<PlaylistTrackItem>,
}

#[derive(Debug, Deserialize)]
struct PlaylistTrackItem {
    track: Option<Track>,
}

#[derive(Debug, Deserialize)]
struct TrackSearchResponse {
    tracks: Option<Page<Track>>,
}

#[derive(Debug, Deserialize)]
struct Track {
    name: String,
    #[serde(default)]
    artists: Vec<Artist>,
    #[serde(default)]
    external_urls: ExternalUrls,
    album: Option<Album>,
}

#[derive(Debug, Deserialize)]
struct Artist {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Album {
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
struct Image {
    url: String,
}

impl Track {
    /// Song record for a playable track; local files and podcasts lack a link
    fn into_song(self) -> Option<SongRecord> {
        let streaming_url = self.external_urls.spotify?;
        let artist = self.artists.into_iter().next()?.name;
        let album_cover_url = self
            .album
            .and_then(|album| album.images.into_iter().next())
            .map(|image| image.url)
            .unwrap_or_else(|| PLACEHOLDER_COVER.to_string());

        Some(SongRecord {
            title: self.name,
            artist,
            album_cover_url,
            streaming_url,
        })
    }
}
