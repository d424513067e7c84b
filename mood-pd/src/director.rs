//! Playlist selection
//!
//! With Spotify configured, each mood is searched under a few keyword
//! queries in order; the first query yielding a playlist with tracks wins.
//! Without Spotify, or when Spotify fails or finds nothing, the built-in
//! catalogue answers.

use mood_common::api::SongRecord;
use mood_common::MoodLabel;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::{PlaylistCatalog, FALLBACK_MOOD};
use crate::spotify::{SpotifyClient, SpotifyError};

/// Playlist search queries per mood, tried in order
pub const MOOD_PLAYLIST_KEYWORDS: &[(MoodLabel, &[&str])] = &[
    (MoodLabel::Happy, &["happy vibes", "feel good hits", "sunny day"]),
    (MoodLabel::Sad, &["sad songs", "heartbreak", "melancholy"]),
    (
        MoodLabel::Chill,
        &["lofi chill", "relaxing beats", "chill lounge", "study beats"],
    ),
    (MoodLabel::Party, &["party anthems", "club bangers", "night out"]),
    (
        MoodLabel::Romantic,
        &["love songs", "date night", "romantic ballads", "slow jams"],
    ),
    (
        MoodLabel::Focus,
        &["study focus", "deep work", "instrumental chill", "coding music"],
    ),
    (MoodLabel::Workout, &["gym motivation", "beast mode", "pump up"]),
    (MoodLabel::Sleep, &["sleep relaxation", "deep sleep", "ambient dreams"]),
    (
        MoodLabel::Roadtrip,
        &["road trip songs", "driving vibes", "summer drive"],
    ),
];

/// Queries for moods without their own entry
pub const DEFAULT_PLAYLIST_KEYWORDS: &[&str] = &["top hits"];

const PLAYLIST_SEARCH_LIMIT: u32 = 5;
const PLAYLIST_TRACK_LIMIT: u32 = 5;

/// Search queries for a mood; unrecognised moods search the default ones
pub fn playlist_keywords(mood: Option<MoodLabel>) -> &'static [&'static str] {
    mood.and_then(|mood| {
        MOOD_PLAYLIST_KEYWORDS
            .iter()
            .find(|(label, _)| *label == mood)
            .map(|(_, keywords)| *keywords)
    })
    .unwrap_or(DEFAULT_PLAYLIST_KEYWORDS)
}

/// Where a served playlist came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistOrigin {
    Spotify,
    Catalog,
}

impl PlaylistOrigin {
    /// Word used in the reply message
    pub fn describe(self) -> &'static str {
        match self {
            PlaylistOrigin::Spotify => "trending",
            PlaylistOrigin::Catalog => "fallback",
        }
    }
}

/// Songs chosen for one request
#[derive(Debug, Clone)]
pub struct DirectedPlaylist {
    pub origin: PlaylistOrigin,
    pub songs: Vec<SongRecord>,
}

/// Chooses the songs served for a mood
pub struct PlaylistDirector {
    catalog: PlaylistCatalog,
    spotify: Option<SpotifyClient>,
}

impl PlaylistDirector {
    pub fn new(catalog: PlaylistCatalog, spotify: Option<SpotifyClient>) -> Self {
        Self { catalog, spotify }
    }

    /// Director serving the catalogue only
    pub fn catalog_only(catalog: PlaylistCatalog) -> Self {
        Self::new(catalog, None)
    }

    pub fn catalog(&self) -> &PlaylistCatalog {
        &self.catalog
    }

    pub fn has_spotify(&self) -> bool {
        self.spotify.is_some()
    }

    /// Replace catalogue links and covers with Spotify's own, where found
    ///
    /// Returns the number of songs updated. Lookup failures leave the
    /// song as it was.
    pub async fn enrich_catalog(&mut self) -> usize {
        let Some(spotify) = self.spotify.as_ref() else {
            return 0;
        };

        let mut enriched = 0;
        for song in self.catalog.songs_mut() {
            match spotify.find_track(&song.title, &song.artist).await {
                Ok(Some(found)) => {
                    song.album_cover_url = found.album_cover_url;
                    song.streaming_url = found.streaming_url;
                    enriched += 1;
                }
                Ok(None) => debug!(title = %song.title, "No Spotify match for catalogue song"),
                Err(e) => warn!(title = %song.title, "Spotify lookup failed: {}", e),
            }
        }

        info!(enriched, "Enriched catalogue from Spotify");
        enriched
    }

    /// Songs for a request
    ///
    /// `mood` is `None` when the requested name is not a known mood. With
    /// `refresh` a random playlist among the search results is used, or
    /// the catalogue list is shuffled.
    pub async fn playlist(&self, mood: Option<MoodLabel>, refresh: bool) -> DirectedPlaylist {
        if let Some(spotify) = self.spotify.as_ref() {
            match search_spotify(spotify, mood, refresh).await {
                Ok(Some(songs)) => {
                    return DirectedPlaylist {
                        origin: PlaylistOrigin::Spotify,
                        songs,
                    }
                }
                Ok(None) => debug!("Spotify search found nothing, serving catalogue"),
                Err(e) => warn!("Spotify search failed, serving catalogue: {}", e),
            }
        }

        let songs = self.catalog.select(
            mood.unwrap_or(FALLBACK_MOOD),
            refresh,
            &mut rand::thread_rng(),
        );

        DirectedPlaylist {
            origin: PlaylistOrigin::Catalog,
            songs,
        }
    }
}

async fn search_spotify(
    spotify: &SpotifyClient,
    mood: Option<MoodLabel>,
    refresh: bool,
) -> Result<Option<Vec<SongRecord>>, SpotifyError> {
    for query in playlist_keywords(mood) {
        let playlist_ids = spotify.search_playlists(query, PLAYLIST_SEARCH_LIMIT).await?;
        if playlist_ids.is_empty() {
            debug!(query, "No playlists for query");
            continue;
        }

        let index = if refresh {
            rand::thread_rng().gen_range(0..playlist_ids.len())
        } else {
            0
        };

        let songs = spotify
            .playlist_tracks(&playlist_ids[index], PLAYLIST_TRACK_LIMIT)
            .await?;
        if !songs.is_empty() {
            debug!(query, playlist = %playlist_ids[index], "Using Spotify playlist");
            return Ok(Some(songs));
        }
    }

    Ok(None)
}
