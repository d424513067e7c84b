//! Built-in playlist catalogue
//!
//! A short list of well-known songs per mood. Moods without their own list
//! (Angry, Default) are served the Happy list.

use std::collections::HashMap;

use mood_common::api::SongRecord;
use mood_common::MoodLabel;
use rand::seq::SliceRandom;
use rand::Rng;

/// Cover shown for catalogue songs
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/150";

/// Mood served when the requested one has no list
pub const FALLBACK_MOOD: MoodLabel = MoodLabel::Happy;

const BUILTIN_SONGS: &[(MoodLabel, &[(&str, &str)])] = &[
    (
        MoodLabel::Happy,
        &[
            ("Can't Stop the Feeling!", "Justin Timberlake"),
            ("Uptown Funk", "Mark Ronson ft. Bruno Mars"),
        ],
    ),
    (
        MoodLabel::Sad,
        &[("Someone Like You", "Adele"), ("All I Want", "Kodaline")],
    ),
    (
        MoodLabel::Chill,
        &[
            ("Weightless", "Marconi Union"),
            ("Cold Little Heart", "Michael Kiwanuka"),
        ],
    ),
    (
        MoodLabel::Party,
        &[
            ("Party Rock Anthem", "LMFAO"),
            ("Turn Down for What", "DJ Snake, Lil Jon"),
        ],
    ),
    (
        MoodLabel::Romantic,
        &[("Perfect", "Ed Sheeran"), ("Thinking Out Loud", "Ed Sheeran")],
    ),
    (
        MoodLabel::Focus,
        &[
            ("Weightless", "Marconi Union"),
            ("Clair de Lune", "Claude Debussy"),
        ],
    ),
    (
        MoodLabel::Workout,
        &[("Stronger", "Kanye West"), ("Lose Yourself", "Eminem")],
    ),
    (
        MoodLabel::Sleep,
        &[
            ("Nocturne No. 2", "Frédéric Chopin"),
            ("Gymnopédie No.1", "Erik Satie"),
        ],
    ),
    (
        MoodLabel::Roadtrip,
        &[
            ("Life is a Highway", "Rascal Flatts"),
            ("Take Me Home, Country Roads", "John Denver"),
        ],
    ),
];

/// Spotify search link for a song
pub fn search_url(title: &str, artist: &str) -> String {
    format!(
        "https://open.spotify.com/search/{}",
        urlencoding::encode(&format!("{} {}", title, artist))
    )
}

/// Songs per mood
#[derive(Debug, Clone)]
pub struct PlaylistCatalog {
    songs: HashMap<MoodLabel, Vec<SongRecord>>,
}

impl PlaylistCatalog {
    /// Catalogue with the built-in songs
    pub fn builtin() -> Self {
        let songs = BUILTIN_SONGS
            .iter()
            .map(|(mood, entries)| {
                let records = entries
                    .iter()
                    .map(|(title, artist)| SongRecord {
                        title: title.to_string(),
                        artist: artist.to_string(),
                        album_cover_url: PLACEHOLDER_COVER.to_string(),
                        streaming_url: search_url(title, artist),
                    })
                    .collect();
                (*mood, records)
            })
            .collect();

        Self { songs }
    }

    /// Catalogue over the given lists
    pub fn from_songs(songs: HashMap<MoodLabel, Vec<SongRecord>>) -> Self {
        Self { songs }
    }

    /// Whether `mood` has its own list
    pub fn has_mood(&self, mood: MoodLabel) -> bool {
        self.songs.contains_key(&mood)
    }

    /// Songs for `mood`, falling back to the Happy list
    pub fn songs_for(&self, mood: MoodLabel) -> &[SongRecord] {
        self.songs
            .get(&mood)
            .or_else(|| self.songs.get(&FALLBACK_MOOD))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every catalogue song, for in-place updates
    pub fn songs_mut(&mut self) -> impl Iterator<Item = &mut SongRecord> {
        self.songs.values_mut().flatten()
    }

    /// Songs to serve for a request
    ///
    /// Catalogue order normally; shuffled when `refresh` asks for a
    /// different selection.
    pub fn select<R: Rng + ?Sized>(
        &self,
        mood: MoodLabel,
        refresh: bool,
        rng: &mut R,
    ) -> Vec<SongRecord> {
        let mut songs = self.songs_for(mood).to_vec();
        if refresh {
            songs.shuffle(rng);
        }
        songs
    }
}

impl Default for PlaylistCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_covers_all_but_angry_and_default() {
        let catalog = PlaylistCatalog::builtin();
        for mood in MoodLabel::ALL {
            let expected = !matches!(mood, MoodLabel::Angry | MoodLabel::Default);
            assert_eq!(catalog.has_mood(mood), expected, "{}", mood);
        }
    }

    #[test]
    fn test_missing_mood_falls_back_to_happy() {
        let catalog = PlaylistCatalog::builtin();
        assert_eq!(catalog.songs_for(MoodLabel::Angry), catalog.songs_for(MoodLabel::Happy));
        assert_eq!(catalog.songs_for(MoodLabel::Default)[0].title, "Can't Stop the Feeling!");
    }

    #[test]
    fn test_empty_catalog_serves_nothing() {
        let catalog = PlaylistCatalog::from_songs(HashMap::new());
        assert!(catalog.songs_for(MoodLabel::Sad).is_empty());
    }

    #[test]
    fn test_select_without_refresh_keeps_order() {
        let catalog = PlaylistCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let songs = catalog.select(MoodLabel::Sad, false, &mut rng);
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Someone Like You", "All I Want"]);
    }

    #[test]
    fn test_select_with_refresh_keeps_same_songs() {
        let catalog = PlaylistCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let mut titles: Vec<String> = catalog
            .select(MoodLabel::Workout, true, &mut rng)
            .into_iter()
            .map(|s| s.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["Lose Yourself", "Stronger"]);
    }

    #[test]
    fn test_songs_mut_visits_every_song() {
        let mut catalog = PlaylistCatalog::builtin();
        for song in catalog.songs_mut() {
            song.streaming_url = "https://example.test".to_string();
        }
        assert_eq!(catalog.songs_mut().count(), 18);
        assert_eq!(catalog.songs_for(MoodLabel::Sleep)[1].streaming_url, "https://example.test");
    }

    #[test]
    fn test_search_url_is_encoded() {
        assert_eq!(
            search_url("Perfect", "Ed Sheeran"),
            "https://open.spotify.com/search/Perfect%20Ed%20Sheeran"
        );
    }
}
