//! Plain-text rendering of a chat session for the terminal

use mood_common::api::SongRecord;
use std::fmt::Write;

use crate::session::{ChatSession, FetchOutcome, Sender};

/// Shown while a fetch is outstanding
pub const LOADING_LINE: &str = "Finding songs...";

/// Render one song as `title - artist <url>`
pub fn render_song(index: usize, song: &SongRecord) -> String {
    format!(
        "{:>2}. {} - {} <{}>",
        index + 1,
        song.title,
        song.artist,
        song.streaming_url
    )
}

/// Render what changed after a submit or refresh
///
/// New bot replies since `history_len` messages, then either the error
/// banner or the song list.
pub fn render_outcome(session: &ChatSession, outcome: &FetchOutcome, history_len: usize) -> String {
    let mut out = String::new();

    if matches!(outcome, FetchOutcome::Ignored) {
        return out;
    }

    for message in session.messages.iter().skip(history_len) {
        if message.sender == Sender::Bot {
            let _ = writeln!(out, "bot: {}", message.text);
        }
    }

    if let Some(error) = &session.error {
        let _ = writeln!(out, "error: {}", error);
        return out;
    }

    if session.songs.is_empty() {
        let _ = writeln!(out, "No {} songs found.", session.mood);
        return out;
    }

    let _ = writeln!(out, "Trending {} Songs", session.mood);
    for (index, song) in session.songs.iter().enumerate() {
        let _ = writeln!(out, "{}", render_song(index, song));
    }
    let _ = writeln!(out, "(type /refresh for a new selection)");

    out
}
