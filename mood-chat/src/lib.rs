//! mood-chat library - mood music chat client
//!
//! Turns user messages into playlist requests: each message is classified
//! into a mood, the playlist source is asked for songs for that mood, and
//! the outcome is recorded in an explicit [`ChatSession`].

pub mod render;
pub mod session;
pub mod source;

pub use session::{ChatController, ChatError, ChatMessage, ChatSession, FetchOutcome, Sender};
pub use source::{
    CannedPlaylistSource, FetchError, HttpPlaylistSource, Playlist, PlaylistSource,
};
