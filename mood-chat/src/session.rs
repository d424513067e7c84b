//! Chat session state and orchestration
//!
//! [`ChatSession`] holds everything the presentation needs: the selected
//! mood, the message history, the current songs, whether a fetch is
//! outstanding and the last error. [`ChatController`] drives it:
//! classify, fetch, apply the result.
//!
//! Only one fetch may be outstanding per session. A submit or refresh
//! issued while one is pending is rejected with
//! [`ChatError::FetchInProgress`] and leaves the session untouched. The
//! slot is released when the fetch itself finishes, not when the caller
//! stops waiting: dropping a `submit` or `refresh` future still lets the
//! result land in the session.

use chrono::{DateTime, Utc};
use mood_common::api::SongRecord;
use mood_common::{MoodClassifier, MoodLabel};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::source::{FetchError, Playlist, PlaylistSource};

/// Who sent a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            sent_at: Utc::now(),
        }
    }
}

/// Session-scoped chat state
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    /// Currently selected mood
    pub mood: MoodLabel,
    pub messages: Vec<ChatMessage>,
    /// Songs of the last successful fetch; cleared on failure
    pub songs: Vec<SongRecord>,
    /// A fetch is outstanding
    pub loading: bool,
    /// User-facing message of the last failed fetch
    pub error: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            mood: MoodLabel::Default,
            messages: Vec::new(),
            songs: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChatError {
    /// Another fetch for this session has not completed yet
    #[error("A playlist request for mood {0} is still in progress")]
    FetchInProgress(MoodLabel),
}

/// Result of a submit or refresh
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Blank input, nothing was fetched
    Ignored,
    /// Songs were fetched (possibly none)
    Loaded { mood: MoodLabel, count: usize },
    /// Fetch failed; the session holds the user-facing message
    Failed { mood: MoodLabel, error: FetchError },
}

/// Drives a [`ChatSession`] against a playlist source
///
/// Each fetch runs in its own task that records the result in the session
/// when it finishes, even if the caller stops waiting for it.
pub struct ChatController {
    source: Arc<dyn PlaylistSource>,
    classifier: MoodClassifier,
    session: Arc<Mutex<ChatSession>>,
}

impl ChatController {
    /// Controller using the built-in keyword table
    pub fn new(source: Arc<dyn PlaylistSource>) -> Self {
        Self::with_classifier(source, MoodClassifier::default())
    }

    pub fn with_classifier(source: Arc<dyn PlaylistSource>, classifier: MoodClassifier) -> Self {
        Self {
            source,
            classifier,
            session: Arc::new(Mutex::new(ChatSession::default())),
        }
    }

    /// Copy of the current session state
    pub async fn snapshot(&self) -> ChatSession {
        self.session.lock().await.clone()
    }

    /// Classify `text`, select its mood and fetch songs for it
    ///
    /// Whitespace-only input is ignored. The user message is recorded
    /// whether or not the fetch succeeds.
    pub async fn submit(&self, text: &str) -> Result<FetchOutcome, ChatError> {
        if text.trim().is_empty() {
            debug!("Ignoring blank message");
            return Ok(FetchOutcome::Ignored);
        }

        let mood = self.classifier.classify(text);
        self.begin_fetch(Some(mood)).await?;

        info!(mood = %mood, source = self.source.name(), "Fetching songs for message");
        Ok(self.run_fetch(mood, false, Some(text.to_string())).await)
    }

    /// Fetch a new selection for the currently selected mood
    ///
    /// Does not reclassify and does not add a user message.
    pub async fn refresh(&self) -> Result<FetchOutcome, ChatError> {
        let mood = self.begin_fetch(None).await?;

        info!(mood = %mood, source = self.source.name(), "Refreshing songs");
        Ok(self.run_fetch(mood, true, None).await)
    }

    /// Claim the single fetch slot, optionally selecting a new mood
    ///
    /// Returns the mood to fetch.
    async fn begin_fetch(&self, mood: Option<MoodLabel>) -> Result<MoodLabel, ChatError> {
        let mut session = self.session.lock().await;

        if session.loading {
            warn!(pending = %session.mood, "Rejecting request while a fetch is in progress");
            return Err(ChatError::FetchInProgress(session.mood));
        }

        if let Some(mood) = mood {
            session.mood = mood;
        }
        session.loading = true;
        session.error = None;

        Ok(session.mood)
    }

    /// Fetch in a detached task that always releases the fetch slot
    async fn run_fetch(
        &self,
        mood: MoodLabel,
        refresh: bool,
        user_message: Option<String>,
    ) -> FetchOutcome {
        let source = self.source.clone();
        let session = self.session.clone();

        let task = tokio::spawn(async move {
            let result = source.fetch(mood, refresh).await;

            let mut session = session.lock().await;
            if let Some(text) = user_message {
                session.messages.push(ChatMessage::user(text));
            }
            Self::complete_fetch(&mut session, mood, result)
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                // The task died before recording anything
                let mut session = self.session.lock().await;
                Self::complete_fetch(
                    &mut session,
                    mood,
                    Err(FetchError::Aborted(e.to_string())),
                )
            }
        }
    }

    fn complete_fetch(
        session: &mut ChatSession,
        mood: MoodLabel,
        result: Result<Playlist, FetchError>,
    ) -> FetchOutcome {
        session.loading = false;

        match result {
            Ok(playlist) => {
                let count = playlist.songs.len();
                session.songs = playlist.songs;
                if let Some(message) = playlist.message {
                    session.messages.push(ChatMessage::bot(message));
                }
                FetchOutcome::Loaded { mood, count }
            }
            Err(error) => {
                warn!(mood = %mood, "Playlist fetch failed: {}", error);
                session.songs.clear();
                session.error = Some(error.user_message());
                FetchOutcome::Failed { mood, error }
            }
        }
    }
}
