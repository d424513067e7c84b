//! # Mood Music Common Library
//!
//! Shared code for the mood music chat client and playlist backend:
//! - Mood labels and the keyword-based mood classifier
//! - API request/response types (song records, chat query/response)
//! - Configuration loading
//! - Common error type

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod mood;

pub use classifier::{classify, KeywordTable, MoodClassifier};
pub use error::{Error, Result};
pub use mood::MoodLabel;
