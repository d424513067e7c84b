//! Shared HTTP API types
//!
//! Request/response shapes exchanged between the chat client and the
//! playlist backend. Pure data, no HTTP framework dependencies.

pub mod types;

pub use types::{ChatQuery, ChatResponse, HealthResponse, SongRecord};
