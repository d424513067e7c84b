//! HTTP API handlers for mood-pd

pub mod chat;
pub mod health;

pub use chat::{chat_routes, get_chat};
pub use health::health_routes;
