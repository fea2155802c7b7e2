//! HTTP clients for the two external APIs the notifier talks to.
//!
//! The traits are the seams the poll loop is written against, so it can be
//! driven by in-memory fakes in tests.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::StatusResponse;

pub mod practicum;
pub mod telegram;

pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

/// Longest slice of a response body quoted in an error message
const BODY_PREVIEW_CHARS: usize = 200;

/// First `BODY_PREVIEW_CHARS` characters of a response body, for errors
pub(crate) fn body_preview(body: &str) -> String {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Source of homework status reports
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch homeworks updated since `from_date` (unix seconds)
    async fn fetch_statuses(&self, from_date: i64) -> Result<StatusResponse>;
}

/// Destination for notification messages
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<()>;
}
