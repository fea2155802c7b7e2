//! Homework Bot Core - shared pieces of the homework status notifier.
//!
//! This crate provides:
//! - The data model of the Practicum homework status API
//! - A client for the status endpoint
//! - A Telegram Bot API client for delivering notifications

pub mod clients;
pub mod models;

pub use clients::{Notifier, PracticumClient, StatusSource, TelegramClient};
pub use models::{Homework, HomeworkStatus, StatusResponse};
