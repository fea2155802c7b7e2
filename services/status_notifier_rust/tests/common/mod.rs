//! Scripted status source and recording notifier shared by the test binaries

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use homework_bot_core::clients::{Notifier, StatusSource};
use homework_bot_core::models::{Homework, HomeworkStatus, StatusResponse};
use status_notifier_rust::{PollLoop, PollState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses and remembers the `from_date` of every call
#[derive(Clone, Default)]
pub struct ScriptedSource {
    replies: Arc<Mutex<VecDeque<Result<StatusResponse>>>>,
    cursors: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedSource {
    pub fn push(&self, reply: Result<StatusResponse>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn push_status(&self, status: HomeworkStatus, current_date: i64) {
        self.push(Ok(response(vec![homework(status)], current_date)));
    }

    pub fn cursors(&self) -> Vec<i64> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch_statuses(&self, from_date: i64) -> Result<StatusResponse> {
        self.cursors.lock().unwrap().push(from_date);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted reply left")))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        let n = Self::default();
        *n.fail.lock().unwrap() = true;
        n
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_message(&self, text: &str) -> Result<()> {
        if *self.fail.lock().unwrap() {
            return Err(anyhow!("Telegram API error: 403 Forbidden: bot was blocked by the user"));
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub fn homework(status: HomeworkStatus) -> Homework {
    Homework {
        id: Some(7),
        homework_name: "student__hw05_final.zip".to_string(),
        status,
        reviewer_comment: Some("Nice work".to_string()),
        date_updated: None,
        lesson_name: None,
    }
}

pub fn response(homeworks: Vec<Homework>, current_date: i64) -> StatusResponse {
    let homeworks = homeworks
        .iter()
        .map(|hw| serde_json::to_value(hw).unwrap())
        .collect();
    raw_response(homeworks, current_date)
}

pub fn raw_response(homeworks: Vec<serde_json::Value>, current_date: i64) -> StatusResponse {
    StatusResponse {
        homeworks,
        current_date,
    }
}

pub fn new_loop(
    source: &ScriptedSource,
    notifier: &RecordingNotifier,
    state: PollState,
) -> PollLoop<ScriptedSource, RecordingNotifier> {
    PollLoop::new(source.clone(), notifier.clone(), state)
}

pub fn state_with(status: HomeworkStatus) -> PollState {
    PollState {
        last_status: Some(status),
        ..PollState::default()
    }
}

