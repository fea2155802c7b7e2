//! Data model of the Practicum homework status API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a single homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    /// Reviewer accepted the work
    Approved,
    /// Reviewer picked the work up
    Reviewing,
    /// Reviewer sent the work back with remarks
    Rejected,
}

impl HomeworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "The reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken for review.",
            Self::Rejected => "The reviewer has remarks.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the `homeworks` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub id: Option<u64>,
    pub homework_name: String,
    pub status: HomeworkStatus,
    #[serde(default)]
    pub reviewer_comment: Option<String>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lesson_name: Option<String>,
}

/// Payload returned by the homework status endpoint.
///
/// Homeworks come newest first. `current_date` is the server clock in unix
/// seconds and is meant to be sent back as `from_date` on the next request.
/// Entries stay raw JSON until asked for, so a broken older entry cannot
/// block the cursor from moving past it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub homeworks: Vec<serde_json::Value>,
    pub current_date: i64,
}

impl StatusResponse {
    /// Most recently updated homework, if any changed since `from_date`.
    ///
    /// Only the newest entry is decoded; older ones are never looked at.
    pub fn latest(&self) -> Result<Option<Homework>, serde_json::Error> {
        self.homeworks
            .first()
            .map(|raw| Homework::deserialize(raw))
            .transpose()
    }
}
