//! Keyword sets driving the message classifier.
//!
//! These are plain data so a config file (or a test) can swap them out.

use serde::{Deserialize, Serialize};

const MEETING: &[&str] = &["meeting", "schedule", "discussion", "call", "conference"];
const TASK: &[&str] = &["submit", "prepare", "complete", "send", "finish"];
const DATE: &[&str] = &[
    "today",
    "tomorrow",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSets {
    pub meeting: Vec<String>,
    pub task: Vec<String>,
    pub date: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            meeting: owned(MEETING),
            task: owned(TASK),
            date: owned(DATE),
        }
    }
}

impl KeywordSets {
    pub fn new(
        meeting: impl IntoIterator<Item = impl Into<String>>,
        task: impl IntoIterator<Item = impl Into<String>>,
        date: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            meeting: meeting.into_iter().map(Into::into).collect(),
            task: task.into_iter().map(Into::into).collect(),
            date: date.into_iter().map(Into::into).collect(),
        }
        .normalized()
    }

    /// Lower-case and trim every entry, dropping blanks.
    ///
    /// Tokens are always lower-cased, so an upper-case keyword would never match.
    pub fn normalized(self) -> Self {
        Self {
            meeting: normalize(self.meeting),
            task: normalize(self.task),
            date: normalize(self.date),
        }
    }

    pub fn is_meeting(&self, token: &str) -> bool {
        self.meeting.iter().any(|k| k == token)
    }

    pub fn is_task(&self, token: &str) -> bool {
        self.task.iter().any(|k| k == token)
    }

    pub fn is_date(&self, token: &str) -> bool {
        self.date.iter().any(|k| k == token)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn normalize(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
