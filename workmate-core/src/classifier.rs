//! Keyword classifier: flags meetings, tasks and a deadline word per message.
//!
//! Matching is exact-token only. No stemming, no substrings, no synonyms:
//! "scheduled" does not match "schedule".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keywords::KeywordSets;
use crate::message::Message;
use crate::tokenize::tokenize;

/// Classification of exactly one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub message: String,
    pub meeting_detected: bool,
    pub task_detected: bool,
    /// Last date keyword seen in scan order; `None` when there is none.
    pub deadline: Option<String>,
}

impl ClassificationRecord {
    /// Deadline for display, `N/A` when absent.
    pub fn deadline_label(&self) -> &str {
        self.deadline.as_deref().unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    keywords: KeywordSets,
}

impl Classifier {
    pub fn new(keywords: KeywordSets) -> Self {
        Self {
            keywords: keywords.normalized(),
        }
    }

    pub fn keywords(&self) -> &KeywordSets {
        &self.keywords
    }

    /// Classify one message. Total: never fails.
    pub fn classify(&self, message: &str) -> ClassificationRecord {
        let mut record = ClassificationRecord {
            message: message.to_string(),
            meeting_detected: false,
            task_detected: false,
            deadline: None,
        };

        for token in tokenize(message) {
            if self.keywords.is_meeting(&token) {
                record.meeting_detected = true;
            }
            if self.keywords.is_task(&token) {
                record.task_detected = true;
            }
            if self.keywords.is_date(&token) {
                // Overwrite: the last date word wins, not the nearest date.
                record.deadline = Some(token);
            }
        }

        debug!(
            meeting = record.meeting_detected,
            task = record.task_detected,
            deadline = record.deadline_label(),
            "classified message"
        );
        record
    }

    /// Classify every message, preserving input order (1:1).
    pub fn classify_all(&self, messages: &[Message]) -> Vec<ClassificationRecord> {
        messages.iter().map(|m| self.classify(m.text())).collect()
    }
}
