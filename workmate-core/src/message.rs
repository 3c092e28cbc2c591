//! Inbox messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single inbox / chat message. Identity is its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(String);

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Built-in demo inbox.
pub fn sample_inbox() -> Vec<Message> {
    [
        "Meeting with Product Team scheduled at 3 PM tomorrow.",
        "Reminder: Submit project report by Friday evening.",
        "Can we reschedule our client discussion to next Monday?",
        "Prepare slides for AI workshop due by Wednesday.",
        "Budget review meeting today at 4 PM with Finance team.",
    ]
    .into_iter()
    .map(Message::from)
    .collect()
}

/// Parse an inbox file: one message per line, blank lines and `#` comments skipped.
pub fn parse_inbox(text: &str) -> Vec<Message> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(Message::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_inbox() {
        let inbox = sample_inbox();
        assert_eq!(inbox.len(), 5);
        assert!(inbox[0].text().starts_with("Meeting with Product Team"));
    }

    #[test]
    fn test_parse_inbox_skips_comments_and_blanks() {
        let inbox = parse_inbox(
            r#"# exported from chat
Call with vendor on Tuesday

  Send invoice today
"#,
        );
        assert_eq!(
            inbox,
            vec![
                Message::new("Call with vendor on Tuesday"),
                Message::new("Send invoice today"),
            ]
        );
    }
}
