//! Canned-response chatbot.
//!
//! Deterministic substring dispatch, checked in priority order:
//! "meeting" > "task" > "hello" > fallback.

use serde::{Deserialize, Serialize};

use crate::announce::{announce_best_effort, Announcer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Meetings,
    Tasks,
    Greeting,
    Fallback,
}

impl Intent {
    /// Resolve a query to an intent by case-insensitive substring containment.
    pub fn detect(query: &str) -> Self {
        let q = query.to_lowercase();
        if q.contains("meeting") {
            Intent::Meetings
        } else if q.contains("task") {
            Intent::Tasks
        } else if q.contains("hello") {
            Intent::Greeting
        } else {
            Intent::Fallback
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub intent: Intent,
    /// Shown to the user.
    pub text: String,
    /// Sent to the voice sink.
    pub spoken: String,
}

#[derive(Debug, Clone, Default)]
pub struct Chatbot {
    user_name: Option<String>,
}

impl Chatbot {
    pub fn new(user_name: Option<String>) -> Self {
        let user_name = user_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self { user_name }
    }

    pub fn respond(&self, query: &str) -> Reply {
        let intent = Intent::detect(query);
        let (text, spoken) = match intent {
            Intent::Meetings => (
                "You have meetings scheduled as shown above.".to_string(),
                "Here are your scheduled meetings.".to_string(),
            ),
            Intent::Tasks => (
                "You have pending tasks in your AI task tracker.".to_string(),
                "Here are your pending tasks.".to_string(),
            ),
            Intent::Greeting => {
                let greeting = match &self.user_name {
                    Some(name) => format!("Hello {name}! How can I assist you today?"),
                    None => "Hello! How can I assist you today?".to_string(),
                };
                (greeting.clone(), greeting)
            }
            Intent::Fallback => (
                "Sorry, I didn't understand that. Try asking about meetings or tasks.".to_string(),
                "Sorry, I didn't understand that.".to_string(),
            ),
        };
        Reply {
            intent,
            text,
            spoken,
        }
    }

    /// Respond and speak the reply. Voice failures are logged only.
    pub fn answer(&self, query: &str, announcer: &mut dyn Announcer) -> Reply {
        let reply = self.respond(query);
        announce_best_effort(announcer, &reply.spoken);
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announce::RecordingAnnouncer;

    #[test]
    fn test_priority_order() {
        assert_eq!(Intent::detect("Any task after the MEETING?"), Intent::Meetings);
        assert_eq!(Intent::detect("hello, list my tasks"), Intent::Tasks);
        assert_eq!(Intent::detect("Hello there"), Intent::Greeting);
        assert_eq!(Intent::detect("what's the weather"), Intent::Fallback);
        assert_eq!(Intent::detect(""), Intent::Fallback);
    }

    #[test]
    fn test_substring_not_token() {
        // Containment, not token match: "meetings" and "multitasking" both hit.
        assert_eq!(Intent::detect("Show my meetings for tomorrow"), Intent::Meetings);
        assert_eq!(Intent::detect("multitasking tips"), Intent::Tasks);
    }

    #[test]
    fn test_greeting_uses_name() {
        let bot = Chatbot::new(Some("  Mukesh ".to_string()));
        assert_eq!(bot.respond("hello").text, "Hello Mukesh! How can I assist you today?");

        let anon = Chatbot::new(Some(String::new()));
        assert_eq!(anon.respond("hello").text, "Hello! How can I assist you today?");
    }

    #[test]
    fn test_answer_speaks_reply() {
        let mut voice = RecordingAnnouncer::default();
        let bot = Chatbot::default();
        let reply = bot.answer("anything about meetings?", &mut voice);
        assert_eq!(reply.intent, Intent::Meetings);
        assert_eq!(voice.spoken, vec!["Here are your scheduled meetings."]);

        bot.answer("gibberish", &mut voice);
        assert_eq!(voice.spoken[1], "Sorry, I didn't understand that.");
    }
}
