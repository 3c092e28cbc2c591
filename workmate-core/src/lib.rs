//! workmate-core: message classification, meeting scheduling and metrics
//! for the Workmate office assistant.

pub mod announce;
pub mod chatbot;
pub mod classifier;
pub mod error;
pub mod keywords;
pub mod message;
pub mod metrics;
pub mod pipeline;
pub mod scheduler;
pub mod tokenize;

pub use announce::{announce_best_effort, Announcer, NullAnnouncer, RecordingAnnouncer};
pub use chatbot::{Chatbot, Intent, Reply};
pub use classifier::{ClassificationRecord, Classifier};
pub use error::{AnnounceError, ScheduleError};
pub use keywords::KeywordSets;
pub use message::{parse_inbox, sample_inbox, Message};
pub use metrics::{summarize, Metrics, DEFAULT_PROGRESS_THRESHOLD};
pub use pipeline::{Assistant, Report};
pub use scheduler::{
    schedule_all, schedule_if_meeting, HourSource, RngHourSource, ScheduleWindow, ScheduledEvent,
    MAX_WINDOW_HOURS,
};
pub use tokenize::tokenize;
