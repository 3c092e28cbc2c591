//! Voice-output capability.
//!
//! The assistant speaks a few fixed phrases. Speaking is best-effort: a
//! missing or broken sink is logged and the run carries on.

use tracing::warn;

use crate::error::AnnounceError;

pub const MEETINGS_SCHEDULED: &str = "Meetings have been successfully scheduled.";
pub const PROGRESS_GOOD: &str = "Great work! Productivity is improving.";
pub const PROGRESS_PENDING: &str = "You have pending tasks. Please check your to-do list.";

/// Something that can say a line of text out loud. Blocking.
pub trait Announcer {
    fn announce(&mut self, text: &str) -> Result<(), AnnounceError>;
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&mut self, _text: &str) -> Result<(), AnnounceError> {
        Ok(())
    }
}

/// Keeps every announced line, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingAnnouncer {
    pub spoken: Vec<String>,
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, text: &str) -> Result<(), AnnounceError> {
        self.spoken.push(text.to_string());
        Ok(())
    }
}

/// Announce `text`, logging instead of failing. Returns whether it was spoken.
pub fn announce_best_effort(announcer: &mut dyn Announcer, text: &str) -> bool {
    match announcer.announce(text) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, text, "voice announcement skipped");
            false
        }
    }
}
