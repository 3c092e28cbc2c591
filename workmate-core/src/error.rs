//! Error types for workmate-core.

/// Invalid scheduling window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("min_hours must not be negative (got {0})")]
    NegativeOffset(i64),

    #[error("min_hours ({min}) is greater than max_hours ({max})")]
    InvertedWindow { min: i64, max: i64 },

    #[error("max_hours ({max}) exceeds the limit of {limit} hours")]
    WindowTooLarge { max: i64, limit: i64 },
}

/// Failures of a voice-output sink. Callers treat all of these as non-fatal.
#[derive(Debug, thiserror::Error)]
pub enum AnnounceError {
    #[error("voice output unavailable: {0}")]
    Unavailable(String),

    #[error("voice command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
