//! Meeting scheduler: every detected meeting gets a pseudo-random future slot.
//!
//! The random source is an explicit dependency so runs can be replayed
//! under a fixed seed.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classifier::ClassificationRecord;
use crate::error::ScheduleError;

/// Source of hour offsets. One call is one draw.
pub trait HourSource {
    /// Uniform integer in the inclusive range `[low, high]`.
    fn draw(&mut self, low: i64, high: i64) -> i64;
}

/// [`HourSource`] backed by any `rand` generator.
pub struct RngHourSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngHourSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngHourSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> HourSource for RngHourSource<R> {
    fn draw(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Upper bound for a window: one year ahead.
pub const MAX_WINDOW_HOURS: i64 = 24 * 366;

/// Inclusive range of hour offsets a meeting may land in.
///
/// Only built through [`ScheduleWindow::new`], so `0 <= min <= max <= MAX_WINDOW_HOURS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleWindow {
    min_hours: i64,
    max_hours: i64,
}

impl Default for ScheduleWindow {
    fn default() -> Self {
        Self {
            min_hours: 1,
            max_hours: 48,
        }
    }
}

impl ScheduleWindow {
    pub fn new(min_hours: i64, max_hours: i64) -> Result<Self, ScheduleError> {
        if min_hours < 0 {
            return Err(ScheduleError::NegativeOffset(min_hours));
        }
        if min_hours > max_hours {
            return Err(ScheduleError::InvertedWindow {
                min: min_hours,
                max: max_hours,
            });
        }
        if max_hours > MAX_WINDOW_HOURS {
            return Err(ScheduleError::WindowTooLarge {
                max: max_hours,
                limit: MAX_WINDOW_HOURS,
            });
        }
        Ok(Self {
            min_hours,
            max_hours,
        })
    }

    pub fn min_hours(&self) -> i64 {
        self.min_hours
    }

    pub fn max_hours(&self) -> i64 {
        self.max_hours
    }

    pub fn earliest(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::hours(self.min_hours)
    }

    pub fn latest(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::hours(self.max_hours)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub message: String,
    pub scheduled_at: DateTime<Utc>,
}

impl ScheduledEvent {
    /// `YYYY-MM-DD HH:MM` in the given timezone.
    pub fn display_time<T>(&self, tz: &T) -> String
    where
        T: TimeZone,
        T::Offset: fmt::Display,
    {
        self.scheduled_at
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

/// Schedule a meeting record; non-meetings return `None` without drawing.
pub fn schedule_if_meeting(
    record: &ClassificationRecord,
    now: DateTime<Utc>,
    window: ScheduleWindow,
    source: &mut dyn HourSource,
) -> Option<ScheduledEvent> {
    if !record.meeting_detected {
        return None;
    }

    let offset = source
        .draw(window.min_hours, window.max_hours)
        .clamp(window.min_hours, window.max_hours);

    Some(ScheduledEvent {
        message: record.message.clone(),
        scheduled_at: now + Duration::hours(offset),
    })
}

/// Schedule every meeting record, in record order.
pub fn schedule_all(
    records: &[ClassificationRecord],
    now: DateTime<Utc>,
    window: ScheduleWindow,
    source: &mut dyn HourSource,
) -> Vec<ScheduledEvent> {
    records
        .iter()
        .filter_map(|r| schedule_if_meeting(r, now, window, &mut *source))
        .collect()
}
