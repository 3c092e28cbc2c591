//! One assistant run: classify, schedule, summarize, announce.
//!
//! Runs are independent. Refreshing the dashboard means calling
//! [`Assistant::run`] again with fresh inputs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::announce::{
    announce_best_effort, Announcer, MEETINGS_SCHEDULED, PROGRESS_GOOD, PROGRESS_PENDING,
};
use crate::classifier::{ClassificationRecord, Classifier};
use crate::message::Message;
use crate::metrics::{summarize, Metrics, DEFAULT_PROGRESS_THRESHOLD};
use crate::scheduler::{schedule_all, HourSource, ScheduleWindow, ScheduledEvent};

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<ClassificationRecord>,
    pub events: Vec<ScheduledEvent>,
    pub metrics: Metrics,
}

#[derive(Debug, Clone)]
pub struct Assistant {
    pub classifier: Classifier,
    pub window: ScheduleWindow,
    pub progress_threshold: f64,
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            classifier: Classifier::default(),
            window: ScheduleWindow::default(),
            progress_threshold: DEFAULT_PROGRESS_THRESHOLD,
        }
    }
}

impl Assistant {
    pub fn new(classifier: Classifier, window: ScheduleWindow, progress_threshold: f64) -> Self {
        Self {
            classifier,
            window,
            progress_threshold,
        }
    }

    pub fn run(
        &self,
        messages: &[Message],
        now: DateTime<Utc>,
        hours: &mut dyn HourSource,
        announcer: &mut dyn Announcer,
    ) -> Report {
        let records = self.classifier.classify_all(messages);

        let events = schedule_all(&records, now, self.window, hours);
        if !events.is_empty() {
            announce_best_effort(announcer, MEETINGS_SCHEDULED);
        }

        let metrics = summarize(&records);
        let verdict = if metrics.is_on_track(self.progress_threshold) {
            PROGRESS_GOOD
        } else {
            PROGRESS_PENDING
        };
        announce_best_effort(announcer, verdict);

        info!(
            messages = metrics.total,
            meetings = metrics.meeting_count,
            tasks = metrics.task_count,
            scheduled = events.len(),
            progress = %metrics.progress_label(),
            "assistant run complete"
        );

        Report {
            generated_at: now,
            records,
            events,
            metrics,
        }
    }
}
