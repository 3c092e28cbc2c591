//! Productivity metrics over a run's classification records.

use serde::{Deserialize, Serialize};

use crate::classifier::ClassificationRecord;

/// Progress threshold (percent) for the affirmative voice prompt.
pub const DEFAULT_PROGRESS_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: usize,
    pub meeting_count: usize,
    pub task_count: usize,
    /// `100 * task_count / total`; `None` for an empty run.
    pub task_progress_percent: Option<f64>,
}

impl Metrics {
    /// Two decimals with a percent sign, or `N/A` when there were no messages.
    pub fn progress_label(&self) -> String {
        match self.task_progress_percent {
            Some(p) => format!("{p:.2}%"),
            None => "N/A".to_string(),
        }
    }

    /// An empty run counts as 0% progress.
    pub fn is_on_track(&self, threshold: f64) -> bool {
        self.task_progress_percent.unwrap_or(0.0) >= threshold
    }
}

pub fn summarize(records: &[ClassificationRecord]) -> Metrics {
    let total = records.len();
    let meeting_count = records.iter().filter(|r| r.meeting_detected).count();
    let task_count = records.iter().filter(|r| r.task_detected).count();

    let task_progress_percent = if total == 0 {
        None
    } else {
        Some(task_count as f64 / total as f64 * 100.0)
    };

    Metrics {
        total,
        meeting_count,
        task_count,
        task_progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(meeting: bool, task: bool) -> ClassificationRecord {
        ClassificationRecord {
            message: String::new(),
            meeting_detected: meeting,
            task_detected: task,
            deadline: None,
        }
    }

    #[test]
    fn test_summarize_empty_is_defined() {
        let m = summarize(&[]);
        assert_eq!(m.total, 0);
        assert_eq!(m.meeting_count, 0);
        assert_eq!(m.task_count, 0);
        assert_eq!(m.task_progress_percent, None);
        assert_eq!(m.progress_label(), "N/A");
        assert!(!m.is_on_track(DEFAULT_PROGRESS_THRESHOLD));
    }

    #[test]
    fn test_summarize_counts() {
        let m = summarize(&[rec(true, false), rec(false, true), rec(true, true)]);
        assert_eq!(m.meeting_count, 2);
        assert_eq!(m.task_count, 2);
        assert_eq!(m.progress_label(), "66.67%");
        assert!(m.is_on_track(DEFAULT_PROGRESS_THRESHOLD));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let m = summarize(&[
            rec(false, true),
            rec(false, true),
            rec(false, true),
            rec(false, false),
            rec(false, false),
        ]);
        assert_eq!(m.task_progress_percent, Some(60.0));
        assert!(m.is_on_track(60.0));
        assert!(!m.is_on_track(60.01));
    }
}
