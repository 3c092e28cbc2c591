use chrono::{Duration, TimeZone, Utc};
use workmate_core::{
    parse_inbox, AnnounceError, Announcer, Assistant, Chatbot, Classifier, Intent, KeywordSets,
    RngHourSource, ScheduleWindow,
};

/// Voice sink that is never available.
struct NoSpeaker {
    attempts: usize,
}

impl Announcer for NoSpeaker {
    fn announce(&mut self, _text: &str) -> Result<(), AnnounceError> {
        self.attempts += 1;
        Err(AnnounceError::Unavailable("espeak-ng not found".to_string()))
    }
}

const INBOX: &str = r#"
# Monday export
Conference call with vendors on Tuesday.
Send the signed contract today, then finish the budget by Thursday.
Lunch?
Please complete the onboarding checklist.
"#;

#[test]
fn test_run_from_inbox_file_with_missing_voice() {
    let now = Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap();
    let messages = parse_inbox(INBOX);
    assert_eq!(messages.len(), 4);

    let mut voice = NoSpeaker { attempts: 0 };
    let report =
        Assistant::default().run(&messages, now, &mut RngHourSource::seeded(11), &mut voice);

    // Voice failure does not stop the run.
    assert_eq!(voice.attempts, 2);

    assert_eq!(report.records.len(), messages.len());
    for (record, message) in report.records.iter().zip(&messages) {
        assert_eq!(record.message, message.text());
    }

    assert_eq!(report.records[0].deadline.as_deref(), Some("tuesday"));
    assert_eq!(report.records[1].deadline.as_deref(), Some("thursday"));
    assert_eq!(report.records[2].deadline, None);

    assert_eq!(report.events.len(), 1);
    assert_eq!(report.events[0].message, messages[0].text());
    assert!(report.events[0].scheduled_at >= now + Duration::hours(1));
    assert!(report.events[0].scheduled_at <= now + Duration::hours(48));

    assert_eq!(report.metrics.task_count, 2);
    assert_eq!(report.metrics.progress_label(), "50.00%");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["metrics"]["meeting_count"], 1);
    assert_eq!(json["records"][2]["deadline"], serde_json::Value::Null);
}

#[test]
fn test_custom_keywords_and_window() {
    let now = Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap();
    let assistant = Assistant::new(
        Classifier::new(KeywordSets::new(["sync"], ["ship"], ["eod"])),
        ScheduleWindow::new(2, 2).unwrap(),
        50.0,
    );
    let messages = parse_inbox("Design sync at noon\nShip the build by EOD\n");

    let mut voice = workmate_core::RecordingAnnouncer::default();
    let report = assistant.run(&messages, now, &mut RngHourSource::seeded(0), &mut voice);

    assert_eq!(report.events[0].scheduled_at, now + Duration::hours(2));
    assert_eq!(report.records[1].deadline.as_deref(), Some("eod"));
    assert_eq!(
        voice.spoken,
        vec![
            "Meetings have been successfully scheduled.",
            "Great work! Productivity is improving.",
        ]
    );
}

#[test]
fn test_chatbot_meeting_beats_task() {
    let reply = Chatbot::default().respond("Do I have a task or a meeting tomorrow?");
    assert_eq!(reply.intent, Intent::Meetings);
}
