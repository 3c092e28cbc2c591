//! Plain-text dashboard for `workmate run`.

use std::fmt::{self, Write};
use workmate_core::{Message, Report};

use crate::config::DisplayZone;

const YES: &str = "✅";
const NO: &str = "❌";

fn glyph(flag: bool) -> &'static str {
    if flag { YES } else { NO }
}

fn width(rows: impl Iterator<Item = usize>, header: &str) -> usize {
    rows.chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

pub fn write_dashboard(
    out: &mut impl Write,
    messages: &[Message],
    report: &Report,
    zone: DisplayZone,
) -> fmt::Result {
    writeln!(out, "# Smart Workplace Assistant\n")?;

    writeln!(out, "## Inbox / Chat Messages\n")?;
    if messages.is_empty() {
        writeln!(out, "(no messages)")?;
    }
    for (i, m) in messages.iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, m)?;
    }

    writeln!(out, "\n## Analysis Results\n")?;
    let msg_w = width(report.records.iter().map(|r| r.message.chars().count()), "Message");
    writeln!(out, "{:<msg_w$} | Meeting | Task | Deadline", "Message")?;
    writeln!(out, "{}", "-".repeat(msg_w + 27))?;
    for r in &report.records {
        writeln!(
            out,
            "{:<msg_w$} |   {}    |  {}  | {}",
            r.message,
            glyph(r.meeting_detected),
            glyph(r.task_detected),
            r.deadline_label()
        )?;
    }

    writeln!(out, "\n## Meeting Scheduler\n")?;
    if report.events.is_empty() {
        writeln!(out, "No meetings detected.")?;
    } else {
        writeln!(out, "Meetings automatically detected and scheduled {YES}\n")?;
        let ev_w = width(report.events.iter().map(|e| e.message.chars().count()), "Event");
        writeln!(out, "{:<ev_w$} | Scheduled Time ({})", "Event", zone.label())?;
        writeln!(out, "{}", "-".repeat(ev_w + 30))?;
        for e in &report.events {
            writeln!(out, "{:<ev_w$} | {}", e.message, zone.format(e))?;
        }
    }

    let m = &report.metrics;
    writeln!(out, "\n## Productivity Dashboard\n")?;
    writeln!(out, "Meetings Detected : {}", m.meeting_count)?;
    writeln!(out, "Tasks Identified  : {}", m.task_count)?;
    writeln!(out, "Task Progress (%) : {}", m.progress_label())
}

/// One-line summary for the chat header.
pub fn summary_line(report: &Report) -> String {
    let m = &report.metrics;
    format!(
        "{} messages | {} meetings | {} tasks | progress {}",
        m.total,
        m.meeting_count,
        m.task_count,
        m.progress_label()
    )
}
