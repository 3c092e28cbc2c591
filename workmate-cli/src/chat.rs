use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use workmate_core::{Announcer, Assistant, Chatbot, Message, Report, RngHourSource};

use crate::config::DisplayZone;
use crate::render::summary_line;

#[derive(Clone, Debug)]
struct Msg {
    role: Role,
    content: String,
}

#[derive(Clone, Debug)]
enum Role {
    User,
    Assistant,
    System,
}

struct ChatLog {
    path: PathBuf,
}

impl ChatLog {
    fn open_today() -> Result<Self> {
        let dir = crate::state::chat_log_dir()?;
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let path = dir.join(format!("{today}.md"));
        Ok(Self { path })
    }

    fn append(&mut self, role: &str, msg: &str) -> Result<()> {
        use std::io::Write;
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            f,
            "- {} [{}] {}",
            Utc::now().to_rfc3339(),
            role,
            msg.replace('\n', " ")
        )?;
        Ok(())
    }
}

/// Everything the chat screen needs to answer and refresh.
pub struct ChatSession {
    pub assistant: Assistant,
    pub chatbot: Chatbot,
    pub inbox: Vec<Message>,
    pub zone: DisplayZone,
    pub announcer: Box<dyn Announcer>,
}

impl ChatSession {
    /// Fresh pipeline run; replaces nothing but the returned report.
    fn refresh(&mut self) -> Report {
        self.assistant.run(
            &self.inbox,
            Utc::now(),
            &mut RngHourSource::from_entropy(),
            self.announcer.as_mut(),
        )
    }
}

pub fn run_chat(session: ChatSession) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = chat_loop(&mut terminal, session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn chat_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut session: ChatSession,
) -> Result<()> {
    let mut report = session.refresh();
    let mut messages: Vec<Msg> = vec![Msg {
        role: Role::Assistant,
        content: "Ask your assistant, e.g. \"Show my meetings for tomorrow\".".to_string(),
    }];

    let mut input = String::new();
    let mut show_help = true;

    let mut log = ChatLog::open_today()?;
    log.append("system", "session_start")?;

    loop {
        let summary = summary_line(&report);
        let next_meeting = report
            .events
            .iter()
            .min_by_key(|e| e.scheduled_at)
            .map(|e| format!("next meeting {}: {}", session.zone.format(e), e.message))
            .unwrap_or_else(|| "No meetings detected.".to_string());

        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Min(5),
                    Constraint::Length(3),
                ])
                .split(size);

            let header = Paragraph::new(Text::from(vec![
                Line::from(Span::styled(
                    "Smart Workplace Assistant",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(summary.clone(), Style::default().fg(Color::Cyan))),
                Line::from(Span::styled(next_meeting.clone(), Style::default().fg(Color::Gray))),
            ]))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(header, chunks[0]);

            let mut lines: Vec<Line> = Vec::new();
            if show_help {
                lines.push(Line::from(Span::styled(
                    "Shortcuts: Enter=send, Esc=quit, q on empty input=quit, ?=help",
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::raw("Commands: /help /refresh"));
                lines.push(Line::raw(""));
            }

            for m in &messages {
                let (tag, color) = match m.role {
                    Role::User => ("you", Color::Cyan),
                    Role::Assistant => ("assistant", Color::Magenta),
                    Role::System => ("system", Color::Gray),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", tag), Style::default().fg(color)),
                    Span::raw(m.content.clone()),
                ]));
                lines.push(Line::raw(""));
            }

            let history = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title("conversation"))
                .wrap(Wrap { trim: false });
            f.render_widget(history, chunks[1]);

            let input_widget = Paragraph::new(input.as_str())
                .block(Block::default().borders(Borders::ALL).title("ask your assistant"))
                .style(Style::default().fg(Color::White));
            f.render_widget(input_widget, chunks[2]);
        })?;

        if !event::poll(std::time::Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('q') if input.is_empty() => break,
            KeyCode::Char('?') if input.is_empty() => {
                show_help = !show_help;
            }
            KeyCode::Enter => {
                let trimmed = input.trim().to_string();
                input.clear();
                if trimmed.is_empty() {
                    continue;
                }
                log.append("user", &trimmed)?;

                let reply = match trimmed.as_str() {
                    "/refresh" => {
                        report = session.refresh();
                        format!("Refreshed: {}", summary_line(&report))
                    }
                    "/help" => {
                        "Ask about meetings or tasks, or say hello. /refresh re-runs the analysis."
                            .to_string()
                    }
                    s if s.starts_with('/') => "Unknown command. Try /help".to_string(),
                    s => {
                        messages.push(Msg {
                            role: Role::User,
                            content: s.to_string(),
                        });
                        session.chatbot.answer(s, session.announcer.as_mut()).text
                    }
                };

                if trimmed.starts_with('/') {
                    messages.push(Msg {
                        role: Role::System,
                        content: reply.clone(),
                    });
                } else {
                    messages.push(Msg {
                        role: Role::Assistant,
                        content: reply.clone(),
                    });
                }
                log.append("assistant", &reply)?;
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            _ => {}
        }
    }

    log.append("system", "session_end")?;
    Ok(())
}
