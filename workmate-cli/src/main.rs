use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use workmate_core::{announce_best_effort, RngHourSource};

mod chat;
mod config;
mod render;
mod state;
mod voice;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("WORKMATE_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "workmate",
    version = VERSION,
    about = "Smart workplace assistant: meetings, tasks and deadlines from your inbox"
)]
struct Cli {
    /// Disable voice prompts for this invocation
    #[arg(long, global = true, default_value_t = false)]
    no_voice: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the inbox, schedule meetings and print the dashboard
    Run {
        /// Inbox file, one message per line (defaults to the built-in sample inbox)
        #[arg(long)]
        inbox: Option<PathBuf>,

        /// Seed for meeting times (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON instead of tables
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Classify a single message
    Classify {
        /// Message text
        text: String,
    },

    /// Ask the assistant a single question
    Ask {
        /// Question text
        query: String,
    },

    /// Interactive chat screen with a live dashboard summary
    Chat {
        /// Inbox file, one message per line (defaults to the built-in sample inbox)
        #[arg(long)]
        inbox: Option<PathBuf>,
    },

    /// Write the default config to ~/.workmate/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the dashboard.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run { inbox, seed, json } => {
            let cfg = config::load_config()?;
            let zone = cfg.timezone()?;
            let assistant = cfg.assistant()?;
            let messages = state::load_inbox(inbox.as_deref())?;
            let mut voice = voice::announcer(&cfg.voice, cli.no_voice || json);

            let mut hours = match seed {
                Some(s) => RngHourSource::seeded(s),
                None => RngHourSource::from_entropy(),
            };

            let report = assistant.run(&messages, Utc::now(), &mut hours, voice.as_mut());

            if json {
                let s = serde_json::to_string_pretty(&report).context("serialize report")?;
                println!("{s}");
            } else {
                let mut out = String::new();
                render::write_dashboard(&mut out, &messages, &report, zone)
                    .context("render dashboard")?;
                print!("{out}");
            }
        }

        Command::Classify { text } => {
            let cfg = config::load_config()?;
            let record = cfg.assistant()?.classifier.classify(&text);
            println!("Message : {}", record.message);
            println!("Meeting : {}", record.meeting_detected);
            println!("Task    : {}", record.task_detected);
            println!("Deadline: {}", record.deadline_label());
        }

        Command::Ask { query } => {
            let cfg = config::load_config()?;
            if query.trim().is_empty() {
                return Ok(());
            }
            let mut voice = voice::announcer(&cfg.voice, cli.no_voice);
            let reply = cfg.chatbot().respond(&query);
            println!("{}", reply.text);
            announce_best_effort(voice.as_mut(), &reply.spoken);
        }

        Command::Chat { inbox } => {
            let cfg = config::load_config()?;
            chat::run_chat(chat::ChatSession {
                assistant: cfg.assistant()?,
                chatbot: cfg.chatbot(),
                inbox: state::load_inbox(inbox.as_deref())?,
                zone: cfg.timezone()?,
                announcer: voice::announcer(&cfg.voice, cli.no_voice),
            })?;
        }

        Command::InitConfig => {
            config::init_config()?;
        }
    }

    Ok(())
}
