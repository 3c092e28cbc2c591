use anyhow::{anyhow, Context, Result};
use chrono::Local;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use workmate_core::{
    Assistant, Chatbot, Classifier, KeywordSets, ScheduleWindow, ScheduledEvent,
    DEFAULT_PROGRESS_THRESHOLD,
};

use crate::state::{ensure_workmate_home, workmate_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keywords: KeywordSets,
    pub schedule: ScheduleSection,
    pub voice: VoiceSection,
    pub assistant: AssistantSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSection {
    pub min_hours: i64,
    pub max_hours: i64,
    /// IANA zone used when printing scheduled times; unset means the system zone.
    pub timezone: Option<String>,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        let window = ScheduleWindow::default();
        Self {
            min_hours: window.min_hours(),
            max_hours: window.max_hours(),
            timezone: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSection {
    pub enabled: bool,
    /// TTS binary. When unset, the first of espeak-ng / espeak / say on PATH.
    pub command: Option<String>,
    /// Extra args passed before the text.
    pub args: Vec<String>,
}

impl Default for VoiceSection {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSection {
    /// Name used by the chatbot greeting.
    pub user_name: String,
    /// Task progress (percent) at or above which the affirmative prompt plays.
    pub progress_threshold: f64,
}

impl Default for AssistantSection {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            progress_threshold: DEFAULT_PROGRESS_THRESHOLD,
        }
    }
}

/// Zone scheduled times are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn label(&self) -> &str {
        match self {
            DisplayZone::Local => "local",
            DisplayZone::Named(tz) => tz.name(),
        }
    }

    pub fn format(&self, event: &ScheduledEvent) -> String {
        match self {
            DisplayZone::Local => event.display_time(&Local),
            DisplayZone::Named(tz) => event.display_time(tz),
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<DisplayZone> {
        match self.schedule.timezone.as_deref().map(str::trim) {
            None | Some("") => Ok(DisplayZone::Local),
            Some(name) if name.eq_ignore_ascii_case("local") => Ok(DisplayZone::Local),
            Some(name) => name
                .parse()
                .map(DisplayZone::Named)
                .map_err(|_| anyhow!("invalid timezone in config: {name}")),
        }
    }

    pub fn assistant(&self) -> Result<Assistant> {
        let window = ScheduleWindow::new(self.schedule.min_hours, self.schedule.max_hours)
            .context("invalid [schedule] window")?;
        Ok(Assistant::new(
            Classifier::new(self.keywords.clone()),
            window,
            self.assistant.progress_threshold,
        ))
    }

    pub fn chatbot(&self) -> Chatbot {
        Chatbot::new(Some(self.assistant.user_name.clone()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(workmate_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    let mut cfg: Config = toml::from_str(s)?;
    cfg.keywords = cfg.keywords.normalized();
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_workmate_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.keywords, KeywordSets::default());
        assert_eq!(cfg.schedule.max_hours, 48);
        assert!(cfg.voice.enabled);
        assert_eq!(cfg.timezone().unwrap(), DisplayZone::Local);
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse_config(
            r#"
[keywords]
meeting = ["Standup", "sync"]

[schedule]
max_hours = 8
timezone = "America/Chicago"

[assistant]
user_name = "Mukesh"
"#,
        )
        .unwrap();

        assert_eq!(cfg.keywords.meeting, vec!["standup", "sync"]);
        // Unlisted sets keep their defaults.
        assert!(cfg.keywords.is_task("submit"));
        assert_eq!(cfg.schedule.min_hours, 1);
        assert_eq!(
            cfg.timezone().unwrap(),
            DisplayZone::Named(chrono_tz::America::Chicago)
        );
        assert_eq!(cfg.assistant.progress_threshold, 60.0);
        assert_eq!(
            cfg.chatbot().respond("hello").text,
            "Hello Mukesh! How can I assist you today?"
        );
        assert_eq!(cfg.assistant().unwrap().window, ScheduleWindow::new(1, 8).unwrap());
    }

    #[test]
    fn test_bad_values_are_errors() {
        let cfg = parse_config("[schedule]\ntimezone = \"Mars/Olympus\"\n").unwrap();
        assert!(cfg.timezone().is_err());

        let cfg = parse_config("[schedule]\nmin_hours = 9\nmax_hours = 2\n").unwrap();
        assert!(cfg.assistant().is_err());

        let cfg = parse_config("[schedule]\nmax_hours = 9223372036854775807\n").unwrap();
        let err = cfg.assistant().unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the limit"));
    }

    #[test]
    fn test_local_timezone_spellings() {
        for text in ["", "[schedule]\ntimezone = \"local\"\n", "[schedule]\ntimezone = \"\"\n"] {
            let cfg = parse_config(text).unwrap();
            assert_eq!(cfg.timezone().unwrap(), DisplayZone::Local);
            assert_eq!(cfg.timezone().unwrap().label(), "local");
        }
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        let cfg = parse_config(&s).unwrap();
        assert_eq!(cfg.keywords, KeywordSets::default());
    }
}
