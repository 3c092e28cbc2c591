use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;
use workmate_core::{AnnounceError, Announcer, NullAnnouncer};

use crate::config::VoiceSection;

/// Engines tried in order when no command is configured.
const CANDIDATES: &[&str] = &["espeak-ng", "espeak", "say"];

/// Speaks through a system TTS binary, blocking until it exits.
pub struct CommandAnnouncer {
    program: Option<PathBuf>,
    label: String,
    args: Vec<String>,
    warned: bool,
}

impl CommandAnnouncer {
    pub fn from_config(voice: &VoiceSection) -> Self {
        let (label, program) = match &voice.command {
            Some(cmd) => (cmd.clone(), which::which(cmd).ok()),
            None => CANDIDATES
                .iter()
                .find_map(|c| which::which(c).ok().map(|p| (c.to_string(), Some(p))))
                .unwrap_or_else(|| (CANDIDATES.join("/"), None)),
        };
        debug!(engine = %label, found = program.is_some(), "voice engine lookup");
        Self {
            program,
            label,
            args: voice.args.clone(),
            warned: false,
        }
    }
}

impl Announcer for CommandAnnouncer {
    fn announce(&mut self, text: &str) -> Result<(), AnnounceError> {
        let Some(program) = &self.program else {
            // Only the first miss is worth surfacing.
            if self.warned {
                return Ok(());
            }
            self.warned = true;
            return Err(AnnounceError::Unavailable(format!(
                "{} not found on PATH",
                self.label
            )));
        };

        let status = Command::new(program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(AnnounceError::CommandFailed {
                command: self.label.clone(),
                reason: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}

/// The announcer for this invocation: silent when voice is off.
pub fn announcer(voice: &VoiceSection, muted: bool) -> Box<dyn Announcer> {
    if muted || !voice.enabled {
        return Box::new(NullAnnouncer);
    }
    Box::new(CommandAnnouncer::from_config(voice))
}
