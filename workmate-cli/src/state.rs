use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use workmate_core::{parse_inbox, sample_inbox, Message};

/// `$WORKMATE_HOME`, falling back to `~/.workmate`.
pub fn workmate_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("WORKMATE_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".workmate"))
}

pub fn ensure_workmate_home() -> Result<PathBuf> {
    let dir = workmate_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn chat_log_dir() -> Result<PathBuf> {
    let dir = ensure_workmate_home()?.join("chat");
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Messages from `path`, or the built-in sample inbox when no path is given.
pub fn load_inbox(path: Option<&Path>) -> Result<Vec<Message>> {
    match path {
        Some(p) => {
            let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
            Ok(parse_inbox(&s))
        }
        None => Ok(sample_inbox()),
    }
}
