use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

const CLAUDE_DIRNAME: &str = ".claude";

/// Get the Claude directory path (~/.claude)
pub fn get_claude_dir() -> Result<PathBuf> {
    claude_dir_in(env::var_os("HOME"))
}

fn claude_dir_in(home: Option<OsString>) -> Result<PathBuf> {
    match home {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(CLAUDE_DIRNAME)),
        _ => bail!("HOME environment variable not set"),
    }
}

/// Current working directory, used as the default source project
pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("Failed to get current directory")
}
