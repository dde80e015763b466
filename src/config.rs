//! Locations of the files the migration reads and writes.
//!
//! Paths are resolved once at startup and handed to each component, so tests
//! can point everything at a temporary directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::utils::get_claude_dir;

const HISTORY_FILENAME: &str = "history.jsonl";
const PROJECTS_DIRNAME: &str = "projects";
const BACKUP_SUFFIX: &str = ".backup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudePaths {
    pub claude_dir: PathBuf,
    pub history_file: PathBuf,
    pub projects_dir: PathBuf,
}

impl ClaudePaths {
    pub fn from_claude_dir(claude_dir: impl Into<PathBuf>) -> Self {
        let claude_dir = claude_dir.into();
        Self {
            history_file: claude_dir.join(HISTORY_FILENAME),
            projects_dir: claude_dir.join(PROJECTS_DIRNAME),
            claude_dir,
        }
    }

    /// Paths under `$HOME/.claude`
    pub fn discover() -> Result<Self> {
        Ok(Self::from_claude_dir(get_claude_dir()?))
    }

    pub fn backup_file(&self) -> PathBuf {
        backup_path(&self.history_file)
    }
}

/// `<file>.backup`, next to the file it protects
pub fn backup_path(file: &Path) -> PathBuf {
    let mut name = OsString::from(file.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
