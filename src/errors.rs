//! Typed errors for the migration core.
//!
//! The core distinguishes "not found" conditions (nothing was modified, the
//! operator should check the paths) from I/O failures and from a partial
//! migration where `history.jsonl` was already rewritten. The CLI layer wraps
//! these in `anyhow` with extra context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read history file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create backup {}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write history file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HistoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Map an open/read failure, keeping "not found" distinguishable
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Read { path, source }
        }
    }
}

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("project directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("source and destination resolve to the same project directory: {}", .0.display())]
    SameDirectory(PathBuf),

    #[error("no session files found for {session_id} in {}", dir.display())]
    NoFiles { session_id: String, dir: PathBuf },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list project directory {}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TranscriptError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound(_) | Self::NoFiles { .. })
    }
}

#[derive(Debug, Error)]
pub enum MigrationError {
    /// Refused before anything was written
    #[error("migration refused")]
    Refused(#[source] TranscriptError),

    #[error("failed to update history")]
    History(#[source] HistoryError),

    /// History already points at the new path; transcripts were not fully copied
    #[error(
        "failed to copy session files (history was already updated; previous version saved at {})",
        backup.display()
    )]
    Transcripts {
        backup: PathBuf,
        #[source]
        source: TranscriptError,
    },
}

impl MigrationError {
    /// True when history.jsonl was rewritten but the transcript copy failed
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Transcripts { .. })
    }
}
