//! Session Mover - move Claude sessions between project directories
//!
//! Claude keeps a metadata log of every prompt in `~/.claude/history.jsonl`
//! and full transcripts under `~/.claude/projects/<encoded path>/`. Both are
//! keyed by the project directory, so renaming or moving a project strands
//! its sessions. This library:
//!
//! - Parses the metadata log, tolerating malformed lines
//! - Groups records into sessions for a project path
//! - Rewrites one session's project path in the log, after a backup
//! - Copies the session's transcripts to the new project's directory,
//!   repointing their working directory
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use session_mover::{ClaudePaths, Migrator, find_sessions};
//!
//! let paths = ClaudePaths::from_claude_dir("/Users/alice/.claude");
//! let migrator = Migrator::from_paths(&paths);
//! let records = migrator.history().load_all()?;
//! let sessions = find_sessions(&records, "/Users/alice/old-project");
//! if let Some(session) = sessions.first() {
//!     migrator.migrate_session(
//!         session,
//!         Path::new("/Users/alice/old-project"),
//!         Path::new("/Users/alice/new-project"),
//!     )?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod history;
pub mod indexer;
pub mod migrate;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::ClaudePaths;
pub use errors::{HistoryError, MigrationError, TranscriptError};
pub use history::HistoryStore;
pub use indexer::find_sessions;
pub use migrate::{MigrationOutcome, Migrator, TranscriptMigrator};
pub use models::{HistoryRecord, Session};
pub use parsers::history::parse_history_file;
pub use utils::paths::{encode_path, format_path_with_tilde, normalize_path};
