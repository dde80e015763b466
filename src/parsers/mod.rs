//! JSONL parsers for Claude Code history and transcript files
//!
//! # Error Handling Strategy
//!
//! Both files are also written by Claude Code and by other tooling. Parsing
//! is tolerant:
//!
//! - **History lines** that do not parse as a [`HistoryRecord`](crate::models::HistoryRecord)
//!   are skipped when loading and passed through verbatim when rewriting. They
//!   are logged at debug level only and never counted against the file.
//!
//! - **Transcript lines** are opaque JSON. Only a top-level `cwd` key is
//!   recognized; everything else, including lines that are not JSON at all,
//!   is copied byte-for-byte.
//!
//! - **I/O errors** are not tolerated and surface as [`HistoryError`](crate::errors::HistoryError).

pub mod deserializers;
pub mod history;
pub mod lines;
pub mod transcript;

pub use history::{parse_history_file, parse_history_line};
pub use transcript::{rewrite_cwd_line, rewrite_transcript};
