//! Data models for Claude Code session history.
//!
//! - [`HistoryRecord`] - One line of `history.jsonl`, with unknown fields preserved
//! - [`Session`] - Records grouped by session ID for one project path
//!
//! Records use serde for JSON (de)serialization with custom deserializers
//! for the timestamp and session ID fields in [`crate::parsers::deserializers`].

pub mod history;
pub mod session;

pub use history::HistoryRecord;
pub use session::Session;
