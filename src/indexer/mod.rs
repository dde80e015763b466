//! Session index built from `history.jsonl` records.
//!
//! Records are grouped per session ID for a single project path. The index
//! is rebuilt on every run and never written back to disk.

pub mod sessions;

pub use sessions::{find_sessions, first_messages, last_messages, truncate_chars};
