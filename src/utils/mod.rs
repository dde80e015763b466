pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{current_dir, get_claude_dir};
pub use paths::{encode_path, format_path_with_tilde, normalize_path};
pub use terminal::strip_ansi_codes;
