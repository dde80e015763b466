use std::borrow::Cow;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Encodes an absolute project path into Claude's project directory name
///
/// The leading `/` is dropped, every other `/` and every `.` becomes `-`, and a
/// single `-` is prepended. The mapping is one-way and not injective:
/// `/a/b` and `/a.b` share a directory name.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use session_mover::encode_path;
///
/// let path = PathBuf::from("/Users/foo/my.app");
/// assert_eq!(encode_path(&path), "-Users-foo-my-app");
/// ```
pub fn encode_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    let without_leading_slash = path_str.strip_prefix('/').unwrap_or(&path_str);
    let encoded: String = without_leading_slash
        .chars()
        .map(|c| if c == '/' || c == '.' { '-' } else { c })
        .collect();
    format!("-{}", encoded)
}

/// Turns user input into an absolute, lexically clean path
///
/// Expands a leading `~`, resolves relative input against `cwd`, and removes
/// `.` and `..` components without touching the filesystem.
pub fn normalize_path(input: &str, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let expanded = match (input, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (s, Some(home)) if s.starts_with("~/") => home.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    };

    let absolute = if expanded.is_absolute() { expanded } else { cwd.join(expanded) };
    clean_path(&absolute)
}

/// Lexically normalize a path: drop `.`, fold `..` into its parent
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if cleaned.parent().is_some() {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use session_mover::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Documents");
/// // Returns "~/Documents" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = match home_override {
        Some(_) => None,
        None => env::var("HOME").ok(),
    };
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty() && *h != "/");

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && let Some(rest) = path_str.strip_prefix(home)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return format!("~{}", rest);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
