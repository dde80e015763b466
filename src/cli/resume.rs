use std::path::Path;

/// Characters that never need quoting in a POSIX shell word
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ':' | '@' | '%' | ',' | '=')
}

/// Single-quote a word when it contains anything the shell would interpret
pub fn shell_quote(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_shell_safe) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Command that resumes `session_id` from `dir`
pub fn resume_command(dir: &Path, session_id: &str) -> String {
    format!(
        "cd {} && claude --resume {}",
        shell_quote(&dir.to_string_lossy()),
        shell_quote(session_id)
    )
}
