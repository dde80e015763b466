//! Terminal output sanitization
//!
//! Prompt text from `history.jsonl` ends up in the session picker and in the
//! session details printed to the terminal. Escape sequences in that text could
//! move the cursor or repaint the screen, so previews go through
//! [`strip_ansi_codes`] before they are displayed.

/// Strips ANSI CSI escape sequences and control characters from a string
///
/// Tabs and line breaks survive; the picker flattens those separately.
///
/// # Examples
///
/// ```
/// use session_mover::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // CSI sequence: ESC [ params... final letter
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}
