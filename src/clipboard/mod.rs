//! Copying the resume command to the system clipboard.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Longest command accepted for the clipboard
const MAX_COMMAND_LEN: usize = 64 * 1024;

/// Destination for copied text; the system clipboard in production
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard through arboard
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Rejects text that is not a single-line shell command
fn validate_command(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Cannot copy an empty command to the clipboard");
    }
    if text.contains('\n') || text.contains('\r') {
        bail!("Refusing to copy a multi-line command to the clipboard");
    }
    if text.len() > MAX_COMMAND_LEN {
        bail!("Command too large for clipboard ({} bytes, max {})", text.len(), MAX_COMMAND_LEN);
    }
    Ok(())
}

/// Copy a command through the given provider
pub fn copy_command_with(provider: &mut dyn ClipboardProvider, command: &str) -> Result<()> {
    validate_command(command)?;
    provider.set_text(command)
}

/// Copy a command to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The command is empty, spans several lines, or is oversized
/// - The system clipboard is unavailable (headless environment, denied access)
pub fn copy_to_clipboard(command: &str) -> Result<()> {
    // Validate before touching the clipboard so headless runs still get a useful message
    validate_command(command)?;

    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClipboard {
        text: Option<String>,
        should_fail: bool,
    }

    impl MockClipboard {
        fn new() -> Self {
            Self { text: None, should_fail: false }
        }

        fn with_failure() -> Self {
            Self { text: None, should_fail: true }
        }
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.should_fail {
                bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_resume_command() {
        let mut mock = MockClipboard::new();
        let command = "cd '/tmp/my project' && claude --resume abc";

        copy_command_with(&mut mock, command).unwrap();

        assert_eq!(mock.text.as_deref(), Some(command));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let mut mock = MockClipboard::with_failure();
        let err = copy_command_with(&mut mock, "cd /p && claude --resume a").unwrap_err();
        assert!(err.to_string().contains("Mock clipboard error"));
    }

    #[test]
    fn test_rejects_empty_and_multiline() {
        let mut mock = MockClipboard::new();

        let err = copy_command_with(&mut mock, "  ").unwrap_err();
        assert!(err.to_string().contains("empty"));

        let err = copy_command_with(&mut mock, "cd /p\nrm -rf /").unwrap_err();
        assert!(err.to_string().contains("multi-line"));

        assert!(mock.text.is_none());
    }

    #[test]
    fn test_rejects_oversized() {
        let mut mock = MockClipboard::new();
        let err = copy_command_with(&mut mock, &"a".repeat(MAX_COMMAND_LEN + 1)).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_system_copy_validates_first() {
        let err = copy_to_clipboard("").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
