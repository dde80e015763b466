use serde_json::Value;

use super::lines::{is_blank, join_lines, split_lines};

const CWD_FIELD: &str = "cwd";

/// Rewrite the `cwd` field of one transcript line.
///
/// Returns `None` when the line is left as is: blank, not JSON, not an object,
/// or an object without a `cwd` key.
pub fn rewrite_cwd_line(line: &[u8], new_cwd: &str) -> Option<Vec<u8>> {
    if is_blank(line) {
        return None;
    }

    let mut value: Value = serde_json::from_slice(line).ok()?;
    let object = value.as_object_mut()?;
    let cwd = object.get_mut(CWD_FIELD)?;
    *cwd = Value::String(new_cwd.to_string());

    serde_json::to_vec(&value).ok()
}

/// Result of rewriting a whole transcript file
#[derive(Debug, PartialEq, Eq)]
pub struct RewrittenTranscript {
    pub content: Vec<u8>,
    pub patched_lines: usize,
}

/// Rewrite every `cwd` field in a transcript, passing other lines through unchanged
pub fn rewrite_transcript(content: &[u8], new_cwd: &str) -> RewrittenTranscript {
    let split = split_lines(content);
    let mut patched_lines = 0;

    let lines: Vec<Vec<u8>> = split
        .lines
        .iter()
        .map(|line| match rewrite_cwd_line(line, new_cwd) {
            Some(updated) => {
                patched_lines += 1;
                updated
            }
            None => line.to_vec(),
        })
        .collect();

    RewrittenTranscript { content: join_lines(&lines, split.trailing_newline), patched_lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_cwd_line() {
        let out = rewrite_cwd_line(br#"{"cwd":"/p1","msg":"hi"}"#, "/p2").unwrap();
        assert_eq!(out, br#"{"cwd":"/p2","msg":"hi"}"#);
    }

    #[test]
    fn test_rewrite_keeps_field_order() {
        let out =
            rewrite_cwd_line(br#"{"type":"user","cwd":"/old","uuid":"u1","z":{"b":1,"a":2}}"#, "/new")
                .unwrap();
        assert_eq!(out, br#"{"type":"user","cwd":"/new","uuid":"u1","z":{"b":1,"a":2}}"#);
    }

    #[test]
    fn test_lines_without_cwd_untouched() {
        assert!(rewrite_cwd_line(br#"{"type":"summary","summary":"x"}"#, "/new").is_none());
        assert!(rewrite_cwd_line(b"not json", "/new").is_none());
        assert!(rewrite_cwd_line(br#"["cwd"]"#, "/new").is_none());
        assert!(rewrite_cwd_line(b"   ", "/new").is_none());
    }

    #[test]
    fn test_nested_cwd_is_not_rewritten() {
        assert!(rewrite_cwd_line(br#"{"message":{"cwd":"/old"}}"#, "/new").is_none());
    }

    #[test]
    fn test_non_string_cwd_is_replaced() {
        let out = rewrite_cwd_line(br#"{"cwd":null}"#, "/new").unwrap();
        assert_eq!(out, br#"{"cwd":"/new"}"#);
    }

    #[test]
    fn test_rewrite_transcript_passthrough() {
        let content = b"{\"cwd\":\"/p1\",\"msg\":\"hi\"}\nbroken {\n{\"type\":\"summary\",  \"x\":1}\n\n{\"cwd\":\"/p1\"}";
        let rewritten = rewrite_transcript(content, "/p2");

        assert_eq!(rewritten.patched_lines, 2);
        assert_eq!(
            String::from_utf8(rewritten.content).unwrap(),
            "{\"cwd\":\"/p2\",\"msg\":\"hi\"}\nbroken {\n{\"type\":\"summary\",  \"x\":1}\n\n{\"cwd\":\"/p2\"}"
        );
    }

    #[test]
    fn test_rewrite_transcript_keeps_trailing_newline() {
        let rewritten = rewrite_transcript(b"{\"cwd\":\"/a\"}\n", "/b");
        assert_eq!(rewritten.content, b"{\"cwd\":\"/b\"}\n");
    }
}
