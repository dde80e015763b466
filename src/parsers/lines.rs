//! Byte-level JSONL line handling shared by the history and transcript rewriters.
//!
//! Working on bytes rather than `&str` keeps lines that are not valid UTF-8
//! intact when they are passed through.

/// Content split into lines, remembering whether it ended with a newline
#[derive(Debug, PartialEq, Eq)]
pub struct JsonlLines<'a> {
    pub lines: Vec<&'a [u8]>,
    pub trailing_newline: bool,
}

/// Split raw content on `\n`, dropping a `\r` before each line break
pub fn split_lines(content: &[u8]) -> JsonlLines<'_> {
    let trailing_newline = content.ends_with(b"\n");
    let body = if trailing_newline { &content[..content.len() - 1] } else { content };

    let lines = if content.is_empty() {
        Vec::new()
    } else {
        body.split(|b| *b == b'\n').map(|line| line.strip_suffix(b"\r").unwrap_or(line)).collect()
    };

    JsonlLines { lines, trailing_newline }
}

/// Join lines with `\n`, restoring the trailing newline if there was one
pub fn join_lines<L: AsRef<[u8]>>(lines: &[L], trailing_newline: bool) -> Vec<u8> {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = Vec::with_capacity(capacity);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(line.as_ref());
    }
    if trailing_newline && !lines.is_empty() {
        out.push(b'\n');
    }
    out
}

/// True for lines that are empty or only whitespace
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}
