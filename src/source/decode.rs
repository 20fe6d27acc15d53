//! Best-effort text decoding of repository files.
//!
//! Files are never rejected for their contents: whatever bytes aren't valid UTF-8 are handled
//! according to a [`DecodePolicy`], and the resulting text is split into lines on the usual
//! universal line boundaries.

use anyhow::{Context, Result};
use std::path::Path;

/// What to do with byte sequences that aren't valid UTF-8
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Remove invalid sequences entirely
    #[default]
    DropInvalid,
    /// Substitute U+FFFD REPLACEMENT CHARACTER for each invalid sequence
    ReplaceInvalid,
}

impl DecodePolicy {
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            DecodePolicy::DropInvalid => {
                let mut text = String::with_capacity(bytes.len());
                for chunk in bytes.utf8_chunks() {
                    text.push_str(chunk.valid());
                }
                text
            }
            DecodePolicy::ReplaceInvalid => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// Read the whole file at `path` and decode it.
///
/// The file handle is closed before this returns, whether or not the read succeeded.
pub fn read_text(path: &Path, policy: DecodePolicy) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to open file '{}' for reading", path.display()))?;
    Ok(policy.decode(&bytes))
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines, without their terminators.
///
/// `\r\n` counts as a single break. A terminator at the very end doesn't start another (empty)
/// line, and empty text has no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::default();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                start = j + 1;
                chars.next();
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
