//! Rendering of a single file's section.
//!
//! A section is the file's relative path as a title, an underline of `=` the same length as the
//! title, a blank line, every line of the file, and a final blank line.

use super::cursor::Cursor;
use crate::sinks::Canvas;
use crate::source::split_lines;
use anyhow::Result;

/// Result of rendering a single file's section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionResult {
    /// Number of lines drawn, including the title and underline
    pub line_count: usize,
    /// Number of page breaks taken while drawing the section
    pub page_breaks: usize,
}

/// The `=` underline drawn beneath a title, one per character
pub fn underline(title: &str) -> String {
    "=".repeat(title.chars().count())
}

pub fn render<C: Canvas>(
    canvas: &mut C,
    cursor: &mut Cursor,
    title: &str,
    contents: &str,
) -> Result<SectionResult> {
    let underline = underline(title);
    let mut page_breaks = cursor.emit_lines(canvas, [title, underline.as_str()])?;
    cursor.skip_line();

    let lines = split_lines(contents);
    page_breaks += cursor.emit_lines(canvas, lines.iter().copied())?;
    cursor.skip_line();

    Ok(SectionResult {
        line_count: lines.len() + 2,
        page_breaks,
    })
}
