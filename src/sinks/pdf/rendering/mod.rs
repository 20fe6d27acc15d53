//! Laying out repository files onto pages.
//!
//! Every file becomes one section (see [`source_file`]) drawn through a single [`Cursor`] that
//! runs across the whole document, so a section starts wherever the previous one ended. Pages
//! only break when a line is about to be drawn with less than a line's height of room left.
//!
//! The render function accepts a progress bar from the caller, updating it with the current
//! file name and incrementing after each file is processed.

mod cursor;
mod source_file;

use cursor::Cursor;

use crate::sinks::pdf::config::{PageGeometry, RenderStats};
use crate::sinks::Canvas;
use crate::source::{read_text, DecodePolicy, FileEntry};
use anyhow::{Context, Result};
use indicatif::ProgressBar;

/// How files are read while rendering
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderOptions {
    pub decode: DecodePolicy,
    /// Leave out files that can't be read rather than failing the whole render
    pub skip_unreadable: bool,
}

/// Render every file, in order, onto `canvas`.
///
/// The returned stats count files and pages; the byte count is left for whoever writes the
/// document out.
pub fn render_files<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    files: &[FileEntry],
    options: RenderOptions,
    progress: &ProgressBar,
) -> Result<RenderStats> {
    let mut cursor = Cursor::new(geometry);
    let mut stats = RenderStats {
        page_count: 1,
        ..RenderStats::default()
    };

    for file in files.iter() {
        progress.set_message(file.relative_path.clone());

        let contents = match read_text(&file.path, options.decode) {
            Ok(contents) => contents,
            Err(e) if options.skip_unreadable => {
                log::warn!("Skipping {}: {e:#}", file.relative_path);
                stats.skipped_count += 1;
                progress.inc(1);
                continue;
            }
            Err(e) => return Err(e),
        };

        let section = source_file::render(canvas, &mut cursor, &file.relative_path, &contents)
            .with_context(|| format!("Failed to render source file {}!", file.relative_path))?;
        log::debug!(
            "Rendered {} ({} lines, {} page breaks)",
            file.relative_path,
            section.line_count,
            section.page_breaks
        );

        stats.file_count += 1;
        stats.page_count += section.page_breaks;
        progress.inc(1);
    }

    Ok(stats)
}
