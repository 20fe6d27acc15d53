mod config;
mod document;
mod encoding;
mod rendering;

pub use config::{PageGeometry, RenderStats};
pub use rendering::RenderOptions;

use document::PdfCanvas;
use rendering::render_files;

use crate::source::FileEntry;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::Write;

/// PDF output for a repository
#[derive(Debug, Default, Clone)]
pub struct PDF {
    pub geometry: PageGeometry,
    pub options: RenderOptions,
    /// Document title, shown by viewers under the document properties
    pub title: Option<String>,
}

impl PDF {
    /// Render `files` into a PDF and write it to `out` in one go
    pub fn render<W: Write>(
        &self,
        files: &[FileEntry],
        out: &mut W,
        progress: &ProgressBar,
    ) -> Result<RenderStats> {
        let mut canvas = PdfCanvas::new(self.geometry);
        if let Some(title) = &self.title {
            canvas.set_title(title);
        }

        let mut stats = render_files(&mut canvas, &self.geometry, files, self.options, progress)?;
        debug_assert_eq!(stats.page_count, canvas.page_count());

        let written = canvas.write(out).with_context(|| "Failed to render PDF")?;
        stats.byte_count = written as u64;
        log::info!(
            "Wrote {} pages ({} bytes) for {} files",
            stats.page_count,
            stats.byte_count,
            stats.file_count
        );

        Ok(stats)
    }
}
