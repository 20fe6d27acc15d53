use super::config::PageGeometry;
use super::encoding::encode_win_ansi;
use crate::sinks::Canvas;
use anyhow::{Context, Result};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use std::io::Write;

/// Resource name the body font is registered under on every page
const FONT_NAME: Name<'static> = Name(b"F1");
/// The standard font all text is set in
const BASE_FONT: Name<'static> = Name(b"Helvetica");

/// An in-memory PDF made of text-only pages.
///
/// Pages accumulate until [`PdfCanvas::write`] serializes the whole document in one go. The
/// current page is always included, so even a document nobody drew on has a single blank page.
pub struct PdfCanvas {
    geometry: PageGeometry,
    title: Option<String>,
    finished_pages: Vec<Vec<u8>>,
    current: Content,
}

impl PdfCanvas {
    pub fn new(geometry: PageGeometry) -> PdfCanvas {
        PdfCanvas {
            geometry,
            title: None,
            finished_pages: Vec::default(),
            current: Content::new(),
        }
    }

    pub fn set_title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Number of pages, counting the current one
    pub fn page_count(&self) -> usize {
        self.finished_pages.len() + 1
    }

    /// Assemble the PDF bytes
    pub fn finish(self) -> Vec<u8> {
        let PdfCanvas {
            geometry,
            title,
            mut finished_pages,
            current,
        } = self;
        finished_pages.push(current.finish());

        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let font_id = alloc.bump();
        let info_id = alloc.bump();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);

        let mut page_ids: Vec<Ref> = Vec::with_capacity(finished_pages.len());
        for stream in finished_pages.iter() {
            let page_id = alloc.bump();
            let content_id = alloc.bump();
            page_ids.push(page_id);

            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(
                0.0,
                0.0,
                geometry.page_width_pt,
                geometry.page_height_pt,
            ));
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
            page.finish();

            pdf.stream(content_id, stream);
        }

        let page_count = page_ids.len() as i32;
        pdf.pages(page_tree_id).kids(page_ids).count(page_count);

        pdf.type1_font(font_id)
            .base_font(BASE_FONT)
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let creator = concat!("repo-to-pdf v", env!("CARGO_PKG_VERSION"));
        let mut info = pdf.document_info(info_id);
        info.creator(TextStr(creator));
        info.producer(TextStr(creator));
        if let Some(title) = &title {
            info.title(TextStr(title));
        }
        info.finish();

        pdf.finish()
    }

    /// Serialize the document into `out`
    pub fn write<W: Write>(self, out: &mut W) -> Result<usize> {
        let bytes = self.finish();
        out.write_all(&bytes)
            .with_context(|| "Failed to write PDF contents")?;
        out.flush().with_context(|| "Failed to flush PDF contents")?;
        Ok(bytes.len())
    }
}

impl Canvas for PdfCanvas {
    fn draw_line(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
        let encoded = encode_win_ansi(text);
        self.current
            .begin_text()
            .set_font(FONT_NAME, self.geometry.font_size_pt)
            .next_line(x, y)
            .show(Str(&encoded))
            .end_text();
        Ok(())
    }

    fn next_page(&mut self) -> Result<()> {
        let page = std::mem::replace(&mut self.current, Content::new());
        self.finished_pages.push(page.finish());
        Ok(())
    }
}
