use crate::sinks::pdf::config::PageGeometry;
use crate::sinks::Canvas;
use anyhow::Result;

/// Where the next line goes.
///
/// `y` only ever moves down the page; when there isn't room for another line the page is
/// committed and `y` jumps back to the top of a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub page_width: f32,
    pub page_height: f32,
    pub line_height: f32,
    pub top_margin: f32,
}

impl Cursor {
    /// A cursor at the top of the first page
    pub fn new(geometry: &PageGeometry) -> Cursor {
        Cursor {
            x: geometry.margin_left_pt,
            y: geometry.top_baseline(),
            page_width: geometry.page_width_pt,
            page_height: geometry.page_height_pt,
            line_height: geometry.line_height_pt,
            top_margin: geometry.margin_top_pt,
        }
    }

    /// Whether there's no room left on this page for another line
    pub fn is_exhausted(&self) -> bool {
        self.y < self.line_height
    }

    /// Skip a line's worth of space without drawing anything.
    ///
    /// This never breaks the page; the next drawn line takes care of that if needed.
    pub fn skip_line(&mut self) {
        self.y -= self.line_height;
    }

    fn reset_to_top(&mut self) {
        self.y = self.page_height - self.top_margin;
    }

    /// Draw one line, starting a new page first if this one is full.
    ///
    /// Returns whether a page break happened.
    pub fn emit_line<C: Canvas>(&mut self, canvas: &mut C, text: &str) -> Result<bool> {
        let broke = self.is_exhausted();
        if broke {
            canvas.next_page()?;
            self.reset_to_top();
        }
        canvas.draw_line(self.x, self.y, text)?;
        self.y -= self.line_height;
        Ok(broke)
    }

    /// Draw every line in order, returning how many page breaks that took
    pub fn emit_lines<'a, C, I>(&mut self, canvas: &mut C, lines: I) -> Result<usize>
    where
        C: Canvas,
        I: IntoIterator<Item = &'a str>,
    {
        let mut breaks = 0;
        for line in lines {
            if self.emit_line(canvas, line)? {
                breaks += 1;
            }
        }
        Ok(breaks)
    }
}
