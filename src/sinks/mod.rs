use anyhow::Result;

pub mod pdf;

/// A paginated drawing surface.
///
/// There is always a current page. Coordinates are in points with the origin at the bottom
/// left of the page, as in PDF.
pub trait Canvas {
    /// Draw a single line of text with its baseline starting at `(x, y)` on the current page
    fn draw_line(&mut self, x: f32, y: f32, text: &str) -> Result<()>;

    /// Commit the current page and start a fresh, empty one
    fn next_page(&mut self) -> Result<()>;
}
