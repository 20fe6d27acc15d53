use derive_builder::Builder;

/// Width of an A4 page in points
pub const A4_WIDTH_PT: f32 = 595.2756;
/// Height of an A4 page in points
pub const A4_HEIGHT_PT: f32 = 841.8898;

/// Page layout policy.
///
/// These are fixed for generated documents; the builder exists so that layouts can be exercised
/// on other page sizes.
#[derive(Builder, Debug, Clone, Copy, PartialEq)]
#[builder(default)]
pub struct PageGeometry {
    /// Page width in points
    pub page_width_pt: f32,
    /// Page height in points
    pub page_height_pt: f32,
    /// Horizontal offset of every line from the left edge
    pub margin_left_pt: f32,
    /// Distance from the top edge to the first baseline of a page
    pub margin_top_pt: f32,
    /// Vertical advance per line
    pub line_height_pt: f32,
    /// Text size
    pub font_size_pt: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry {
            page_width_pt: A4_WIDTH_PT,
            page_height_pt: A4_HEIGHT_PT,
            margin_left_pt: 40.0,
            margin_top_pt: 40.0,
            line_height_pt: 12.0,
            font_size_pt: 12.0,
        }
    }
}

impl PageGeometry {
    /// Baseline of the first line on every page
    pub fn top_baseline(&self) -> f32 {
        self.page_height_pt - self.margin_top_pt
    }
}

/// Statistics from rendering a PDF, used for user feedback.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of files that made it into the document
    pub file_count: usize,
    /// Files left out because they couldn't be read
    pub skipped_count: usize,
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Size of the written PDF
    pub byte_count: u64,
}
