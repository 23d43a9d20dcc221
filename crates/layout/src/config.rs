/// Fixed geometry and typography for a report build.
///
/// Page dimensions and margins hold for the whole document; there is no
/// per-page master. All values are PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// Uniform margin on all four sides. The content area is everything
    /// inside it; `ensure_space` breaks a page when the cursor would cross
    /// the bottom margin.
    pub margin: f32,
    /// Vertical advance of one body line of text.
    pub line_step: f32,
    pub title_size: f32,
    pub meta_size: f32,
    pub section_size: f32,
    pub body_size: f32,
    pub table_size: f32,
    /// Horizontal inset between a cell border and its text.
    pub table_pad_x: f32,
    /// Vertical inset above the first and below the last line of a cell.
    pub table_pad_y: f32,
    /// Spacing reserved below each table row, and left after the table.
    pub table_row_gap: f32,
    /// Gap after a question/answer block.
    pub block_gap: f32,
    /// Gap after the last field of a section.
    pub section_gap: f32,
}

impl LayoutConfig {
    /// Width available to content between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Height available to content between the top and bottom margins.
    pub fn content_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Vertical advance of one line inside a table cell.
    pub fn cell_line_step(&self) -> f32 {
        self.table_size + 5.0
    }
}

impl Default for LayoutConfig {
    /// US Letter with the report typography the form backend expects.
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 48.0,
            line_step: 14.0,
            title_size: 16.0,
            meta_size: 10.0,
            section_size: 12.0,
            body_size: 11.0,
            table_size: 10.0,
            table_pad_x: 6.0,
            table_pad_y: 5.0,
            table_row_gap: 8.0,
            block_gap: 6.0,
            section_gap: 8.0,
        }
    }
}
