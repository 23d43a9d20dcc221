//! Table layout and drawing: a header row plus a data grid with per-row
//! dynamic heights, paginated row by row.

use crate::PLACEHOLDER_DASH;
use crate::config::LayoutConfig;
use crate::flow::{PageFlow, TextStyle};
use crate::fonts::{FontLibrary, FontMetrics, FontRole};
use crate::wrap::wrap_text;

/// Per-table scratch geometry, derived in a measure pass and discarded after
/// drawing. Columns share one equal width; `row_heights[0]` is the header.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub col_width: f32,
    pub row_heights: Vec<f32>,
}

impl TableLayout {
    pub fn measure(
        fonts: &FontLibrary,
        config: &LayoutConfig,
        headers: &[String],
        rows: &[Vec<String>],
        available_width: f32,
    ) -> Self {
        let cols = headers.len().max(1);
        let col_width = (available_width / cols as f32).floor();

        let mut row_heights = Vec::with_capacity(rows.len() + 1);
        row_heights.push(row_height(
            fonts.metrics(FontRole::Bold),
            config,
            headers,
            cols,
            col_width,
        ));
        for row in rows {
            row_heights.push(row_height(
                fonts.metrics(FontRole::Regular),
                config,
                row,
                cols,
                col_width,
            ));
        }
        Self {
            col_width,
            row_heights,
        }
    }
}

/// Tallest cell decides: `2 x padding + max lines x cell line step`.
fn row_height(
    metrics: &dyn FontMetrics,
    config: &LayoutConfig,
    cells: &[String],
    cols: usize,
    col_width: f32,
) -> f32 {
    let wrap_width = col_width - 2.0 * config.table_pad_x;
    let mut max_lines = 1usize;
    for c in 0..cols {
        let lines = wrap_text(cell_text(cells, c), wrap_width, metrics, config.table_size).len();
        max_lines = max_lines.max(lines.max(1));
    }
    2.0 * config.table_pad_y + max_lines as f32 * config.cell_line_step()
}

fn cell_text(cells: &[String], index: usize) -> &str {
    match cells.get(index) {
        Some(cell) if !cell.is_empty() => cell,
        _ => PLACEHOLDER_DASH,
    }
}

/// Draws a bordered table at the flow cursor.
///
/// Each row reserves its own height before drawing, so a long table runs
/// across pages while no single row ever straddles a break. The header draws
/// once, bold, and is not repeated on continuation pages. A row taller than a
/// whole page still prints in one piece and overflows the bottom margin;
/// that is accepted, not an error.
pub fn draw_table(
    flow: &mut PageFlow,
    fonts: &FontLibrary,
    headers: &[String],
    rows: &[Vec<String>],
    available_width: f32,
) {
    let config = *flow.config();
    let layout = TableLayout::measure(fonts, &config, headers, rows, available_width);
    let cols = headers.len().max(1);

    if rows.is_empty() {
        log::debug!("table has no data rows, drawing header only");
    }

    draw_row(flow, fonts, &config, headers, cols, &layout, 0, FontRole::Bold);
    for (i, row) in rows.iter().enumerate() {
        draw_row(flow, fonts, &config, row, cols, &layout, i + 1, FontRole::Regular);
    }
    flow.advance(config.table_row_gap);
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    flow: &mut PageFlow,
    fonts: &FontLibrary,
    config: &LayoutConfig,
    cells: &[String],
    cols: usize,
    layout: &TableLayout,
    row_index: usize,
    role: FontRole,
) {
    let metrics = fonts.metrics(role);
    let row_h = layout.row_heights[row_index];
    flow.ensure_space(row_h + config.table_row_gap);

    let y_top = flow.y();
    let y_bottom = y_top - row_h;
    let style = TextStyle {
        role,
        size: config.table_size,
    };
    let wrap_width = layout.col_width - 2.0 * config.table_pad_x;

    for c in 0..cols {
        let x = config.margin + c as f32 * layout.col_width;
        flow.draw_rect(x, y_bottom, layout.col_width, row_h);

        let lines = wrap_text(cell_text(cells, c), wrap_width, metrics, config.table_size);
        let mut ty = y_top - config.table_pad_y - config.table_size;
        for line in &lines {
            flow.draw_text_at(x + config.table_pad_x, ty, line, style);
            ty -= config.cell_line_step();
        }
    }

    flow.advance(row_h);
}
