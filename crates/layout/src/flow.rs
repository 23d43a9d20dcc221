//! Page flow: cursor tracking, space reservation, page breaks.

use crate::config::LayoutConfig;
use crate::fonts::FontRole;

/// Font selection for one positioned text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub role: FontRole,
    pub size: f32,
}

/// One positioned element on a page, in PDF user space (origin bottom-left,
/// text y is the baseline).
#[derive(Debug, Clone)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
    },
}

pub type Page = Vec<Element>;

/// Tracks the draw cursor for one build and triggers page breaks.
///
/// Drawing is append-only: once an element is placed there is no re-flow.
/// Callers reserve space with [`ensure_space`](Self::ensure_space) before
/// drawing a block, which is what keeps blocks from straddling a break. The
/// cursor strictly decreases between breaks and resets to the top margin on
/// each new page.
pub struct PageFlow<'a> {
    config: &'a LayoutConfig,
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> PageFlow<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            current: Page::new(),
            y: config.page_height - config.margin,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        self.config
    }

    /// Current vertical cursor position, measured from the page bottom.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Pages started so far, the in-progress one included.
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Breaks the page if fewer than `needed` points remain above the bottom
    /// margin. The check happens once — content taller than a whole page is
    /// drawn anyway and overflows, which is the documented behavior for
    /// oversized table rows.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < self.config.margin {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.config.page_height - self.config.margin;
        log::debug!("page break, starting page {}", self.page_count());
    }

    /// Places text at the cursor and advances by the fixed line step.
    pub fn draw_line(&mut self, text: &str, style: TextStyle) {
        self.draw_text(text, style);
        self.y -= self.config.line_step;
    }

    /// Places text at the cursor without advancing; callers apply their own
    /// spacing via [`advance`](Self::advance).
    pub fn draw_text(&mut self, text: &str, style: TextStyle) {
        self.current.push(Element::Text {
            x: self.config.margin,
            y: self.y,
            text: text.to_string(),
            style,
        });
    }

    /// Places text at an absolute position (table cells).
    pub fn draw_text_at(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
        self.current.push(Element::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
    }

    /// Places a stroked rectangle (cell borders).
    pub fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.current.push(Element::Rect {
            x,
            y,
            width,
            height,
            line_width: 1.0,
        });
    }

    /// Moves the cursor down by `dy`.
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Finalizes the build and returns all pages in order.
    pub fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> TextStyle {
        TextStyle {
            role: FontRole::Regular,
            size: 11.0,
        }
    }

    #[test]
    fn test_cursor_starts_at_top_margin() {
        let config = LayoutConfig::default();
        let flow = PageFlow::new(&config);
        assert_eq!(flow.y(), config.page_height - config.margin);
        assert_eq!(flow.page_count(), 1);
    }

    #[test]
    fn test_draw_line_advances_by_line_step() {
        let config = LayoutConfig::default();
        let mut flow = PageFlow::new(&config);
        let before = flow.y();
        flow.draw_line("first", style());
        flow.draw_line("second", style());
        assert_eq!(flow.y(), before - 2.0 * config.line_step);
    }

    #[test]
    fn test_ensure_space_is_a_noop_when_content_fits() {
        let config = LayoutConfig::default();
        let mut flow = PageFlow::new(&config);
        flow.ensure_space(100.0);
        assert_eq!(flow.page_count(), 1);
        assert_eq!(flow.y(), config.page_height - config.margin);
    }

    #[test]
    fn test_ensure_space_breaks_and_resets_cursor() {
        let config = LayoutConfig::default();
        let mut flow = PageFlow::new(&config);
        flow.advance(config.content_height() - 20.0);
        flow.ensure_space(40.0);
        assert_eq!(flow.page_count(), 2);
        assert_eq!(flow.y(), config.page_height - config.margin);
    }

    #[test]
    fn test_elements_land_on_the_page_that_was_current() {
        let config = LayoutConfig::default();
        let mut flow = PageFlow::new(&config);
        flow.draw_line("page one", style());
        flow.advance(config.content_height());
        flow.ensure_space(config.line_step);
        flow.draw_line("page two", style());
        let pages = flow.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 1);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn test_cursor_strictly_decreases_between_breaks() {
        let config = LayoutConfig::default();
        let mut flow = PageFlow::new(&config);
        let mut last = flow.y();
        for _ in 0..10 {
            flow.draw_line("row", style());
            assert!(flow.y() < last);
            last = flow.y();
        }
    }
}
