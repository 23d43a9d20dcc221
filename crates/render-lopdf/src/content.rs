//! Translation of positioned elements into PDF content-stream operations.

use formdoc_layout::fonts::encode_win_ansi;
use formdoc_layout::{Element, FontRole, Page};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Content-stream resource names for the two registered faces.
pub(crate) struct FontResources {
    pub regular: String,
    pub bold: String,
}

impl FontResources {
    fn resource_name(&self, role: FontRole) -> &str {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Bold => &self.bold,
        }
    }
}

/// Builds one page's content stream. Font and stroke parameters are part of
/// the graphics state and survive across `BT`/`ET`, so they are re-emitted
/// only when an element actually changes them.
pub(crate) fn page_content(page: &Page, fonts: &FontResources) -> Content {
    let mut ctx = PageContext {
        content: Content { operations: vec![] },
        fonts,
        font_name: String::new(),
        font_size: 0.0,
        line_width: 0.0,
    };
    for element in page {
        ctx.draw(element);
    }
    ctx.content
}

struct PageContext<'a> {
    content: Content,
    fonts: &'a FontResources,
    font_name: String,
    font_size: f32,
    line_width: f32,
}

impl PageContext<'_> {
    fn draw(&mut self, element: &Element) {
        match element {
            Element::Text { x, y, text, style } => {
                if text.is_empty() {
                    return;
                }
                self.content.operations.push(Operation::new("BT", vec![]));
                self.set_font(self.fonts.resource_name(style.role).to_string(), style.size);
                self.content
                    .operations
                    .push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
                self.content.operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ));
                self.content.operations.push(Operation::new("ET", vec![]));
            }
            Element::Rect {
                x,
                y,
                width,
                height,
                line_width,
            } => {
                if self.line_width != *line_width {
                    self.content
                        .operations
                        .push(Operation::new("w", vec![(*line_width).into()]));
                    self.line_width = *line_width;
                }
                self.content.operations.push(Operation::new(
                    "re",
                    vec![(*x).into(), (*y).into(), (*width).into(), (*height).into()],
                ));
                self.content.operations.push(Operation::new("S", vec![]));
            }
        }
    }

    fn set_font(&mut self, name: String, size: f32) {
        if self.font_name != name || self.font_size != size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), size.into()],
            ));
            self.font_name = name;
            self.font_size = size;
        }
    }
}
