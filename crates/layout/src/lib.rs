//! Layout engine for form reports.
//!
//! Everything here is geometry: measuring text against font metrics, wrapping
//! it into lines, flowing blocks down a page with explicit break checks, and
//! sizing table grids. The output is a list of pages of positioned elements
//! in PDF user space; serializing those to an actual document is the render
//! crate's job.
//!
//! No state is shared between builds — a [`PageFlow`] owns its cursor and
//! page list for exactly one document.

pub mod config;
pub mod flow;
pub mod fonts;
pub mod table;
pub mod wrap;

pub use self::config::LayoutConfig;
pub use self::flow::{Element, Page, PageFlow, TextStyle};
pub use self::fonts::{FontError, FontLibrary, FontMetrics, FontRole};
pub use self::table::{TableLayout, draw_table};
pub use self::wrap::wrap_text;

/// The fixed glyph rendered wherever a value is absent.
pub const PLACEHOLDER_DASH: &str = "\u{2014}";
