//! PDF backend: serializes laid-out pages into a byte buffer with `lopdf`.
//!
//! The layout crate hands over pages of positioned elements already in PDF
//! user space, so this crate only translates them into content-stream
//! operations and assembles the document skeleton (page tree, resources,
//! catalog). Fonts are the standard-14 Helvetica faces referenced as Type1
//! resources with WinAnsiEncoding; nothing is embedded.

mod content;
mod error;
mod writer;

pub use self::error::RenderError;
pub use self::writer::{DocumentWriter, render_pages};
