//! # formdoc
//!
//! Renders a user's answers to a schema-driven form into a paginated PDF
//! report. The heavy lifting is split across the member crates:
//!
//! - **formdoc-schema**: the form/answer data model and catalog JSON shape
//! - **formdoc-layout**: font metrics, text wrapping, page flow, table layout
//! - **formdoc-render-lopdf**: PDF serialization via `lopdf`
//!
//! This crate is the integration layer: the per-field-type answer formatter
//! and the document assembler that walks a schema and produces bytes.
//!
//! ```no_run
//! use formdoc::{AnswerMap, FormSchema, build_report};
//!
//! # fn load() -> (FormSchema, AnswerMap) { unimplemented!() }
//! let (schema, answers) = load();
//! let bytes = build_report(&schema, &answers)?;
//! std::fs::write(format!("{}.pdf", schema.id), bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export member crates
pub use formdoc_layout as layout;
pub use formdoc_render_lopdf as render;
pub use formdoc_schema as schema;

pub mod error;
pub mod format;
pub mod report;

pub use error::BuildError;
pub use format::{FormattedAnswer, format_answer};
pub use report::build_report;

// Re-export the types callers hand to a build
pub use formdoc_layout::{LayoutConfig, PLACEHOLDER_DASH};
pub use formdoc_schema::{
    AnswerMap, EvidencePolicy, FieldDefinition, FieldKind, FormSchema, FormsCatalog, Section,
    SourceInfo,
};
