//! Unified error type for a report build.

use formdoc_layout::FontError;
use formdoc_render_lopdf::RenderError;
use thiserror::Error;

/// A build either returns complete bytes or fails outright — there is no
/// partial output. Malformed answer data is never an error; it degrades to
/// placeholder text during formatting.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A built-in resource failed to load before any page was produced.
    #[error("resource error: {0}")]
    Resource(#[from] FontError),
    /// The finished layout could not be serialized.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
