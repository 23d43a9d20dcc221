//! Greedy word wrapping against measured glyph widths.

use crate::fonts::FontMetrics;

/// Wraps `text` into lines no wider than `max_width` points at `size`.
///
/// Explicit line breaks (object and table formatting emit them) are honored
/// first; each segment wraps independently. Within a segment the fill is
/// greedy: a word joins the current line while the measured width of
/// "line + space + word" stays within `max_width`. A single word wider than
/// `max_width` gets a line of its own and is allowed to overflow — nothing is
/// ever truncated or hyphenated.
pub fn wrap_text(text: &str, max_width: f32, metrics: &dyn FontMetrics, size: f32) -> Vec<String> {
    text.split('\n')
        .flat_map(|segment| wrap_segment(segment, max_width, metrics, size))
        .collect()
}

fn wrap_segment(
    segment: &str,
    max_width: f32,
    metrics: &dyn FontMetrics,
    size: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in segment.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if metrics.measure(&candidate, size) <= max_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(line);
            }
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
