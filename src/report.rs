//! The document assembler: drives formatting, wrapping, and page flow for a
//! whole form, then serializes the result.

use formdoc_layout::{
    FontLibrary, FontRole, LayoutConfig, PageFlow, TextStyle, draw_table, wrap_text,
};
use formdoc_render_lopdf::render_pages;
use formdoc_schema::{AnswerMap, FormSchema};

use crate::error::BuildError;
use crate::format::{FormattedAnswer, format_answer};

/// Renders a filled form into a complete PDF byte buffer.
///
/// The font metrics load first; that is the only failure point before
/// serialization, and it aborts the build with no partial output. Everything
/// after it is deterministic layout over the schema's section/field order.
/// Each call owns its cursor and buffers, so concurrent builds need no
/// coordination. The `"<form id>.pdf"` filename convention is the caller's.
pub fn build_report(schema: &FormSchema, answers: &AnswerMap) -> Result<Vec<u8>, BuildError> {
    let fonts = FontLibrary::load()?;
    let config = LayoutConfig::default();
    let max_width = config.content_width();

    let bold = TextStyle {
        role: FontRole::Bold,
        size: config.body_size,
    };
    let regular = TextStyle {
        role: FontRole::Regular,
        size: config.body_size,
    };

    let mut flow = PageFlow::new(&config);

    // Title block.
    flow.ensure_space(40.0);
    flow.draw_text(
        &schema.title,
        TextStyle {
            role: FontRole::Bold,
            size: config.title_size,
        },
    );
    flow.advance(22.0);
    let meta = TextStyle {
        role: FontRole::Regular,
        size: config.meta_size,
    };
    flow.draw_text(&format!("Form ID: {}", schema.id), meta);
    flow.advance(14.0);
    flow.draw_text(
        &format!("Source: {} ({})", schema.source.name, schema.source.kind),
        meta,
    );
    flow.advance(22.0);

    // One counter across every section; page breaks never reset it.
    let mut question_number = 1u32;

    for section in &schema.sections {
        flow.ensure_space(22.0);
        flow.draw_text(
            &section.title,
            TextStyle {
                role: FontRole::Bold,
                size: config.section_size,
            },
        );
        flow.advance(18.0);

        for field in &section.fields {
            let question = format!("{}. {}", question_number, field.label);
            let question_lines = wrap_text(
                &question,
                max_width,
                fonts.metrics(FontRole::Bold),
                config.body_size,
            );

            match format_answer(field, answers.get(&field.id)) {
                FormattedAnswer::Grid { headers, rows } => {
                    flow.ensure_space(block_height(&question_lines, &config));
                    for line in &question_lines {
                        flow.draw_line(line, bold);
                    }
                    draw_table(&mut flow, &fonts, &headers, &rows, max_width);
                }
                FormattedAnswer::Text(answer) => {
                    let answer_lines = wrap_text(
                        &answer,
                        max_width,
                        fonts.metrics(FontRole::Regular),
                        config.body_size,
                    );
                    // Question and answer are one block: reserve the pair
                    // before drawing either, so they only separate from the
                    // preceding content, never from each other.
                    flow.ensure_space(
                        block_height(&question_lines, &config) + block_height(&answer_lines, &config),
                    );
                    for line in &question_lines {
                        flow.draw_line(line, bold);
                    }
                    for line in &answer_lines {
                        flow.draw_line(line, regular);
                    }
                    flow.advance(config.block_gap);
                }
            }
            question_number += 1;
        }
        flow.advance(config.section_gap);
    }

    let pages = flow.finish();
    log::debug!(
        "report '{}': {} questions across {} pages",
        schema.id,
        question_number - 1,
        pages.len()
    );
    render_pages(&pages, &config, &fonts).map_err(Into::into)
}

fn block_height(lines: &[String], config: &LayoutConfig) -> f32 {
    lines.len() as f32 * config.line_step + config.block_gap
}
