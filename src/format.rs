//! Per-field-type answer formatting.
//!
//! Pure functions from (field definition, captured value) to display text or
//! a table grid. Answer values arrive unvalidated; any shape the rules below
//! do not recognize renders as the placeholder dash rather than erroring.

use formdoc_layout::PLACEHOLDER_DASH;
use formdoc_schema::{FieldDefinition, FieldKind, IndexMap};
use itertools::Itertools;
use serde_json::Value;

/// Formatted content for one field: flowing text, or a grid for table fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedAnswer {
    Text(String),
    Grid {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Formats one answer according to its field's kind.
pub fn format_answer(field: &FieldDefinition, value: Option<&Value>) -> FormattedAnswer {
    match &field.kind {
        FieldKind::Boolean => {
            FormattedAnswer::Text(yes_no(matches!(value, Some(Value::Bool(true)))).to_string())
        }
        FieldKind::YesNo { .. } | FieldKind::TriState { .. } => {
            FormattedAnswer::Text(scalar_text(value))
        }
        FieldKind::MultiText => FormattedAnswer::Text(multi_text(value)),
        FieldKind::AuditFinding { .. } => FormattedAnswer::Text(audit_finding_text(value)),
        FieldKind::Object { properties } => FormattedAnswer::Text(object_text(properties, value)),
        FieldKind::Table { columns } => FormattedAnswer::Grid {
            headers: columns.iter().map(|c| c.label.clone()).collect(),
            rows: table_rows(columns, value),
        },
        FieldKind::Text
        | FieldKind::Tel
        | FieldKind::Date
        | FieldKind::Textarea
        | FieldKind::Unknown => FormattedAnswer::Text(scalar_text(value)),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Default rendering for a single value: trimmed strings, printed numbers,
/// Yes/No booleans; everything else is the dash.
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER_DASH.to_string(),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                PLACEHOLDER_DASH.to_string()
            } else {
                s.to_string()
            }
        }
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => yes_no(*b).to_string(),
        Some(_) => {
            log::debug!("non-scalar value where a scalar was expected, rendering as unanswered");
            PLACEHOLDER_DASH.to_string()
        }
    }
}

/// One entry of a multi-text list; nested shapes are dropped.
fn list_entry(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

fn multi_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => {
            let joined = items.iter().filter_map(list_entry).join(", ");
            if joined.is_empty() {
                PLACEHOLDER_DASH.to_string()
            } else {
                joined
            }
        }
        _ => PLACEHOLDER_DASH.to_string(),
    }
}

fn audit_finding_text(value: Option<&Value>) -> String {
    let (finding, evidence) = match value {
        Some(Value::Object(map)) => (trimmed_field(map, "finding"), trimmed_field(map, "evidenceText")),
        _ => (String::new(), String::new()),
    };
    if finding.is_empty() && evidence.is_empty() {
        return PLACEHOLDER_DASH.to_string();
    }
    if evidence.is_empty() {
        finding
    } else {
        let finding = if finding.is_empty() {
            PLACEHOLDER_DASH
        } else {
            finding.as_str()
        };
        format!("{finding} \u{2014} Evidence: {evidence}")
    }
}

fn trimmed_field(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Renders an object answer as one line per declared property, in
/// declaration order. Properties whose value renders empty are skipped.
fn object_text(properties: &IndexMap<String, FieldDefinition>, value: Option<&Value>) -> String {
    let empty = serde_json::Map::new();
    let answers = match value {
        Some(Value::Object(map)) => map,
        _ => &empty,
    };
    let lines = properties
        .keys()
        .filter_map(|key| property_line(key, answers.get(key)))
        .join("\n");
    if lines.is_empty() {
        PLACEHOLDER_DASH.to_string()
    } else {
        lines
    }
}

fn property_line(key: &str, value: Option<&Value>) -> Option<String> {
    let rendered = match value? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())?
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => yes_no(*b).to_string(),
        Value::Array(items) => {
            let joined = items.iter().filter_map(list_entry).join(", ");
            (!joined.is_empty()).then_some(joined)?
        }
        Value::Null | Value::Object(_) => return None,
    };
    Some(format!("{}: {}", humanize_key(key), rendered))
}

/// "firstName" -> "First name": camelCase boundaries become spaces, the
/// result is sentence-cased.
fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if prev_lower && c.is_uppercase() {
            out.push(' ');
        }
        prev_lower = c.is_lowercase();
        out.extend(c.to_lowercase());
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => out,
    }
}

fn table_rows(columns: &[FieldDefinition], value: Option<&Value>) -> Vec<Vec<String>> {
    let rows = match value {
        Some(Value::Array(rows)) => rows.as_slice(),
        _ => &[],
    };
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| cell_text(column, row.get(column.id.as_str())))
                .collect()
        })
        .collect()
}

fn cell_text(column: &FieldDefinition, value: Option<&Value>) -> String {
    match column.kind {
        FieldKind::MultiText => multi_text(value),
        _ => scalar_text(value),
    }
}
