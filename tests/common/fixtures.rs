use formdoc::schema::IndexMap;
use formdoc::{
    AnswerMap, FieldDefinition, FieldKind, FormSchema, Section, SourceInfo,
};
use serde_json::Value;

pub fn form(id: &str, title: &str, sections: Vec<Section>) -> FormSchema {
    FormSchema {
        id: id.to_string(),
        title: title.to_string(),
        source: SourceInfo {
            name: "Internal Audit Programme".to_string(),
            kind: "compliance".to_string(),
            evidence: String::new(),
        },
        complexity_level: 1,
        sections,
    }
}

pub fn section(id: &str, title: &str, fields: Vec<FieldDefinition>) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        fields,
    }
}

fn field(id: &str, label: &str, kind: FieldKind) -> FieldDefinition {
    FieldDefinition {
        id: id.to_string(),
        label: label.to_string(),
        required: false,
        kind,
    }
}

pub fn text_field(id: &str, label: &str) -> FieldDefinition {
    field(id, label, FieldKind::Text)
}

pub fn textarea_field(id: &str, label: &str) -> FieldDefinition {
    field(id, label, FieldKind::Textarea)
}

pub fn boolean_field(id: &str, label: &str) -> FieldDefinition {
    field(id, label, FieldKind::Boolean)
}

pub fn multi_text_field(id: &str, label: &str) -> FieldDefinition {
    field(id, label, FieldKind::MultiText)
}

pub fn table_field(id: &str, label: &str, columns: Vec<FieldDefinition>) -> FieldDefinition {
    field(id, label, FieldKind::Table { columns })
}

pub fn object_field(
    id: &str,
    label: &str,
    properties: Vec<(&str, FieldDefinition)>,
) -> FieldDefinition {
    let properties: IndexMap<String, FieldDefinition> = properties
        .into_iter()
        .map(|(key, prop)| (key.to_string(), prop))
        .collect();
    field(id, label, FieldKind::Object { properties })
}

/// Answers built from a `json!` object literal
pub fn answers(value: Value) -> AnswerMap {
    serde_json::from_value(value).expect("answer fixture is a JSON object")
}
