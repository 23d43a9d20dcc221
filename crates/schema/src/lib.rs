//! Form schema and answer-map data model.
//!
//! The wire format is the camelCase catalog JSON served by the form backend:
//! a catalog holds forms, a form holds ordered sections, a section holds
//! ordered field definitions. Field definitions are a closed, internally
//! tagged sum over the `"type"` key. Everything here is plain data — the
//! renderer treats a loaded schema as immutable for the duration of a build.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use indexmap::IndexMap;

/// The kind of a field, discriminated by the `"type"` tag.
///
/// Table columns and object properties reuse [`FieldDefinition`]; in practice
/// the backend restricts them to the scalar/list kinds, but nothing in the
/// renderer depends on that restriction.
///
/// `Unknown` absorbs tags this build has never seen, so a newer catalog still
/// deserializes; such fields take the default scalar rendering path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Tel,
    Date,
    Textarea,
    Boolean,
    MultiText,
    YesNo {
        #[serde(default)]
        options: Vec<String>,
    },
    TriState {
        #[serde(default)]
        options: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    AuditFinding {
        #[serde(default)]
        finding_options: Vec<String>,
        #[serde(default)]
        evidence: Option<EvidencePolicy>,
    },
    Table {
        columns: Vec<FieldDefinition>,
    },
    Object {
        properties: IndexMap<String, FieldDefinition>,
    },
    #[serde(other)]
    Unknown,
}

/// Whether an audit finding demands supporting evidence text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvidencePolicy {
    #[serde(default)]
    pub required: bool,
}

/// One question in a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// An ordered group of fields; one tab of the filling UI, one heading in the
/// rendered report. Section order drives question numbering and draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
}

/// Provenance of a form: where its question set came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub id: String,
    pub title: String,
    pub source: SourceInfo,
    /// Authoring-side difficulty rating carried through the catalog; the
    /// renderer ignores it.
    #[serde(default)]
    pub complexity_level: u32,
    pub sections: Vec<Section>,
}

impl FormSchema {
    /// Total number of fields across all sections — the last question number.
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

/// The on-disk catalog document the form backend serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormsCatalog {
    pub schema_version: String,
    pub forms: Vec<FormSchema>,
}

impl FormsCatalog {
    pub fn form(&self, id: &str) -> Option<&FormSchema> {
        self.forms.iter().find(|f| f.id == id)
    }
}

/// Captured answers, keyed by field id. Values are whatever the filling UI
/// submitted; the renderer validates nothing and tolerates any shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(pub serde_json::Map<String, Value>);

impl AnswerMap {
    pub fn get(&self, field_id: &str) -> Option<&Value> {
        self.0.get(field_id)
    }

    pub fn insert(&mut self, field_id: impl Into<String>, value: Value) {
        self.0.insert(field_id.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
