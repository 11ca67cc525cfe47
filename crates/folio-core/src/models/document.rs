use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::field::FieldValue;
use super::template::TemplateKind;
use crate::form::DocumentForm;

/// Named field values of one template, ordered by key.
pub type FieldValues = BTreeMap<String, FieldValue>;

/// The persisted snapshot of one save action.
///
/// Serialized with the template fields flattened next to the record
/// metadata, so a stored record reads as one plain object:
/// `{"id": .., "type": "annual_report", "title": .., "createdAt": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Time-ordered (v7) id, unique per save.
    pub id: Uuid,
    #[serde(rename = "type")]
    pub doc_type: TemplateKind,
    #[serde(flatten)]
    pub fields: FieldValues,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl DocumentRecord {
    /// Capture the current values of a form as a new record.
    ///
    /// Every call yields a distinct id; saving unchanged values twice
    /// produces two records.
    pub fn snapshot(form: &DocumentForm) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::now_v7(),
            doc_type: form.kind(),
            fields: form.values().clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
