//! The in-memory working copy a template screen edits.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::list::{ListEditor, has_unique_ids};
use crate::models::document::{DocumentRecord, FieldValues};
use crate::models::field::{FieldValue, ListItem};
use crate::models::template::{FieldSpec, TemplateKind, TemplateSchema};

/// Current field values of one template, always holding every schema key
/// with a value of the shape the schema declares.
#[derive(Debug, Clone)]
pub struct DocumentForm {
    schema: TemplateSchema,
    values: FieldValues,
}

/// The metadata block printed at the top of an exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub title: String,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub company: Option<String>,
}

impl DocumentForm {
    /// A form pre-filled with the template's built-in defaults.
    pub fn new(kind: TemplateKind) -> Self {
        let schema = kind.schema();
        let values = schema
            .fields
            .iter()
            .map(|spec| (spec.key.clone(), spec.default.clone()))
            .collect();
        Self { schema, values }
    }

    /// Rebuild a form from a stored record. Keys the template no longer
    /// declares are dropped, missing keys keep their defaults, and so do
    /// lists whose item ids repeat.
    pub fn from_record(record: &DocumentRecord) -> Self {
        let mut form = Self::new(record.doc_type);
        for spec in &form.schema.fields {
            if let Some(value) = record.fields.get(&spec.key)
                && shape_matches(spec, value)
            {
                form.values.insert(spec.key.clone(), value.clone());
            }
        }
        form
    }

    pub fn kind(&self) -> TemplateKind {
        self.schema.kind
    }

    pub fn schema(&self) -> &TemplateSchema {
        &self.schema
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(FieldValue::as_text)
    }

    pub fn items(&self, key: &str) -> Option<&[ListItem]> {
        self.values.get(key).and_then(FieldValue::as_items)
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<(), CoreError> {
        if self.spec(key)?.kind.is_list() {
            return Err(CoreError::FieldKindMismatch {
                key: key.to_string(),
                expected: "text",
            });
        }
        self.values
            .insert(key.to_string(), FieldValue::Text(value.into()));
        Ok(())
    }

    /// Editor over the items of a list field.
    pub fn list_mut(&mut self, key: &str) -> Result<ListEditor<'_, ListItem>, CoreError> {
        if !self.spec(key)?.kind.is_list() {
            return Err(list_mismatch(key));
        }
        match self.values.get_mut(key) {
            Some(FieldValue::Items(items)) => Ok(ListEditor::new(items)),
            _ => Err(list_mismatch(key)),
        }
    }

    /// Append an item to a list field with the given sub-field values.
    /// The item gets the list's palette colours and initial status.
    /// Returns the new item's id.
    pub fn add_item(&mut self, key: &str, values: &[(&str, &str)]) -> Result<u64, CoreError> {
        let kind = self.spec(key)?.kind.clone();
        let mut editor = self.list_mut(key)?;
        editor
            .add(|id| {
                let mut item = kind.blank_item(id).unwrap_or_else(|| ListItem::new(id));
                for (k, v) in values {
                    item.values.insert(k.to_string(), v.to_string());
                }
                item
            })
            .ok_or_else(|| CoreError::IdsExhausted {
                key: key.to_string(),
            })
    }

    /// Copy every schema field found in `data` whose value has the shape the
    /// schema declares. Unknown keys, mis-shaped values and lists with
    /// repeated item ids are ignored, so the affected fields keep their
    /// current values. Returns how many
    /// fields were applied.
    pub fn apply_hydrated(&mut self, data: &Map<String, Value>) -> usize {
        let mut applied = 0;
        for spec in &self.schema.fields {
            let Some(raw) = data.get(&spec.key) else {
                continue;
            };
            let Ok(value) = serde_json::from_value::<FieldValue>(raw.clone()) else {
                continue;
            };
            if shape_matches(spec, &value) {
                self.values.insert(spec.key.clone(), value);
                applied += 1;
            }
        }
        applied
    }

    /// Header metadata taken from the conventional `title`, `subtitle`,
    /// `author`, `date` and `company` fields. Blank values are omitted and
    /// a blank title falls back to the template label.
    pub fn header(&self) -> DocumentHeader {
        let non_blank = |key: &str| {
            self.text(key)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        DocumentHeader {
            title: non_blank("title").unwrap_or_else(|| self.kind().label().to_string()),
            subtitle: non_blank("subtitle"),
            author: non_blank("author"),
            date: non_blank("date"),
            company: non_blank("company"),
        }
    }

    fn spec(&self, key: &str) -> Result<&FieldSpec, CoreError> {
        self.schema
            .field(key)
            .ok_or_else(|| CoreError::UnknownField {
                kind: self.schema.kind,
                key: key.to_string(),
            })
    }
}

fn shape_matches(spec: &FieldSpec, value: &FieldValue) -> bool {
    match value {
        FieldValue::Items(items) => spec.kind.is_list() && has_unique_ids(items),
        FieldValue::Text(_) => !spec.kind.is_list(),
    }
}

fn list_mismatch(key: &str) -> CoreError {
    CoreError::FieldKindMismatch {
        key: key.to_string(),
        expected: "list",
    }
}
