//! Content assembly: template field values to an HTML fragment.
//!
//! Each template has one Tera fragment under `templates/`. All fragments
//! are registered as `.html` templates, so interpolated field values are
//! HTML-escaped. Multi-line text goes through
//! `escape | linebreaksbr | safe`, which escapes first and then inserts
//! the `<br>` tags.

use serde_json::{Map, Value};
use tera::{Context, Tera};

use folio_core::{DocumentForm, FieldKind, FieldValue, ListItem, TemplateKind};

use crate::error::ExportError;

pub(crate) const SHELL: &str = "shell.html";

const SOURCES: [(&str, &str); 7] = [
    (SHELL, include_str!("../templates/shell.html")),
    ("annual_report.html", include_str!("../templates/annual_report.html")),
    ("resume.html", include_str!("../templates/resume.html")),
    ("meeting_minutes.html", include_str!("../templates/meeting_minutes.html")),
    ("newsletter.html", include_str!("../templates/newsletter.html")),
    ("event_program.html", include_str!("../templates/event_program.html")),
    ("project_proposal.html", include_str!("../templates/project_proposal.html")),
];

/// The compiled content fragments and document shell.
pub struct DocumentTemplates {
    pub(crate) tera: Tera,
}

impl DocumentTemplates {
    pub fn new() -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(SOURCES)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Render the content fragment for a form's current values.
    ///
    /// Pure: the same values always produce the same bytes.
    pub fn assemble_content(&self, form: &DocumentForm) -> Result<String, ExportError> {
        let context = Context::from_value(Value::Object(content_context(form)))?;
        let rendered = self.tera.render(&fragment_name(form.kind()), &context)?;
        Ok(rendered)
    }
}

fn fragment_name(kind: TemplateKind) -> String {
    format!("{}.html", kind.as_str())
}

/// Build the fragment context: text fields as strings, list fields as
/// arrays of flat item objects.
fn content_context(form: &DocumentForm) -> Map<String, Value> {
    let mut context = Map::new();
    for spec in &form.schema().fields {
        let value = match (form.values().get(&spec.key), &spec.kind) {
            (Some(FieldValue::Items(items)), FieldKind::List { item_fields, .. }) => {
                let keys: Vec<&str> = item_fields.iter().map(|f| f.key.as_str()).collect();
                Value::Array(items.iter().map(|item| item_context(item, &keys)).collect())
            }
            (Some(FieldValue::Items(_)), _) | (None, FieldKind::List { .. }) => Value::Array(Vec::new()),
            (Some(FieldValue::Text(text)), _) => Value::String(text.clone()),
            (None, _) => Value::String(String::new()),
        };
        context.insert(spec.key.clone(), value);
    }
    context
}

/// Flatten an item for the templates. Every declared sub-field, `status`,
/// `background` and `foreground` is always present so fragments can
/// reference them without guards.
fn item_context(item: &ListItem, keys: &[&str]) -> Value {
    let mut obj = Map::new();
    for key in keys {
        obj.insert(key.to_string(), Value::String(String::new()));
    }
    for (key, value) in &item.values {
        obj.insert(key.clone(), Value::String(value.clone()));
    }

    obj.insert("id".to_string(), Value::from(item.id));
    let status = item.status.map(|s| s.label()).unwrap_or_default();
    obj.insert("status".to_string(), Value::String(status.to_string()));

    let (background, foreground) = item
        .colors
        .as_ref()
        .map(|c| (c.background.clone(), c.foreground.clone()))
        .unwrap_or_default();
    obj.insert("background".to_string(), Value::String(background));
    obj.insert("foreground".to_string(), Value::String(foreground));

    Value::Object(obj)
}
