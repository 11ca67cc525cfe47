//! Field schemas for each template.
//!
//! Every template starts from the same header block (`title`, and usually
//! `subtitle`, `author`, `date`, `company`) followed by its own sections.

pub mod annual_report;
pub mod event_program;
pub mod meeting_minutes;
pub mod newsletter;
pub mod project_proposal;
pub mod resume;

use crate::models::field::{FieldValue, ItemStatus, ListItem};
use crate::models::template::{FieldKind, FieldSpec, ItemFieldSpec};

/// Builder for a list field and its sample items.
pub(crate) struct ListField {
    key: String,
    label: String,
    item_fields: Vec<ItemFieldSpec>,
    with_status: bool,
    with_colors: bool,
    samples: Vec<(Vec<(String, String)>, Option<ItemStatus>)>,
}

impl ListField {
    pub(crate) fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            item_fields: Vec::new(),
            with_status: false,
            with_colors: false,
            samples: Vec::new(),
        }
    }

    pub(crate) fn field(self, key: &str, label: &str) -> Self {
        self.push_field(key, label, false)
    }

    pub(crate) fn long_field(self, key: &str, label: &str) -> Self {
        self.push_field(key, label, true)
    }

    fn push_field(mut self, key: &str, label: &str, multiline: bool) -> Self {
        self.item_fields.push(ItemFieldSpec {
            key: key.to_string(),
            label: label.to_string(),
            multiline,
        });
        self
    }

    pub(crate) fn with_status(mut self) -> Self {
        self.with_status = true;
        self
    }

    pub(crate) fn with_colors(mut self) -> Self {
        self.with_colors = true;
        self
    }

    pub(crate) fn sample(mut self, values: &[(&str, &str)]) -> Self {
        self.samples.push((owned(values), None));
        self
    }

    pub(crate) fn sample_with_status(mut self, values: &[(&str, &str)], status: ItemStatus) -> Self {
        self.samples.push((owned(values), Some(status)));
        self
    }

    pub(crate) fn build(self) -> FieldSpec {
        let kind = FieldKind::List {
            item_fields: self.item_fields,
            with_status: self.with_status,
            with_colors: self.with_colors,
        };

        let items: Vec<ListItem> = self
            .samples
            .into_iter()
            .zip(1u64..)
            .filter_map(|((values, status), id)| {
                let mut item = kind.blank_item(id)?;
                item.values.extend(values);
                if status.is_some() {
                    item.status = status;
                }
                Some(item)
            })
            .collect();

        FieldSpec {
            key: self.key,
            label: self.label,
            kind,
            default: FieldValue::Items(items),
        }
    }
}

fn owned(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
