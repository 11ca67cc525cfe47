use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::{ColorPair, FieldValue, ItemStatus, ListItem};
use crate::error::CoreError;
use crate::templates;

/// The document templates a record can come from. Serialized as the
/// record's `type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TemplateKind {
    AnnualReport,
    Resume,
    MeetingMinutes,
    Newsletter,
    EventProgram,
    ProjectProposal,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        Self::AnnualReport,
        Self::Resume,
        Self::MeetingMinutes,
        Self::Newsletter,
        Self::EventProgram,
        Self::ProjectProposal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnnualReport => "annual_report",
            Self::Resume => "resume",
            Self::MeetingMinutes => "meeting_minutes",
            Self::Newsletter => "newsletter",
            Self::EventProgram => "event_program",
            Self::ProjectProposal => "project_proposal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AnnualReport => "Annual Report",
            Self::Resume => "Resume",
            Self::MeetingMinutes => "Meeting Minutes",
            Self::Newsletter => "Newsletter",
            Self::EventProgram => "Event Program",
            Self::ProjectProposal => "Project Proposal",
        }
    }

    /// The field schema this template edits.
    pub fn schema(self) -> TemplateSchema {
        match self {
            Self::AnnualReport => templates::annual_report::schema(),
            Self::Resume => templates::resume::schema(),
            Self::MeetingMinutes => templates::meeting_minutes::schema(),
            Self::Newsletter => templates::newsletter::schema(),
            Self::EventProgram => templates::event_program::schema(),
            Self::ProjectProposal => templates::project_proposal::schema(),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTemplate(s.to_string()))
    }
}

/// Declarative description of one template's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemplateSchema {
    pub kind: TemplateKind,
    pub fields: Vec<FieldSpec>,
}

impl TemplateSchema {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub default: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Text,
    Multiline,
    Date,
    Email,
    List {
        item_fields: Vec<ItemFieldSpec>,
        /// Items carry an [`ItemStatus`](super::field::ItemStatus).
        with_status: bool,
        /// Items are tinted with a palette [`ColorPair`](super::field::ColorPair).
        with_colors: bool,
    },
}

impl FieldKind {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// A new empty item for a list field, carrying the palette colours and
    /// initial status the list declares. `None` for scalar kinds.
    pub fn blank_item(&self, id: u64) -> Option<ListItem> {
        let Self::List {
            item_fields,
            with_status,
            with_colors,
        } = self
        else {
            return None;
        };

        let mut item = ListItem::new(id);
        for field in item_fields {
            item.values.insert(field.key.clone(), String::new());
        }
        if *with_colors {
            item.colors = Some(ColorPair::for_id(id));
        }
        if *with_status {
            item.status = Some(ItemStatus::Pending);
        }
        Some(item)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemFieldSpec {
    pub key: String,
    pub label: String,
    pub multiline: bool,
}

impl FieldSpec {
    pub fn text(key: &str, label: &str, default: &str) -> Self {
        Self::scalar(key, label, FieldKind::Text, default)
    }

    pub fn multiline(key: &str, label: &str, default: &str) -> Self {
        Self::scalar(key, label, FieldKind::Multiline, default)
    }

    pub fn date(key: &str, label: &str, default: &str) -> Self {
        Self::scalar(key, label, FieldKind::Date, default)
    }

    pub fn email(key: &str, label: &str, default: &str) -> Self {
        Self::scalar(key, label, FieldKind::Email, default)
    }

    fn scalar(key: &str, label: &str, kind: FieldKind, default: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            default: FieldValue::Text(default.to_string()),
        }
    }
}
