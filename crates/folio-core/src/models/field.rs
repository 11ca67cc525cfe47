use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::list::Identified;

/// A single template field value: free text, or an ordered list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Text(String),
    Items(Vec<ListItem>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Items(_) => None,
        }
    }

    pub fn as_items(&self) -> Option<&[ListItem]> {
        match self {
            Self::Items(items) => Some(items),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// One entry of a repeating section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListItem {
    pub id: u64,
    /// Free-text sub-fields keyed by the list's item field keys.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

impl ListItem {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            values: BTreeMap::new(),
            colors: None,
            status: None,
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Identified for ListItem {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Background/foreground pair used to tint a list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorPair {
    pub background: String,
    pub foreground: String,
}

const PALETTE: [(&str, &str); 6] = [
    ("#e0f2fe", "#0369a1"),
    ("#dcfce7", "#15803d"),
    ("#fef3c7", "#b45309"),
    ("#fce7f3", "#be185d"),
    ("#ede9fe", "#6d28d9"),
    ("#fee2e2", "#b91c1c"),
];

impl ColorPair {
    /// Palette entry for an item id. Ids start at 1, so item 1 gets the
    /// first entry and the palette repeats after six items.
    pub fn for_id(id: u64) -> Self {
        let index = (id.saturating_sub(1) % PALETTE.len() as u64) as usize;
        let (background, foreground) = PALETTE[index];
        Self {
            background: background.to_string(),
            foreground: foreground.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl ItemStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}
