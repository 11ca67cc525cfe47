use thiserror::Error;

use crate::models::template::TemplateKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown template type: {0}")]
    UnknownTemplate(String),

    #[error("template {kind} has no field named {key}")]
    UnknownField { kind: TemplateKind, key: String },

    #[error("field {key} is not a {expected} field")]
    FieldKindMismatch { key: String, expected: &'static str },

    #[error("list {key} has no item ids left")]
    IdsExhausted { key: String },
}
