//! folio-core
//!
//! Pure domain types for the document templates: persisted records, field
//! values, the generic list editor, per-template field schemas and the
//! in-memory form a template edits. No I/O lives here.

pub mod error;
pub mod form;
pub mod keys;
pub mod list;
pub mod models;
pub mod templates;

pub use crate::error::CoreError;
pub use crate::form::{DocumentForm, DocumentHeader};
pub use crate::list::{Identified, ListEditor};
pub use crate::models::document::{DocumentRecord, FieldValues};
pub use crate::models::field::{ColorPair, FieldValue, ItemStatus, ListItem};
pub use crate::models::template::{FieldKind, FieldSpec, ItemFieldSpec, TemplateKind, TemplateSchema};
