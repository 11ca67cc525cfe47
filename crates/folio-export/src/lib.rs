//! folio-export
//!
//! Turns a template's field values into an HTML document, hands it to an
//! HTML-to-PDF renderer and the resulting file to a share target.

pub mod content;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod share;
pub mod shell;
pub mod styles;

pub use crate::content::DocumentTemplates;
pub use crate::error::{ExportError, RenderError, ShareError};
pub use crate::pipeline::{ExportOutcome, ExportPipeline, ExportState};
pub use crate::render::{CommandRenderer, PdfRenderer};
pub use crate::share::{CommandShare, NoShare, ShareOptions, ShareService};
pub use crate::styles::DocumentStyles;
