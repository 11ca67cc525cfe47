use serde::Serialize;
use tera::Context;

use folio_core::{DocumentForm, DocumentHeader};

use crate::content::{DocumentTemplates, SHELL};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Copyright line printed in the fixed footer of every document.
pub const FOOTER: &str = "\u{a9} Folio Document Templates. All rights reserved.";

#[derive(Serialize)]
struct ShellContext<'a> {
    header: &'a DocumentHeader,
    css: String,
    content: &'a str,
    footer: &'static str,
}

impl DocumentTemplates {
    /// Wrap an assembled content fragment in the full HTML document: a
    /// header block with title and metadata, the content inserted as-is,
    /// and the fixed footer.
    pub fn wrap_document(
        &self,
        header: &DocumentHeader,
        styles: &DocumentStyles,
        content_html: &str,
    ) -> Result<String, ExportError> {
        let context = Context::from_serialize(ShellContext {
            header,
            css: styles.css(),
            content: content_html,
            footer: FOOTER,
        })?;
        Ok(self.tera.render(SHELL, &context)?)
    }

    /// Assemble the content of a form and wrap it in the document shell.
    pub fn build_document(
        &self,
        form: &DocumentForm,
        styles: &DocumentStyles,
    ) -> Result<String, ExportError> {
        let content = self.assemble_content(form)?;
        self.wrap_document(&form.header(), styles, &content)
    }
}
