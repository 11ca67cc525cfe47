use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use folio_core::{keys, DocumentForm};

use crate::content::DocumentTemplates;
use crate::error::{ExportError, ShareError};
use crate::render::PdfRenderer;
use crate::share::{ShareOptions, ShareService};
use crate::styles::DocumentStyles;

/// Where one export attempt currently stands.
///
/// `Idle → Rendering → {RenderFailed | Rendered}`, then from `Rendered`
/// `Sharing → {Shared | ShareFailed}`, or straight to `ShareUnavailable`
/// when the platform cannot share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportState {
    Idle,
    Rendering,
    RenderFailed,
    Rendered,
    Sharing,
    ShareUnavailable,
    ShareFailed,
    Shared,
}

/// Result of an export that produced a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub file: PathBuf,
    /// `Shared` or `ShareUnavailable`.
    pub state: ExportState,
}

/// Content assembly → render-to-file → share.
///
/// Nothing is retried. A render failure stops the attempt before the share
/// target is touched; a missing share mechanism is not an error.
pub struct ExportPipeline {
    templates: DocumentTemplates,
    styles: DocumentStyles,
    renderer: Arc<dyn PdfRenderer>,
    share: Arc<dyn ShareService>,
    state: watch::Sender<ExportState>,
}

impl ExportPipeline {
    pub fn new(
        renderer: Arc<dyn PdfRenderer>,
        share: Arc<dyn ShareService>,
        styles: DocumentStyles,
    ) -> Result<Self, ExportError> {
        let (state, _) = watch::channel(ExportState::Idle);
        Ok(Self {
            templates: DocumentTemplates::new()?,
            styles,
            renderer,
            share,
            state,
        })
    }

    /// Observe state transitions of export attempts.
    pub fn subscribe(&self) -> watch::Receiver<ExportState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ExportState {
        *self.state.borrow()
    }

    pub fn templates(&self) -> &DocumentTemplates {
        &self.templates
    }

    /// The full HTML document for a form.
    pub fn build_html(&self, form: &DocumentForm) -> Result<String, ExportError> {
        self.templates.build_document(form, &self.styles)
    }

    /// Render a form to PDF and share the file.
    pub async fn export(&self, form: &DocumentForm) -> Result<ExportOutcome, ExportError> {
        let header = form.header();
        self.transition(ExportState::Rendering);

        let rendered = match self.build_html(form) {
            Ok(html) => {
                let stem = keys::file_stem(&header.title);
                self.renderer
                    .render(&html, &stem)
                    .await
                    .map_err(ExportError::from)
            }
            Err(e) => Err(e),
        };
        let file = match rendered {
            Ok(file) => file,
            Err(e) => {
                tracing::error!(error = %e, title = %header.title, "export render failed");
                self.transition(ExportState::RenderFailed);
                return Err(e);
            }
        };
        self.transition(ExportState::Rendered);
        tracing::info!(file = %file.display(), "document rendered");

        if !self.share.is_available() {
            return Ok(self.share_unavailable(file));
        }

        self.transition(ExportState::Sharing);
        let options = ShareOptions::pdf(header.title.clone());
        match self.share.share(&file, &options).await {
            Ok(()) => {
                self.transition(ExportState::Shared);
                tracing::info!(file = %file.display(), "document shared");
                Ok(ExportOutcome {
                    file,
                    state: ExportState::Shared,
                })
            }
            Err(ShareError::Unavailable) => Ok(self.share_unavailable(file)),
            Err(e) => {
                tracing::error!(error = %e, file = %file.display(), "sharing failed");
                self.transition(ExportState::ShareFailed);
                Err(e.into())
            }
        }
    }

    fn share_unavailable(&self, file: PathBuf) -> ExportOutcome {
        tracing::info!(file = %file.display(), "sharing is not available on this platform");
        self.transition(ExportState::ShareUnavailable);
        ExportOutcome {
            file,
            state: ExportState::ShareUnavailable,
        }
    }

    fn transition(&self, next: ExportState) {
        let previous = self.state.send_replace(next);
        tracing::debug!(from = ?previous, to = ?next, "export state");
    }
}
