//! User-triggered actions of a template screen.
//!
//! Each action is its own boundary: errors are logged and turned into a
//! dialog, a panic inside the action is caught and shown as the generic
//! failure. Nothing is retried; the user re-triggers the action.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use folio_core::{DocumentForm, DocumentRecord, TemplateKind};
use folio_export::{ExportError, ExportOutcome};

use crate::state::AppState;

pub const SAVE_FAILED_TITLE: &str = "Save failed";
pub const SAVE_FAILED_MESSAGE: &str = "Your document could not be saved. Please try again.";
pub const EXPORT_FAILED_TITLE: &str = "Export failed";
pub const EXPORT_FAILED_MESSAGE: &str = "The PDF could not be created. Please try again.";
pub const GENERIC_FAILED_TITLE: &str = "Something went wrong";
pub const GENERIC_FAILED_MESSAGE: &str = "The action could not be completed. Please try again.";

/// How a user action ended. Failures have already been shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T> {
    Completed(T),
    Failed,
}

impl<T> ActionOutcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Open a template, resuming a previously saved document when one is
/// handed over.
///
/// A malformed or mismatched saved document is logged and the template
/// falls back to its defaults; the user is not told.
pub fn open_document(state: &AppState, kind: TemplateKind, saved: Option<&str>) -> DocumentForm {
    let mut form = DocumentForm::new(kind);
    let Some(serialized) = saved else {
        return form;
    };

    let data = match state.store.hydrate(serialized) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(error = %e, template = %kind, "could not restore saved document, using defaults");
            return form;
        }
    };

    if let Some(saved_type) = data.get("type").and_then(|v| v.as_str())
        && saved_type != kind.as_str()
    {
        tracing::warn!(
            saved_type,
            template = %kind,
            "saved document belongs to another template, using defaults"
        );
        return form;
    }

    let applied = form.apply_hydrated(&data);
    tracing::debug!(template = %kind, applied, "saved document restored");
    form
}

/// Persist a snapshot of the form as a new record.
pub async fn save_document(state: &AppState, form: &DocumentForm) -> ActionOutcome<DocumentRecord> {
    let attempt = guarded(state, "save", async {
        let record = DocumentRecord::snapshot(form);
        state.store.append(&record).await.map(|_| record)
    })
    .await;

    match attempt {
        Some(Ok(record)) => ActionOutcome::Completed(record),
        Some(Err(e)) => {
            tracing::error!(error = %e, template = %form.kind(), "save failed");
            state.dialog.alert(SAVE_FAILED_TITLE, SAVE_FAILED_MESSAGE);
            ActionOutcome::Failed
        }
        None => ActionOutcome::Failed,
    }
}

/// Render the form to PDF and share it.
///
/// Render failures show the export dialog; an unavailable share target is
/// still a completed export.
pub async fn share_document(state: &AppState, form: &DocumentForm) -> ActionOutcome<ExportOutcome> {
    match guarded(state, "share", state.export.export(form)).await {
        Some(Ok(outcome)) => ActionOutcome::Completed(outcome),
        Some(Err(ExportError::Share(e))) => {
            tracing::error!(error = %e, "share failed");
            state.dialog.alert(GENERIC_FAILED_TITLE, GENERIC_FAILED_MESSAGE);
            ActionOutcome::Failed
        }
        Some(Err(e)) => {
            tracing::error!(error = %e, template = %form.kind(), "export failed");
            state.dialog.alert(EXPORT_FAILED_TITLE, EXPORT_FAILED_MESSAGE);
            ActionOutcome::Failed
        }
        None => ActionOutcome::Failed,
    }
}

/// Run an action future, converting a panic into the generic failure
/// dialog. Returns `None` if the action panicked.
async fn guarded<T>(state: &AppState, action: &'static str, fut: impl Future<Output = T>) -> Option<T> {
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => Some(value),
        Err(payload) => {
            tracing::error!(action, panic = %panic_message(payload.as_ref()), "action panicked");
            state.dialog.alert(GENERIC_FAILED_TITLE, GENERIC_FAILED_MESSAGE);
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
