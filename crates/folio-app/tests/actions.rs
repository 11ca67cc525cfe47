use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use folio_app::actions::{
    self, ActionOutcome, EXPORT_FAILED_TITLE, GENERIC_FAILED_TITLE, SAVE_FAILED_TITLE,
};
use folio_app::dialog::Dialog;
use folio_app::state::AppState;
use folio_core::{DocumentForm, DocumentRecord, TemplateKind};
use folio_export::render::BoxFuture;
use folio_export::{
    DocumentStyles, ExportPipeline, ExportState, NoShare, PdfRenderer, RenderError, ShareError,
    ShareOptions, ShareService,
};
use folio_storage::{DocumentStore, KeyValueStore, MemoryStore, StorageError};

#[derive(Default)]
struct RecordingDialog {
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingDialog {
    fn titles(&self) -> Vec<String> {
        self.shown.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl Dialog for RecordingDialog {
    fn alert(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

enum RenderMode {
    Ok,
    Fail,
    Panic,
}

struct FakeRenderer(RenderMode);

impl PdfRenderer for FakeRenderer {
    fn render<'a>(
        &'a self,
        _html: &'a str,
        file_stem: &'a str,
    ) -> BoxFuture<'a, Result<PathBuf, RenderError>> {
        Box::pin(async move {
            match self.0 {
                RenderMode::Ok => Ok(PathBuf::from(format!("/tmp/{file_stem}.pdf"))),
                RenderMode::Fail => Err(RenderError::Unavailable("no renderer".to_string())),
                RenderMode::Panic => panic!("renderer crashed"),
            }
        })
    }
}

#[derive(Default)]
struct CountingShare {
    calls: AtomicUsize,
}

impl ShareService for CountingShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share<'a>(
        &'a self,
        _file: &'a Path,
        _options: &'a ShareOptions,
    ) -> BoxFuture<'a, Result<(), ShareError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

struct FullStore;

impl KeyValueStore for FullStore {
    fn get<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>> {
        Box::pin(async { Ok(None) })
    }

    fn set<'a>(&'a self, key: &'a str, _value: String) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        })
    }
}

struct Harness {
    state: AppState,
    dialog: Arc<RecordingDialog>,
    share: Arc<CountingShare>,
}

fn harness(kv: Arc<dyn KeyValueStore>, mode: RenderMode) -> Harness {
    let dialog = Arc::new(RecordingDialog::default());
    let share = Arc::new(CountingShare::default());
    let export = ExportPipeline::new(
        Arc::new(FakeRenderer(mode)),
        share.clone(),
        DocumentStyles::default(),
    )
    .unwrap();
    let state = AppState::new(DocumentStore::new(kv), export, dialog.clone());
    Harness {
        state,
        dialog,
        share,
    }
}

fn q1_report() -> DocumentForm {
    let mut form = DocumentForm::new(TemplateKind::AnnualReport);
    form.set_text("title", "Q1 Report").unwrap();
    form
}

#[tokio::test]
async fn save_appends_a_record() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Ok);

    let record = actions::save_document(&h.state, &q1_report())
        .await
        .completed()
        .unwrap();

    assert_eq!(record.doc_type, TemplateKind::AnnualReport);
    assert_eq!(h.state.store.load_all().await.unwrap(), vec![record]);
    assert!(h.dialog.titles().is_empty());
}

#[tokio::test]
async fn save_twice_keeps_both_records() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Ok);
    let form = q1_report();

    let first = actions::save_document(&h.state, &form).await.completed().unwrap();
    let second = actions::save_document(&h.state, &form).await.completed().unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(h.state.store.load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn storage_failure_shows_save_dialog() {
    let h = harness(Arc::new(FullStore), RenderMode::Ok);

    let outcome = actions::save_document(&h.state, &q1_report()).await;

    assert!(outcome.is_failed());
    assert_eq!(h.dialog.titles(), vec![SAVE_FAILED_TITLE.to_string()]);
}

#[tokio::test]
async fn render_failure_shows_one_dialog_and_never_shares() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Fail);

    let outcome = actions::share_document(&h.state, &q1_report()).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(h.dialog.titles(), vec![EXPORT_FAILED_TITLE.to_string()]);
    assert_eq!(h.share.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.state.export.state(), ExportState::RenderFailed);
}

#[tokio::test]
async fn successful_share_shows_no_dialog() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Ok);

    let outcome = actions::share_document(&h.state, &q1_report())
        .await
        .completed()
        .unwrap();

    assert_eq!(outcome.state, ExportState::Shared);
    assert_eq!(outcome.file, PathBuf::from("/tmp/q1-report.pdf"));
    assert_eq!(h.share.calls.load(Ordering::SeqCst), 1);
    assert!(h.dialog.titles().is_empty());
}

#[tokio::test]
async fn unavailable_share_is_silent() {
    let dialog = Arc::new(RecordingDialog::default());
    let export = ExportPipeline::new(
        Arc::new(FakeRenderer(RenderMode::Ok)),
        Arc::new(NoShare),
        DocumentStyles::default(),
    )
    .unwrap();
    let state = AppState::new(
        DocumentStore::new(Arc::new(MemoryStore::new())),
        export,
        dialog.clone(),
    );

    let outcome = actions::share_document(&state, &q1_report())
        .await
        .completed()
        .unwrap();

    assert_eq!(outcome.state, ExportState::ShareUnavailable);
    assert!(dialog.titles().is_empty());
}

#[tokio::test]
async fn panicking_action_is_caught_at_the_boundary() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Panic);

    let outcome = actions::share_document(&h.state, &q1_report()).await;

    assert!(outcome.is_failed());
    assert_eq!(h.dialog.titles(), vec![GENERIC_FAILED_TITLE.to_string()]);
    assert_eq!(h.share.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn open_without_saved_document_uses_defaults() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Ok);
    let form = actions::open_document(&h.state, TemplateKind::Resume, None);
    assert_eq!(form.values(), DocumentForm::new(TemplateKind::Resume).values());
}

#[test]
fn open_restores_a_saved_document() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Ok);
    let mut edited = q1_report();
    edited.list_mut("achievements").unwrap().remove(1);
    edited.add_item("metrics", &[("label", "Margin"), ("value", "21%")])
        .unwrap();
    let saved = serde_json::to_string(&DocumentRecord::snapshot(&edited)).unwrap();

    let form = actions::open_document(&h.state, TemplateKind::AnnualReport, Some(&saved));

    assert_eq!(form.values(), edited.values());
}

#[test]
fn malformed_saved_document_falls_back_silently() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Ok);

    let form = actions::open_document(&h.state, TemplateKind::AnnualReport, Some("{not json"));

    assert_eq!(form.values(), DocumentForm::new(TemplateKind::AnnualReport).values());
    assert!(h.dialog.titles().is_empty());
}

#[test]
fn saved_document_of_another_template_is_ignored() {
    let h = harness(Arc::new(MemoryStore::new()), RenderMode::Ok);
    let mut minutes = DocumentForm::new(TemplateKind::MeetingMinutes);
    minutes.set_text("title", "Board Meeting").unwrap();
    let saved = serde_json::to_string(&DocumentRecord::snapshot(&minutes)).unwrap();

    let form = actions::open_document(&h.state, TemplateKind::AnnualReport, Some(&saved));

    assert_eq!(form.text("title"), Some("Annual Report 2024"));
}
