use std::sync::Arc;

use folio_export::{CommandRenderer, CommandShare, ExportPipeline, NoShare, ShareService};
use folio_storage::{DocumentStore, FileStore};

use crate::config::FolioConfig;
use crate::dialog::Dialog;

/// Everything the actions need, shared by every template screen.
pub struct AppState {
    pub store: DocumentStore,
    pub export: ExportPipeline,
    pub dialog: Arc<dyn Dialog>,
}

impl AppState {
    pub fn new(store: DocumentStore, export: ExportPipeline, dialog: Arc<dyn Dialog>) -> Self {
        Self {
            store,
            export,
            dialog,
        }
    }

    /// Wire file-backed storage and the configured renderer and opener.
    pub fn from_config(config: &FolioConfig, dialog: Arc<dyn Dialog>) -> eyre::Result<Self> {
        let store = DocumentStore::new(Arc::new(FileStore::new(&config.data_dir)));

        let renderer = Arc::new(CommandRenderer::new(
            config.renderer.program.clone(),
            config.renderer.args.clone(),
            &config.output_dir,
        ));
        let share: Arc<dyn ShareService> = match &config.share {
            Some(spec) => Arc::new(CommandShare::new(spec.program.clone(), spec.args.clone())),
            None => Arc::new(NoShare),
        };
        let export = ExportPipeline::new(renderer, share, config.styles.clone())?;

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            output_dir = %config.output_dir.display(),
            renderer = %config.renderer.program,
            "app state ready"
        );
        Ok(Self::new(store, export, dialog))
    }
}
