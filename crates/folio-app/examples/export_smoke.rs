//! Smoke test for the save and share actions against real collaborators.
//!
//! Saves an annual report into a temporary data directory and exports it
//! with the configured HTML-to-PDF program (`wkhtmltopdf` unless the
//! saved config says otherwise).
//!
//! Usage:
//!   FOLIO_TITLE="Q1 Report" \
//!   cargo run -p folio-app --example export_smoke

use std::sync::Arc;

use folio_app::actions::{self, ActionOutcome};
use folio_app::config;
use folio_app::dialog::LogDialog;
use folio_app::logging;
use folio_app::state::AppState;
use folio_core::{DocumentForm, TemplateKind};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let scratch = tempfile::tempdir()?;
    let mut config = config::load_or_default()?;
    config.data_dir = scratch.path().join("data");
    config.output_dir = scratch.path().join("exports");
    logging::init(&config)?;

    let title = std::env::var("FOLIO_TITLE").unwrap_or_else(|_| "Q1 Report".to_string());
    let mut form = DocumentForm::new(TemplateKind::AnnualReport);
    form.set_text("title", title.as_str())?;
    form.add_item("achievements", &[("title", "Smoke test"), ("description", "Rendered end to end.")])?;

    let state = AppState::from_config(&config, Arc::new(LogDialog))?;

    println!("Saving \"{title}\"...");
    if let ActionOutcome::Completed(record) = actions::save_document(&state, &form).await {
        println!("  saved record {} ({} in collection)", record.id, state.store.load_all().await?.len());
    }

    println!("Exporting with {}...", config.renderer.program);
    match actions::share_document(&state, &form).await {
        ActionOutcome::Completed(outcome) => {
            println!("  {} ({:?})", outcome.file.display(), outcome.state);
        }
        ActionOutcome::Failed => println!("  export failed, see log"),
    }

    Ok(())
}
