use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::process::Command;

use folio_core::keys;

use crate::error::RenderError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Print-to-file capability: turns a full HTML document into a PDF on disk.
///
/// Methods return boxed futures for dyn compatibility.
pub trait PdfRenderer: Send + Sync {
    /// Render `html` and return the path of the written PDF. `file_stem`
    /// names the output file.
    fn render<'a>(
        &'a self,
        html: &'a str,
        file_stem: &'a str,
    ) -> BoxFuture<'a, Result<PathBuf, RenderError>>;
}

/// Renders by running an external HTML-to-PDF program
/// (`wkhtmltopdf`, `weasyprint`, ...) as
/// `<program> <args..> <input.html> <output.pdf>`.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    pub program: String,
    pub args: Vec<String>,
    pub output_dir: PathBuf,
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            output_dir: output_dir.into(),
        }
    }

    async fn run(&self, html: &str, file_stem: &str) -> Result<PathBuf, RenderError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let html_path = self.output_dir.join(keys::export_html(file_stem));
        let pdf_path = self.output_dir.join(keys::export_pdf(file_stem));
        tokio::fs::write(&html_path, html.as_bytes()).await?;

        // A PDF left by an earlier export must not pass for this run's output.
        match tokio::fs::remove_file(&pdf_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(RenderError::Io(e)),
        }

        tracing::debug!(
            program = %self.program,
            input = %html_path.display(),
            output = %pdf_path.display(),
            "running PDF renderer"
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&html_path)
            .arg(&pdf_path)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    RenderError::Unavailable(format!("{} not found", self.program))
                } else {
                    RenderError::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !file_exists(&pdf_path).await {
            return Err(RenderError::MissingOutput(pdf_path));
        }

        Ok(pdf_path)
    }
}

impl PdfRenderer for CommandRenderer {
    fn render<'a>(
        &'a self,
        html: &'a str,
        file_stem: &'a str,
    ) -> BoxFuture<'a, Result<PathBuf, RenderError>> {
        Box::pin(self.run(html, file_stem))
    }
}

async fn file_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
