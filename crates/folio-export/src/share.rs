use std::io::ErrorKind;
use std::path::Path;

use tokio::process::Command;

use crate::error::ShareError;
use crate::render::BoxFuture;

/// MIME type of every exported file.
pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOptions {
    /// Title of the share sheet; the document title.
    pub dialog_title: String,
    pub mime_type: &'static str,
}

impl ShareOptions {
    pub fn pdf(dialog_title: impl Into<String>) -> Self {
        Self {
            dialog_title: dialog_title.into(),
            mime_type: PDF_MIME,
        }
    }
}

/// Share-sheet capability for a rendered file.
pub trait ShareService: Send + Sync {
    /// Whether this platform offers any way to share at all.
    fn is_available(&self) -> bool;

    fn share<'a>(
        &'a self,
        file: &'a Path,
        options: &'a ShareOptions,
    ) -> BoxFuture<'a, Result<(), ShareError>>;
}

/// Platform without a share mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShare;

impl ShareService for NoShare {
    fn is_available(&self) -> bool {
        false
    }

    fn share<'a>(
        &'a self,
        _file: &'a Path,
        _options: &'a ShareOptions,
    ) -> BoxFuture<'a, Result<(), ShareError>> {
        Box::pin(async { Err(ShareError::Unavailable) })
    }
}

/// Hands the file to an external opener (`xdg-open`, `open`, ...) as
/// `<program> <args..> <file>`.
#[derive(Debug, Clone)]
pub struct CommandShare {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandShare {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl ShareService for CommandShare {
    fn is_available(&self) -> bool {
        !self.program.trim().is_empty()
    }

    fn share<'a>(
        &'a self,
        file: &'a Path,
        options: &'a ShareOptions,
    ) -> BoxFuture<'a, Result<(), ShareError>> {
        Box::pin(async move {
            tracing::debug!(
                program = %self.program,
                file = %file.display(),
                dialog_title = %options.dialog_title,
                mime_type = options.mime_type,
                "opening share target"
            );

            let status = Command::new(&self.program)
                .args(&self.args)
                .arg(file)
                .status()
                .await
                .map_err(|e| {
                    if e.kind() == ErrorKind::NotFound {
                        ShareError::Unavailable
                    } else {
                        ShareError::Io(e)
                    }
                })?;

            if status.success() {
                Ok(())
            } else {
                Err(ShareError::Failed(format!("{} exited with {status}", self.program)))
            }
        })
    }
}
