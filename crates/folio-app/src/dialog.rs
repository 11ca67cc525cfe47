/// Blocking user-facing message, shown by the host UI.
pub trait Dialog: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

/// Headless stand-in that only logs what would have been shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDialog;

impl Dialog for LogDialog {
    fn alert(&self, title: &str, message: &str) {
        tracing::warn!(title, message, "user alert");
    }
}
