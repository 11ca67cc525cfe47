//! Storage slot and export file naming conventions.
//!
//! Pure string functions. These define where records live in the local
//! key-value store and how exported files are named on disk.

/// The single slot holding the serialized list of every saved document.
pub const DOCUMENTS: &str = "documents";

/// Fallback file stem when a title has no usable characters.
pub const UNTITLED: &str = "document";

pub fn export_html(stem: &str) -> String {
    format!("{stem}.html")
}

pub fn export_pdf(stem: &str) -> String {
    format!("{stem}.pdf")
}

/// Reduce a document title to a filesystem-safe file stem.
///
/// ASCII alphanumerics are kept (lowercased), every other run of characters
/// collapses to a single `-`.
pub fn file_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !stem.is_empty() {
                stem.push('-');
            }
            pending_dash = false;
            stem.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if stem.is_empty() {
        UNTITLED.to_string()
    } else {
        stem
    }
}
