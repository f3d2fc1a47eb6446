//! Document loading.
//!
//! Loaders turn a path into [`RawText`]. The container format is the
//! loader's concern; everything downstream sees plain text.
//!
//! - [`PlainTextLoader`]: reads the file directly, rejecting binary content
//! - [`PdfLoader`]: runs the external `pdftotext` tool
//! - [`AutoLoader`]: picks one of the above by file extension

mod pdf;
mod text;

pub use pdf::PdfLoader;
pub use text::PlainTextLoader;

use std::path::Path;

use lexprint_types::{DocumentFormat, LoadError, RawText};
use tracing::info;

/// Extracts raw text from a document.
pub trait DocumentLoader {
    /// Loads the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file is missing, unreadable or not a
    /// supported format, if the extraction tool fails, or if no text is found.
    fn load(&self, path: &Path) -> Result<RawText, LoadError>;
}

/// Dispatches on file extension: `.pdf` goes to [`PdfLoader`], anything
/// else is read as plain text.
#[derive(Debug, Clone, Default)]
pub struct AutoLoader {
    pdf: PdfLoader,
    text: PlainTextLoader,
}

impl AutoLoader {
    /// Creates a loader with default sub-loaders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom PDF loader.
    #[must_use]
    pub fn with_pdf_loader(mut self, pdf: PdfLoader) -> Self {
        self.pdf = pdf;
        self
    }

    /// The format `path` would be loaded as.
    pub fn detect_format(path: &Path) -> DocumentFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentFormat::Pdf,
            _ => DocumentFormat::PlainText,
        }
    }
}

impl DocumentLoader for AutoLoader {
    fn load(&self, path: &Path) -> Result<RawText, LoadError> {
        let format = Self::detect_format(path);
        info!(path = %path.display(), %format, "loading document");
        match format {
            DocumentFormat::Pdf => self.pdf.load(path),
            DocumentFormat::PlainText => self.text.load(path),
        }
    }
}

/// Wraps extracted text, rejecting whitespace-only content.
pub(crate) fn non_empty(
    text: String,
    path: &Path,
    format: DocumentFormat,
) -> Result<RawText, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument(path.to_path_buf()));
    }
    Ok(RawText::new(text, format))
}

/// Maps an open/read failure, singling out a missing file.
pub(crate) fn io_error(err: std::io::Error, path: &Path) -> LoadError {
    if err.kind() == std::io::ErrorKind::NotFound {
        LoadError::NotFound(path.to_path_buf())
    } else {
        LoadError::Io(err)
    }
}
