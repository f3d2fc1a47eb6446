//! PDF text extraction via `pdftotext` (poppler-utils).

use std::path::Path;
use std::process::Command;

use lexprint_types::{DocumentFormat, LoadError, RawText};
use tracing::debug;

use super::{non_empty, DocumentLoader};

const PDFTOTEXT: &str = "pdftotext";

/// Extracts text from a PDF by running `pdftotext <path> -`.
///
/// The child process owns the file handle and is waited on before
/// returning, so nothing stays open on any exit path.
#[derive(Debug, Clone)]
pub struct PdfLoader {
    binary: String,
}

impl Default for PdfLoader {
    fn default() -> Self {
        Self::with_binary(PDFTOTEXT)
    }
}

impl PdfLoader {
    /// Creates a loader that runs `pdftotext` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader that runs the given executable instead.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The executable this loader runs.
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl DocumentLoader for PdfLoader {
    fn load(&self, path: &Path) -> Result<RawText, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let output = Command::new(&self.binary)
            .args(["-enc", "UTF-8"])
            .arg(path)
            .arg("-")
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::ToolNotFound(self.binary.clone()));
            }
            Err(e) => return Err(LoadError::Io(e)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LoadError::ExtractionFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        debug!(path = %path.display(), bytes = output.stdout.len(), "extracted pdf text");
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        non_empty(text, path, DocumentFormat::Pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_binary() {
        assert_eq!(PdfLoader::new().binary(), "pdftotext");
    }

    #[test]
    fn missing_file_checked_before_running_tool() {
        let loader = PdfLoader::with_binary("lexprint-test-missing-pdftotext");
        let err = loader.load(Path::new("/nonexistent/paper.pdf")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn missing_tool_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let loader = PdfLoader::with_binary("lexprint-test-missing-pdftotext");
        match loader.load(&path) {
            Err(LoadError::ToolNotFound(tool)) => {
                assert_eq!(tool, "lexprint-test-missing-pdftotext")
            }
            other => panic!("expected ToolNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_is_extraction_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        // `false` ignores its arguments and exits non-zero.
        let loader = PdfLoader::with_binary("false");
        assert!(matches!(
            loader.load(&path),
            Err(LoadError::ExtractionFailed(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn tool_stdout_becomes_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        // `echo` prints its arguments, standing in for extracted text.
        let raw = PdfLoader::with_binary("echo").load(&path).unwrap();
        assert_eq!(raw.format(), DocumentFormat::Pdf);
        assert!(raw.as_str().contains("UTF-8"));
    }
}
