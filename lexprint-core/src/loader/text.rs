//! Plain text loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lexprint_types::{DocumentFormat, LoadError, RawText};
use memchr::memchr;
use tracing::{debug, warn};

use super::{io_error, non_empty, DocumentLoader};

/// Bytes inspected when deciding whether a file is binary.
const SNIFF_LEN: usize = 8000;

/// Returns `true` if a NUL byte appears within the first [`SNIFF_LEN`] bytes.
fn looks_binary(bytes: &[u8]) -> bool {
    memchr(0, &bytes[..bytes.len().min(SNIFF_LEN)]).is_some()
}

/// Reads a file as text, replacing invalid UTF-8 sequences.
///
/// Binary files are rejected with [`LoadError::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextLoader;

impl DocumentLoader for PlainTextLoader {
    fn load(&self, path: &Path) -> Result<RawText, LoadError> {
        let mut file = File::open(path).map_err(|e| io_error(e, path))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        if looks_binary(&bytes) {
            warn!(path = %path.display(), "binary content, refusing to analyze");
            return Err(LoadError::UnsupportedFormat(path.to_path_buf()));
        }

        debug!(path = %path.display(), bytes = bytes.len(), "read text file");
        let text = String::from_utf8_lossy(&bytes).into_owned();
        non_empty(text, path, DocumentFormat::PlainText)
    }
}
