//! Document text extraction.
//!
//! Three readers (PDF, DOCX, plain text) sit behind [`DocumentReader`].
//! [`extract_text_from_file`] is the public entry point and never fails: any
//! reader error is logged and the caller gets whatever text was read before
//! the failure, possibly nothing.

mod docx;
mod pdf;
mod plain;

pub use docx::DocxReader;
pub use pdf::PdfReader;
pub use plain::PlainTextReader;

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::DocumentError;

/// Result type for document readers.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Supported document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Kind for a bare extension, case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Kind for a file name or path, from its last `.`-separated component.
    pub fn from_path(path: &Path) -> Option<Self> {
        extension_of(path).and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }

    /// Reader for this kind.
    pub fn reader(&self) -> &'static dyn DocumentReader {
        match self {
            Self::Pdf => &PdfReader,
            Self::Docx => &DocxReader,
            Self::Txt => &PlainTextReader,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Trait for document readers.
pub trait DocumentReader {
    /// Append the document's text to `out`.
    ///
    /// On error `out` keeps everything appended before the failure.
    fn read_into(&self, path: &Path, out: &mut String) -> Result<()>;

    /// Read the whole document into a new string.
    fn read(&self, path: &Path) -> Result<String> {
        let mut out = String::new();
        self.read_into(path, &mut out)?;
        Ok(out)
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Extract text from a document, dispatching on its extension.
///
/// Never fails; unknown extensions and reader errors yield an empty or
/// partial string.
pub fn extract_text_from_file(path: &Path) -> String {
    match DocumentKind::from_path(path) {
        Some(kind) => extract_text(path, kind),
        None => {
            let err = DocumentError::UnsupportedExtension(
                extension_of(path).unwrap_or_default().to_string(),
            );
            warn!("Skipping {}: {}", path.display(), err);
            String::new()
        }
    }
}

/// Extract text from a document of a known kind.
pub fn extract_text(path: &Path, kind: DocumentKind) -> String {
    let mut text = String::new();
    match kind.reader().read_into(path, &mut text) {
        Ok(()) => debug!("Extracted {} chars from {} ({})", text.len(), path.display(), kind),
        Err(e) => warn!(
            "Error extracting text from {}: {} (keeping {} chars)",
            path.display(),
            e,
            text.len()
        ),
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("call.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("a.b.docx")), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_path(Path::new("/tmp/notes.txt")), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_path(Path::new("archive.zip")), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_unknown_extension_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a,b,c").unwrap();
        assert_eq!(extract_text_from_file(&path), "");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = PathBuf::from("/nonexistent/rfp.txt");
        assert_eq!(extract_text_from_file(&path), "");
    }

    #[test]
    fn test_dispatch_to_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rfp.txt");
        std::fs::write(&path, "Request for Proposal\n").unwrap();
        assert_eq!(extract_text_from_file(&path), "Request for Proposal\n");
    }
}
