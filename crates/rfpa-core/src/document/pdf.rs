//! PDF page text using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{DocumentReader, Result};
use crate::error::DocumentError;

pub struct PdfReader;

impl PdfReader {
    /// Append page texts from in-memory PDF bytes, each followed by a newline.
    ///
    /// Panics raised inside the PDF libraries are reported as
    /// [`DocumentError::Pdf`].
    pub fn read_bytes_into(&self, data: &[u8], out: &mut String) -> Result<()> {
        panic::catch_unwind(AssertUnwindSafe(|| read_pages(data, out))).unwrap_or_else(|_| {
            Err(DocumentError::Pdf("PDF parser panicked".to_string()))
        })
    }
}

impl DocumentReader for PdfReader {
    fn read_into(&self, path: &Path, out: &mut String) -> Result<()> {
        let data = std::fs::read(path)?;
        self.read_bytes_into(&data, out)
    }
}

/// A parsed PDF together with the bytes handed to pdf-extract.
struct LoadedPdf {
    document: Document,
    raw_data: Vec<u8>,
}

impl LoadedPdf {
    fn load(data: &[u8]) -> Result<Self> {
        let mut document = Document::load_mem(data).map_err(|e| DocumentError::Pdf(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(DocumentError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| DocumentError::Pdf(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        debug!("Loaded PDF with {} pages", document.get_pages().len());
        Ok(Self { document, raw_data })
    }
}

fn read_pages(data: &[u8], out: &mut String) -> Result<()> {
    let pdf = LoadedPdf::load(data)?;

    match pdf_extract::extract_text_from_mem_by_pages(&pdf.raw_data) {
        Ok(pages) => {
            for text in pages {
                out.push_str(&text);
                out.push('\n');
            }
        }
        Err(e) => {
            debug!("pdf-extract failed ({}), falling back to lopdf", e);
            for page in pdf.document.get_pages().into_keys() {
                let text = pdf.document.extract_text(&[page]).map_err(|e| DocumentError::PageText {
                    page,
                    reason: e.to_string(),
                })?;
                out.push_str(&text);
                out.push('\n');
            }
        }
    }

    Ok(())
}
