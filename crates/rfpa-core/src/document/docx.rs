//! DOCX paragraphs via docx-rs.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

use super::{DocumentReader, Result};
use crate::error::DocumentError;

pub struct DocxReader;

impl DocumentReader for DocxReader {
    /// Appends every body paragraph's run text followed by a newline, empty
    /// paragraphs included.
    fn read_into(&self, path: &Path, out: &mut String) -> Result<()> {
        let data = std::fs::read(path)?;
        let docx = docx_rs::read_docx(&data).map_err(|e| DocumentError::Docx(e.to_string()))?;

        let mut paragraphs = 0;
        for child in &docx.document.children {
            let DocumentChild::Paragraph(para) = child else {
                continue;
            };
            for pc in &para.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            out.push_str(&t.text);
                        }
                    }
                }
            }
            out.push('\n');
            paragraphs += 1;
        }

        debug!("Read {} paragraphs from DOCX", paragraphs);
        Ok(())
    }
}
