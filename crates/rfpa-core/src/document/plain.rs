//! Plain UTF-8 text files.

use std::path::Path;

use super::{DocumentReader, Result};
use crate::error::DocumentError;

pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn read_into(&self, path: &Path, out: &mut String) -> Result<()> {
        let bytes = std::fs::read(path)?;
        let text = std::str::from_utf8(&bytes).map_err(|_| DocumentError::InvalidUtf8)?;
        out.push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rfp.txt");
        std::fs::write(&path, "Fundación RFP: $5,000").unwrap();
        assert_eq!(PlainTextReader.read(&path).unwrap(), "Fundación RFP: $5,000");
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x52, 0x46, 0x50, 0xff, 0xfe]).unwrap();

        let mut out = String::new();
        let err = PlainTextReader.read_into(&path, &mut out).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidUtf8));
        assert!(out.is_empty());
    }
}
