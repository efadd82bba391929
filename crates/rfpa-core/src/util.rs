//! Text and file helpers shared by the web and CLI front ends.

use std::io;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::analysis::rules::patterns::{DISALLOWED_CHARS, WHITESPACE_RUN};

/// Average reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 225;

/// Collapse whitespace runs and drop characters outside
/// `[\w\s\-.,;:()$%/]`.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    DISALLOWED_CHARS.replace_all(&collapsed, "").trim().to_string()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than one.
pub fn calculate_reading_time(text: &str) -> usize {
    (word_count(text) / WORDS_PER_MINUTE).max(1)
}

/// Reduce a client-supplied file name to a safe ASCII name.
///
/// Path separators become spaces, whitespace runs become `_`, anything
/// outside `[A-Za-z0-9_.-]` is dropped and leading/trailing `.`/`_` are
/// stripped. May return an empty string.
pub fn secure_filename(name: &str) -> String {
    let ascii: String = name
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '_' | '.' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Upload name: `%Y%m%d_%H%M%S_` followed by the secured file name.
pub fn sanitize_filename(name: &str, now: NaiveDateTime) -> String {
    let secured = secure_filename(name);
    let secured = if secured.is_empty() { "upload".to_string() } else { secured };
    format!("{}_{}", now.format("%Y%m%d_%H%M%S"), secured)
}

/// File size in MiB.
pub fn file_size_mb(path: &Path) -> io::Result<f64> {
    let bytes = std::fs::metadata(path)?.len();
    Ok(bytes as f64 / (1024.0 * 1024.0))
}

/// Whether `filename` has an extension from `allowed` (case-insensitive).
pub fn allowed_file<S: AsRef<str>>(filename: &str, allowed: &[S]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| a.as_ref() == ext)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 15)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap()
    }

    #[test]
    fn test_clean_text() {
        let text = "  Grant\t\tamount:  $5,000 * due 12/15!\n\n";
        assert_eq!(clean_text(text), "Grant amount: $5,000  due 12/15");
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(calculate_reading_time(""), 1);
        assert_eq!(calculate_reading_time(&"word ".repeat(449)), 1);
        assert_eq!(calculate_reading_time(&"word ".repeat(450)), 2);
    }

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("My RFP (final).pdf"), "My_RFP_final.pdf");
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("..."), "");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("Call for Proposals.docx", noon()),
            "20241215_093005_Call_for_Proposals.docx"
        );
        assert_eq!(sanitize_filename("???", noon()), "20241215_093005_upload");
    }

    #[test]
    fn test_allowed_file() {
        let allowed = ["pdf", "docx", "txt"];
        assert!(allowed_file("rfp.PDF", &allowed));
        assert!(allowed_file("archive.tar.txt", &allowed));
        assert!(!allowed_file("rfp.doc", &allowed));
        assert!(!allowed_file("pdf", &allowed));
    }

    #[test]
    fn test_file_size_mb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("half.bin");
        std::fs::write(&path, vec![0u8; 512 * 1024]).unwrap();
        assert_eq!(file_size_mb(&path).unwrap(), 0.5);
    }
}
