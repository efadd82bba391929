//! Error types for the rfpa-core library.

use thiserror::Error;

/// Errors raised by the document readers.
///
/// These never leave [`crate::document::extract_text_from_file`]; they are
/// logged there and the caller receives whatever text was read.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension is not one of the supported kinds.
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// Failed to extract text from a PDF page.
    #[error("failed to extract text from page {page}: {reason}")]
    PageText { page: u32, reason: String },

    /// Failed to parse the DOCX package.
    #[error("failed to parse DOCX: {0}")]
    Docx(String),

    /// Plain-text file is not valid UTF-8.
    #[error("text file is not valid UTF-8")]
    InvalidUtf8,

    /// I/O error while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the analysis store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The analysis blob could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored timestamp could not be parsed.
    #[error("invalid timestamp in row {id}: {value}")]
    Timestamp { id: i64, value: String },
}

/// Errors related to loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`crate::models::config::AppConfig`].
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment variable holds a value of the wrong shape.
    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: String, value: String },
}
