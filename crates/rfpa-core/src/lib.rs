//! Core library for RFP document analysis.
//!
//! This crate provides:
//! - Text extraction from PDF, DOCX and plain-text documents
//! - Regex heuristics surfacing funding, eligibility, timeline and other fields
//! - Validation of uploads, extracted text and the prompt generator form
//! - SQLite persistence of past analyses

pub mod analysis;
pub mod document;
pub mod error;
pub mod models;
pub mod prompt;
pub mod store;
pub mod util;
pub mod validation;

pub use analysis::{RfpAnalyzer, analyze_rfp};
pub use document::{DocumentKind, DocumentReader, extract_text_from_file};
pub use error::{ConfigError, DocumentError, StoreError};
pub use models::analysis::{
    AnalysisResult, AnalysisSummary, ApplicationSection, DocumentInsights, RequirementCategory,
    Requirements, StoredAnalysis,
};
pub use models::config::AppConfig;
pub use store::AnalysisStore;
pub use validation::{FormData, FormErrors, Validation};
