//! Requirement extractors: financial, timeline, eligibility, geographic,
//! focus areas and required documents.

use super::patterns::{DOCUMENTS, ELIGIBILITY, FINANCIAL, FOCUS_AREAS, GEOGRAPHIC, TIMELINE};
use super::{FieldExtractor, PatternExtractor};

/// Financial requirement passages, 50 characters of context each side.
pub fn financial_extractor() -> PatternExtractor {
    PatternExtractor::new(&FINANCIAL, 5).with_context(50, 50)
}

/// Deadline and program-period phrases.
pub fn timeline_extractor() -> PatternExtractor {
    PatternExtractor::new(&TIMELINE, 10)
}

/// Eligibility passages, 20 characters before and 80 after; overly long
/// passages are dropped.
pub fn eligibility_extractor() -> PatternExtractor {
    PatternExtractor::new(&ELIGIBILITY, 8)
        .with_context(20, 80)
        .with_max_chars(200)
}

/// Geographic constraint phrases.
pub fn geographic_extractor() -> PatternExtractor {
    PatternExtractor::new(&GEOGRAPHIC, 5)
}

/// Focus area passages, 30 characters before and 70 after.
pub fn focus_areas_extractor() -> PatternExtractor {
    PatternExtractor::new(&FOCUS_AREAS, 6).with_context(30, 70)
}

/// Required document phrases.
pub fn documents_extractor() -> PatternExtractor {
    PatternExtractor::new(&DOCUMENTS, 8)
}

pub fn parse_financial_requirements(text: &str) -> Vec<String> {
    financial_extractor().extract_all(text)
}

pub fn parse_timeline(text: &str) -> Vec<String> {
    timeline_extractor().extract_all(text)
}

pub fn parse_eligibility(text: &str) -> Vec<String> {
    eligibility_extractor().extract_all(text)
}

pub fn extract_geographic_requirements(text: &str) -> Vec<String> {
    geographic_extractor().extract_all(text)
}

pub fn extract_focus_areas(text: &str) -> Vec<String> {
    focus_areas_extractor().extract_all(text)
}

pub fn extract_document_requirements(text: &str) -> Vec<String> {
    documents_extractor().extract_all(text)
}
