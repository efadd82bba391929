//! Currency amounts mentioned anywhere in a document.

use super::patterns::CURRENCY_AMOUNTS;
use super::{FieldExtractor, PatternExtractor};

/// Every currency amount, deduplicated, in first-occurrence order.
pub fn currency_extractor() -> PatternExtractor {
    PatternExtractor::new(&CURRENCY_AMOUNTS, usize::MAX)
}

pub fn extract_currency_amounts(text: &str) -> Vec<String> {
    currency_extractor().extract_all(text)
}
