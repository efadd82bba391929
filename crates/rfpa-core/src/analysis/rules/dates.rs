//! Dates mentioned anywhere in a document.

use super::patterns::DATES;
use super::{FieldExtractor, PatternExtractor};

/// Every date, deduplicated, in first-occurrence order.
pub fn date_extractor() -> PatternExtractor {
    PatternExtractor::new(&DATES, usize::MAX)
}

pub fn extract_dates(text: &str) -> Vec<String> {
    date_extractor().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_month_name() {
        let dates = extract_dates("Application deadline: December 15, 2024");
        assert!(dates.contains(&"December 15, 2024".to_string()));
    }

    #[test]
    fn test_numeric_and_abbreviated() {
        let dates = extract_dates("Due 12/15/2024 or 1-5-25; reports by Mar 3, 2025.");
        assert_eq!(dates, vec!["12/15/2024", "1-5-25", "Mar 3, 2025"]);
    }

    #[test]
    fn test_full_and_short_month_dedup() {
        let dates = extract_dates("Kickoff May 1, 2025.");
        assert_eq!(dates, vec!["May 1, 2025"]);
    }
}
