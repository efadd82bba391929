//! Reviewer hints: what successful applications look like.

use super::patterns::SUCCESS_TIPS;
use super::{FieldExtractor, PatternExtractor};

/// Tip passages, 50 characters before and 100 after.
pub fn success_tips_extractor() -> PatternExtractor {
    PatternExtractor::new(&SUCCESS_TIPS, 6)
        .with_context(50, 100)
        .with_max_chars(300)
}

pub fn extract_success_tips(text: &str) -> Vec<String> {
    success_tips_extractor().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tip_with_context() {
        let text = "Strong proposals clearly describe measurable outcomes.";
        assert_eq!(extract_success_tips(text), vec![text.to_string()]);
    }

    #[test]
    fn test_reviewer_phrases() {
        let text = "Reviewers will score each section.\n\n\
                    Beyond that, we look for partnerships.";
        let tips = extract_success_tips(text);
        assert!(tips.iter().any(|t| t.contains("we look for")));
    }

    #[test]
    fn test_long_matches_dropped() {
        let text = format!("Successful {} applications", "z".repeat(300));
        assert!(extract_success_tips(&text).is_empty());
    }

    #[test]
    fn test_no_tips() {
        assert!(extract_success_tips("Budget: $5,000.").is_empty());
    }
}
