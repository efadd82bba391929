//! Rule-based field extractors for RFP documents.

pub mod amounts;
pub mod dates;
pub mod headline;
pub mod patterns;
pub mod requirements;
pub mod sections;
pub mod tips;

pub use amounts::extract_currency_amounts;
pub use dates::extract_dates;
pub use headline::{extract_funding_amount, extract_organization, extract_title};
pub use requirements::{
    extract_document_requirements, extract_focus_areas, extract_geographic_requirements,
    parse_eligibility, parse_financial_requirements, parse_timeline,
};
pub use sections::{SectionExtractor, extract_application_sections};
pub use tips::extract_success_tips;

use std::collections::HashSet;
use std::hash::Hash;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Insertion-ordered set used to deduplicate matches.
///
/// The first occurrence of a value keeps its position; later duplicates are
/// dropped.
#[derive(Debug, Clone)]
pub struct MatchSet<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T: Eq + Hash + Clone> MatchSet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Add a value; returns `false` if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> Default for MatchSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Characters of surrounding text kept on each side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    pub before: usize,
    pub after: usize,
}

impl ContextWindow {
    pub const fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Slice of `text` covering `start..end` widened by the window.
    ///
    /// Counts characters, clips at the text bounds and never splits a code
    /// point. `start` and `end` must be char boundaries.
    pub fn around<'a>(&self, text: &'a str, start: usize, end: usize) -> &'a str {
        let from = text[..start]
            .char_indices()
            .rev()
            .take(self.before)
            .last()
            .map_or(start, |(i, _)| i);
        let to = text[end..]
            .char_indices()
            .nth(self.after)
            .map_or(text.len(), |(i, _)| end + i);
        &text[from..to]
    }
}

/// List extractor driven by an ordered set of patterns.
///
/// Scans every pattern in order, left to right, optionally widens each match
/// by a context window, drops candidates that reach `max_chars`, deduplicates
/// and keeps at most `limit` results.
#[derive(Debug, Clone, Copy)]
pub struct PatternExtractor {
    patterns: &'static [Regex],
    window: Option<ContextWindow>,
    max_chars: Option<usize>,
    limit: usize,
}

impl PatternExtractor {
    pub const fn new(patterns: &'static [Regex], limit: usize) -> Self {
        Self {
            patterns,
            window: None,
            max_chars: None,
            limit,
        }
    }

    /// Widen each match by `before`/`after` characters.
    pub const fn with_context(mut self, before: usize, after: usize) -> Self {
        self.window = Some(ContextWindow::new(before, after));
        self
    }

    /// Reject candidates whose length reaches `max_chars` characters.
    pub const fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }
}

impl FieldExtractor for PatternExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<String> {
        let mut found = MatchSet::new();

        for pattern in self.patterns {
            for m in pattern.find_iter(text) {
                let candidate = match self.window {
                    Some(window) => window.around(text, m.start(), m.end()),
                    None => m.as_str(),
                }
                .trim();

                if candidate.is_empty() {
                    continue;
                }
                if let Some(max) = self.max_chars {
                    if candidate.chars().count() >= max {
                        continue;
                    }
                }

                found.insert(candidate.to_string());
                if found.len() >= self.limit {
                    return found.into_vec();
                }
            }
        }

        found.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use pretty_assertions::assert_eq;

    lazy_static! {
        static ref WORDS: Vec<Regex> = vec![
            Regex::new(r"(?i)grant").unwrap(),
            Regex::new(r"(?i)fund\w*").unwrap(),
        ];
    }

    #[test]
    fn test_match_set_keeps_first_occurrence() {
        let mut set = MatchSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.into_vec(), vec!["b", "a"]);
    }

    #[test]
    fn test_context_window_clips_to_bounds() {
        let text = "0123456789";
        let window = ContextWindow::new(3, 2);
        assert_eq!(window.around(text, 5, 6), "234567");
        assert_eq!(window.around(text, 1, 2), "0123");
        assert_eq!(window.around(text, 9, 10), "6789");
    }

    #[test]
    fn test_context_window_counts_characters() {
        let text = "ééé$5ééé";
        let start = text.find('$').unwrap();
        let window = ContextWindow::new(2, 2);
        assert_eq!(window.around(text, start, start + 2), "éé$5éé");
    }

    #[test]
    fn test_context_window_zero_width() {
        let window = ContextWindow::new(0, 0);
        assert_eq!(window.around("abc", 1, 2), "b");
    }

    #[test]
    fn test_pattern_order_then_position() {
        let extractor = PatternExtractor::new(&WORDS, 10);
        let found = extractor.extract_all("Funding for a GRANT, more funds, another grant");
        assert_eq!(found, vec!["GRANT", "grant", "Funding", "funds"]);
    }

    #[test]
    fn test_limit_and_dedup() {
        let extractor = PatternExtractor::new(&WORDS, 2);
        let found = extractor.extract_all("grant grant fund fund funds");
        assert_eq!(found, vec!["grant", "fund"]);
    }

    #[test]
    fn test_max_chars_rejects_long_context() {
        let extractor = PatternExtractor::new(&WORDS, 10)
            .with_context(20, 20)
            .with_max_chars(10);
        assert!(extractor.extract_all("a very long sentence about a grant program").is_empty());
        assert_eq!(extractor.extract_all("a grant"), vec!["a grant"]);
    }

    #[test]
    fn test_extract_returns_first() {
        let extractor = PatternExtractor::new(&WORDS, 10);
        assert_eq!(extractor.extract("funds and grants"), Some("grant".to_string()));
        assert_eq!(extractor.extract("nothing here"), None);
    }
}
