//! Application section structure.

use super::patterns::SECTION_HEADERS;
use super::{FieldExtractor, MatchSet};
use crate::models::analysis::ApplicationSection;

/// Maximum number of sections reported.
pub const MAX_SECTIONS: usize = 8;

/// Section titles must be longer than this many characters.
const MIN_TITLE_CHARS: usize = 5;

/// Sections reported when the document has no recognisable headers.
const FALLBACK_SECTIONS: [(&str, &str); 4] = [
    ("Organization Information", "Basic organizational details"),
    ("Project Description", "Detailed project narrative"),
    ("Budget", "Financial information and budget"),
    ("Evaluation", "Success metrics and evaluation plan"),
];

/// Extracts numbered section and part headers.
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// The generic application structure.
    pub fn fallback() -> Vec<ApplicationSection> {
        FALLBACK_SECTIONS
            .iter()
            .map(|(title, description)| ApplicationSection::new(*title, *description))
            .collect()
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SectionExtractor {
    type Output = ApplicationSection;

    fn extract_all(&self, text: &str) -> Vec<ApplicationSection> {
        let mut titles = MatchSet::new();

        'scan: for pattern in SECTION_HEADERS.iter() {
            for caps in pattern.captures_iter(text) {
                let Some(title) = caps.get(1).map(|m| m.as_str().trim()) else {
                    continue;
                };
                if title.chars().count() <= MIN_TITLE_CHARS {
                    continue;
                }

                titles.insert(title.to_string());
                if titles.len() >= MAX_SECTIONS {
                    break 'scan;
                }
            }
        }

        titles
            .into_vec()
            .into_iter()
            .map(|title| {
                let description = format!("Section focusing on {}", title.to_lowercase());
                ApplicationSection::new(title, description)
            })
            .collect()
    }
}

/// Application sections, falling back to the generic four-part structure.
pub fn extract_application_sections(text: &str) -> Vec<ApplicationSection> {
    let sections = SectionExtractor::new().extract_all(text);
    if sections.is_empty() {
        SectionExtractor::fallback()
    } else {
        sections
    }
}
