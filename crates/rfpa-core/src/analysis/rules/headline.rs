//! Single-value headline fields: title, issuing organization and funding
//! amount.

use super::FieldExtractor;
use super::patterns::{FUNDING_AMOUNT, ORGANIZATION};
use crate::models::analysis::{DEFAULT_ORGANIZATION, DEFAULT_TITLE, FUNDING_NOT_SPECIFIED};

/// Number of leading lines searched for the title.
const TITLE_SEARCH_LINES: usize = 10;

/// Title extractor: the first early line mentioning an RFP.
pub struct TitleExtractor;

impl TitleExtractor {
    pub fn new() -> Self {
        Self
    }

    fn is_title_line(line: &str) -> bool {
        let lower = line.to_lowercase();
        lower.contains("rfp") || lower.contains("request for proposal")
    }
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TitleExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .take(TITLE_SEARCH_LINES)
            .filter(|line| Self::is_title_line(line))
            .map(|line| line.trim().to_string())
            .collect()
    }
}

/// Issuing organization extractor.
pub struct OrganizationExtractor;

impl OrganizationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrganizationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OrganizationExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<String> {
        ORGANIZATION
            .iter()
            .filter_map(|pattern| pattern.captures(text))
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str().trim().to_string())
            .collect()
    }
}

/// Headline funding amount extractor.
pub struct FundingAmountExtractor;

impl FundingAmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FundingAmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FundingAmountExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<String> {
        FUNDING_AMOUNT
            .iter()
            .filter_map(|pattern| pattern.find(text))
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}

/// Document title, or `"RFP Document"` when no early line mentions an RFP.
pub fn extract_title(text: &str) -> String {
    TitleExtractor::new()
        .extract(text)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Issuing organization, or `"Organization"`.
pub fn extract_organization(text: &str) -> String {
    OrganizationExtractor::new()
        .extract(text)
        .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string())
}

/// Headline funding amount, or `"Amount not specified"`.
pub fn extract_funding_amount(text: &str) -> String {
    FundingAmountExtractor::new()
        .extract(text)
        .unwrap_or_else(|| FUNDING_NOT_SPECIFIED.to_string())
}
