//! Analyzer facade combining every field extractor into one result.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::analysis::{AnalysisResult, DocumentInsights, Requirements};
use crate::util::{calculate_reading_time, word_count};

use super::rules::{
    extract_application_sections, extract_currency_amounts, extract_dates,
    extract_document_requirements, extract_focus_areas, extract_funding_amount,
    extract_geographic_requirements, extract_organization, extract_success_tips, extract_title,
    parse_eligibility, parse_financial_requirements, parse_timeline,
};

/// Stateless RFP analyzer.
///
/// Every extractor runs independently over the full text, so the result is a
/// pure function of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfpAnalyzer;

impl RfpAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze document text.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();
        debug!("Analyzing {} characters of text", text.len());

        let result = AnalysisResult {
            title: extract_title(text),
            organization: extract_organization(text),
            funding_amount: extract_funding_amount(text),
            requirements: self.requirements(text),
            application_sections: extract_application_sections(text),
            success_tips: extract_success_tips(text),
        };

        info!(
            "Analysis of \"{}\" finished in {}ms: {} requirements, {} sections, {} tips",
            result.title,
            start.elapsed().as_millis(),
            result.requirements.total(),
            result.application_sections.len(),
            result.success_tips.len()
        );
        result
    }

    /// Requirement passages for every category.
    pub fn requirements(&self, text: &str) -> Requirements {
        Requirements {
            eligibility: parse_eligibility(text),
            financial: parse_financial_requirements(text),
            timeline: parse_timeline(text),
            geographic: extract_geographic_requirements(text),
            focus_areas: extract_focus_areas(text),
            documents: extract_document_requirements(text),
        }
    }

    /// Lexical statistics shown next to an analysis.
    pub fn insights(&self, text: &str) -> DocumentInsights {
        DocumentInsights {
            word_count: word_count(text),
            reading_time_minutes: calculate_reading_time(text),
            currency_amounts: extract_currency_amounts(text),
            dates: extract_dates(text),
        }
    }
}

/// Analyze RFP text with the default analyzer.
pub fn analyze_rfp(text: &str) -> AnalysisResult {
    RfpAnalyzer::new().analyze(text)
}
