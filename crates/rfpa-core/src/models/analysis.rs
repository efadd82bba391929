//! Analysis result models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel title used when no RFP heading is found.
pub const DEFAULT_TITLE: &str = "RFP Document";

/// Sentinel organization used when no issuer is found.
pub const DEFAULT_ORGANIZATION: &str = "Organization";

/// Sentinel funding amount used when no amount is found.
pub const FUNDING_NOT_SPECIFIED: &str = "Amount not specified";

/// Aggregate result of analyzing one RFP document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Document title.
    pub title: String,

    /// Issuing organization.
    pub organization: String,

    /// Headline funding amount.
    pub funding_amount: String,

    /// Requirements grouped by category.
    pub requirements: Requirements,

    /// Application structure.
    pub application_sections: Vec<ApplicationSection>,

    /// Passages hinting at what reviewers look for.
    pub success_tips: Vec<String>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            funding_amount: FUNDING_NOT_SPECIFIED.to_string(),
            requirements: Requirements::default(),
            application_sections: Vec::new(),
            success_tips: Vec::new(),
        }
    }
}

/// Requirement passages grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub eligibility: Vec<String>,
    pub financial: Vec<String>,
    pub timeline: Vec<String>,
    pub geographic: Vec<String>,
    pub focus_areas: Vec<String>,
    pub documents: Vec<String>,
}

impl Requirements {
    /// Categories with their display labels, in display order.
    pub fn categories(&self) -> [(RequirementCategory, &[String]); 6] {
        [
            (RequirementCategory::Eligibility, self.eligibility.as_slice()),
            (RequirementCategory::Financial, self.financial.as_slice()),
            (RequirementCategory::Timeline, self.timeline.as_slice()),
            (RequirementCategory::Geographic, self.geographic.as_slice()),
            (RequirementCategory::FocusAreas, self.focus_areas.as_slice()),
            (RequirementCategory::Documents, self.documents.as_slice()),
        ]
    }

    /// Total number of requirement passages across all categories.
    pub fn total(&self) -> usize {
        self.categories().iter().map(|(_, items)| items.len()).sum()
    }
}

/// Requirement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Eligibility,
    Financial,
    Timeline,
    Geographic,
    FocusAreas,
    Documents,
}

impl RequirementCategory {
    /// Key used in the JSON representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Eligibility => "eligibility",
            Self::Financial => "financial",
            Self::Timeline => "timeline",
            Self::Geographic => "geographic",
            Self::FocusAreas => "focus_areas",
            Self::Documents => "documents",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Eligibility => "Eligibility",
            Self::Financial => "Financial",
            Self::Timeline => "Timeline",
            Self::Geographic => "Geographic",
            Self::FocusAreas => "Focus Areas",
            Self::Documents => "Required Documents",
        }
    }
}

/// One section of the application structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSection {
    pub title: String,
    pub description: String,
}

impl ApplicationSection {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Lexical statistics about a document, computed alongside the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInsights {
    /// Whitespace-separated word count.
    pub word_count: usize,

    /// Estimated reading time in minutes (at least 1).
    pub reading_time_minutes: usize,

    /// Currency amounts mentioned anywhere in the text.
    pub currency_amounts: Vec<String>,

    /// Dates mentioned anywhere in the text.
    pub dates: Vec<String>,
}

/// A persisted analysis row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: i64,
    pub filename: String,
    pub title: String,
    pub organization: String,
    pub analysis: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl StoredAnalysis {
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            id: self.id,
            filename: self.filename.clone(),
            title: self.title.clone(),
            organization: self.organization.clone(),
            created_at: self.created_at,
        }
    }
}

/// A persisted analysis row without its analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub id: i64,
    pub filename: String,
    pub title: String,
    pub organization: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_sentinels() {
        let result = AnalysisResult::default();
        assert_eq!(result.title, DEFAULT_TITLE);
        assert_eq!(result.organization, DEFAULT_ORGANIZATION);
        assert_eq!(result.funding_amount, FUNDING_NOT_SPECIFIED);
        assert_eq!(result.requirements.total(), 0);
    }

    #[test]
    fn test_json_shape() {
        let mut result = AnalysisResult::default();
        result.requirements.focus_areas.push("youth education".to_string());
        result
            .application_sections
            .push(ApplicationSection::new("Budget", "Financial information and budget"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["funding_amount"], FUNDING_NOT_SPECIFIED);
        assert_eq!(json["requirements"]["focus_areas"][0], "youth education");
        assert!(json["requirements"]["eligibility"].as_array().unwrap().is_empty());
        assert_eq!(json["application_sections"][0]["title"], "Budget");
    }

    #[test]
    fn test_category_keys_match_json() {
        let json = serde_json::to_value(Requirements::default()).unwrap();
        for (category, _) in Requirements::default().categories() {
            assert!(json.get(category.key()).is_some(), "{}", category.key());
        }
    }
}
