//! Pre-flight checks for uploads, extracted text and the prompt form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::rules::patterns::FUNDING_FIELD;
use crate::util::allowed_file;

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// Minimum trimmed length, in characters, of analyzable text.
pub const MIN_TEXT_CHARS: usize = 100;

/// Maximum length, in characters, of analyzable text.
pub const MAX_TEXT_CHARS: usize = 500_000;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Check an uploaded file name against the default extension list.
pub fn validate_file_upload(filename: Option<&str>) -> Validation {
    validate_file_upload_against(filename, &ALLOWED_EXTENSIONS)
}

/// Check an uploaded file name against a configured extension list.
pub fn validate_file_upload_against<S: AsRef<str>>(filename: Option<&str>, allowed: &[S]) -> Validation {
    let Some(filename) = filename else {
        return Validation::fail("No file provided");
    };
    if filename.is_empty() {
        return Validation::fail("No file selected");
    }
    if !allowed_file(filename, allowed) {
        let list = allowed.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
        return Validation::fail(format!("Invalid file type. Allowed: {}", list));
    }
    Validation::pass("File is valid")
}

/// Check that extracted text is long enough to analyze and not too large.
pub fn validate_text_content(text: &str) -> Validation {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return Validation::fail("Document appears to be empty or too short for analysis");
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Validation::fail("Document is too large for processing");
    }
    Validation::pass("Text content is valid")
}

/// Prompt generator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    #[serde(rename = "orgName")]
    pub org_name: String,

    pub mission: String,

    #[serde(rename = "fundingAmount")]
    pub funding_amount: String,

    /// Stored analysis to draw requirements from, if any.
    #[serde(rename = "analysisId")]
    pub analysis_id: String,
}

impl FormData {
    /// The referenced analysis id, when it parses.
    pub fn analysis_id(&self) -> Option<i64> {
        self.analysis_id.trim().parse().ok()
    }
}

/// Field name to error messages; empty when the form is valid.
pub type FormErrors = BTreeMap<String, Vec<String>>;

pub fn validate_form_data(form: &FormData) -> FormErrors {
    let mut errors = FormErrors::new();
    let mut push = |field: &str, message: &str| {
        errors.entry(field.to_string()).or_default().push(message.to_string());
    };

    if form.org_name.trim().is_empty() {
        push("orgName", "Organization name is required");
    }

    let mission = form.mission.trim();
    if !mission.is_empty() && mission.chars().count() < 20 {
        push("mission", "Mission statement should be at least 20 characters");
    }

    let funding = form.funding_amount.trim();
    if !funding.is_empty() && !FUNDING_FIELD.is_match(funding) {
        push("fundingAmount", "Invalid funding amount format");
    }

    errors
}
