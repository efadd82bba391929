//! Regex patterns for RFP field extraction.
//!
//! Pattern lists are ordered: extractors scan them first to last, and for
//! single-value fields the first pattern that matches wins.

use lazy_static::lazy_static;
use regex::Regex;

/// Date shapes accepted by the timeline patterns: `12/15/2024`, `1-5-24`,
/// `December 15, 2024`.
const TIMELINE_DATE: &str = r"(?:\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\w+ \d{1,2}, \d{4})";

/// Issuer suffixes recognised by the organization patterns.
const ISSUER_SUFFIX: &str = r"(?:Foundation|Institute|University|Corporation|Union|Agency|Department)";

fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p.as_ref()).unwrap()).collect()
}

lazy_static! {
    // Headline funding amount
    pub static ref FUNDING_AMOUNT: Vec<Regex> = compile_all(&[
        r"(?i)\$[\d,]+(?:\s*-\s*\$[\d,]+)?\s*(?:total|available|per\s+grant)",
        r"(?i)up to \$[\d,]+",
        r"(?i)maximum.*?\$[\d,]+",
    ]);

    // Issuing organization (case-sensitive, capture group 1)
    pub static ref ORGANIZATION: Vec<Regex> = compile_all(&[
        [r"(?m)(?:from|by|issued by)\s+([A-Z][A-Za-z\s&]+", ISSUER_SUFFIX, ")"].concat(),
        [r"(?m)^([A-Z][A-Za-z\s&]+", ISSUER_SUFFIX, ")"].concat(),
    ]);

    // Financial requirements
    pub static ref FINANCIAL: Vec<Regex> = compile_all(&[
        r"(?i)\$[\d,]+(?:\s*-\s*\$[\d,]+)?",
        r"(?i)(?:minimum|maximum|range).*?(?:\$[\d,]+|\d+%)",
        r"(?i)budget.*?(?:\$[\d,]+|\d+%)",
        r"(?i)matching.*?funds?",
        r"(?i)(?:cannot exceed|must not exceed).*?(?:\$[\d,]+|\d+%)",
    ]);

    // Deadlines and program periods
    pub static ref TIMELINE: Vec<Regex> = compile_all(&[
        [r"(?i)(?:deadline|due|submit|application).*?(?:by|on|before).*?", TIMELINE_DATE].concat(),
        [r"(?i)(?:award|announcement|notification).*?", TIMELINE_DATE].concat(),
        r"(?i)(?:program period|grant period|project period).*?(?:\d{4}.*?\d{4})".to_string(),
        [r"(?i)(?:reporting|report).*?(?:due|deadline).*?", TIMELINE_DATE].concat(),
    ]);

    // Eligibility criteria
    pub static ref ELIGIBILITY: Vec<Regex> = compile_all(&[
        r"(?i)(?:must be|required to be|eligible).*?(?:501\(c\)\(3\)|nonprofit|tax-exempt)",
        r"(?i)(?:serve|target|focus on).*?(?:youth|students|ages? \d+-\d+)",
        r"(?i)(?:located in|serve|operate in).*?(?:county|counties|state|region)",
        r"(?i)(?:minimum|maximum).*?(?:budget|revenue|staff|experience)",
    ]);

    // Geographic constraints
    pub static ref GEOGRAPHIC: Vec<Regex> = compile_all(&[
        r"(?i)(?:serve|located in|operate in).*?(?:county|counties|state|region|area)",
        r"(?i)(?:California|New York|Texas|Florida).*?(?:county|counties)",
        r"(?i)(?:urban|rural|suburban).*?(?:areas|communities)",
    ]);

    // Program focus areas
    pub static ref FOCUS_AREAS: Vec<Regex> = compile_all(&[
        r"(?i)(?:focus|priority|pillar|area).*?(?:education|health|environment|community|youth)",
        r"(?i)(?:support|funding for).*?(?:programs|initiatives|projects)",
    ]);

    // Required documents
    pub static ref DOCUMENTS: Vec<Regex> = compile_all(&[
        r"(?i)(?:submit|provide|include|upload).*?(?:budget|financial|audit|form 990)",
        r"(?i)(?:letter of|certificate|license|permit)",
        r"(?i)(?:tax-exempt|501\(c\)\(3\)).*?(?:letter|determination|status)",
    ]);

    // Application section headers (case-sensitive, capture group 1)
    pub static ref SECTION_HEADERS: Vec<Regex> = compile_all(&[
        r"Section \d+[:.]?\s*([A-Za-z\s]+)",
        r"Part [A-Z\d]+[:.]?\s*([A-Za-z\s]+)",
        r"\d+\.\s*([A-Za-z\s]{10,50})",
    ]);

    // Reviewer hints
    pub static ref SUCCESS_TIPS: Vec<Regex> = compile_all(&[
        r"(?i)(?:successful|competitive|strong).*?(?:applications|proposals)",
        r"(?i)(?:tips?|recommendations?|suggestions?).*?(?:for|include)",
        r"(?i)(?:review.*?will|we look for|consider)",
    ]);

    // Standalone currency amounts
    pub static ref CURRENCY_AMOUNTS: Vec<Regex> = compile_all(&[
        r"(?i)\$[\d,]+(?:\.\d{2})?(?:\s*(?:million|billion|thousand|k|m|b))?",
        r"(?i)USD?\s*[\d,]+(?:\.\d{2})?",
        r"(?i)dollars?\s*[\d,]+(?:\.\d{2})?",
    ]);

    // Standalone dates
    pub static ref DATES: Vec<Regex> = compile_all(&[
        r"(?i)\b\d{1,2}/\d{1,2}/\d{2,4}\b",
        r"(?i)\b\d{1,2}-\d{1,2}-\d{2,4}\b",
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}\b",
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{1,2},\s+\d{4}\b",
    ]);

    // Form funding amount, e.g. "$25,000" or "1500.00"
    pub static ref FUNDING_FIELD: Regex = Regex::new(r"^\$?[\d,]+(?:\.\d{2})?$").unwrap();

    // Text cleaning
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    pub static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^\w\s\-.,;:()$%/]").unwrap();
}
