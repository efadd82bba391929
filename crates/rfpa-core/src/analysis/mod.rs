//! RFP analysis: the rule-based field extractors and the facade that
//! composes them.

mod analyzer;
pub mod rules;

pub use analyzer::{RfpAnalyzer, analyze_rfp};
