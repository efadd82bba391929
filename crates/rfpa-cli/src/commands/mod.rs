//! Subcommands and the helpers they share.

pub mod analyze;
pub mod batch;
pub mod config;
pub mod history;
pub mod serve;

use std::path::{Path, PathBuf};

use anyhow::Context;
use rfpa_core::validation::{validate_file_upload_against, validate_text_content};
use rfpa_core::{AnalysisResult, AppConfig, DocumentInsights, RfpAnalyzer, extract_text_from_file};
use tracing::debug;

/// Output format for analysis results.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used when writing one result per input file.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rfpa")
        .join("config.json")
}

/// Build the configuration: defaults, then the JSON file, then `.env` and
/// the process environment.
///
/// An explicit `--config` path must exist; the default path is optional.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => AppConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                AppConfig::from_file(&path)
                    .with_context(|| format!("failed to load config from {}", path.display()))?
            } else {
                AppConfig::default()
            }
        }
    };

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
    config.apply_env()?;
    Ok(config)
}

/// Analysis of one input file.
pub struct FileReport {
    pub analysis: AnalysisResult,
    pub insights: DocumentInsights,
}

/// Run the upload checks, extract text and analyze a file.
pub fn analyze_file(path: &Path, config: &AppConfig) -> anyhow::Result<FileReport> {
    let filename = path.file_name().and_then(|n| n.to_str());
    let check = validate_file_upload_against(filename, &config.upload.allowed_extensions);
    if !check.is_valid() {
        anyhow::bail!("{}", check.message);
    }

    let text = extract_text_from_file(path);
    let check = validate_text_content(&text);
    if !check.is_valid() {
        anyhow::bail!("{}", check.message);
    }

    let analyzer = RfpAnalyzer::new();
    Ok(FileReport {
        analysis: analyzer.analyze(&text),
        insights: analyzer.insights(&text),
    })
}

/// Render a report in the requested format.
pub fn format_report(report: &FileReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.analysis)?),
        OutputFormat::Csv => format_csv(&report.analysis),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

/// One row per requirement passage, plus a row per application section.
fn format_csv(analysis: &AnalysisResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["title", "organization", "funding_amount", "category", "value"])?;

    let head = [
        analysis.title.as_str(),
        analysis.organization.as_str(),
        analysis.funding_amount.as_str(),
    ];
    for (category, items) in analysis.requirements.categories() {
        for item in items {
            wtr.write_record([head[0], head[1], head[2], category.key(), item])?;
        }
    }
    for section in &analysis.application_sections {
        wtr.write_record([head[0], head[1], head[2], "application_section", &section.title])?;
    }
    for tip in &analysis.success_tips {
        wtr.write_record([head[0], head[1], head[2], "success_tip", tip])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &FileReport) -> String {
    let analysis = &report.analysis;
    let insights = &report.insights;
    let mut output = String::new();

    output.push_str(&format!("Title: {}\n", analysis.title));
    output.push_str(&format!("Organization: {}\n", analysis.organization));
    output.push_str(&format!("Funding: {}\n", analysis.funding_amount));
    output.push('\n');

    for (category, items) in analysis.requirements.categories() {
        if items.is_empty() {
            continue;
        }
        output.push_str(&format!("{}:\n", category.label()));
        for item in items {
            output.push_str(&format!("  - {}\n", item));
        }
        output.push('\n');
    }

    if !analysis.application_sections.is_empty() {
        output.push_str("Application Sections:\n");
        for (i, section) in analysis.application_sections.iter().enumerate() {
            output.push_str(&format!("  {}. {}: {}\n", i + 1, section.title, section.description));
        }
        output.push('\n');
    }

    if !analysis.success_tips.is_empty() {
        output.push_str("Success Tips:\n");
        for tip in &analysis.success_tips {
            output.push_str(&format!("  - {}\n", tip));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Words: {} (about {} min read)\n",
        insights.word_count, insights.reading_time_minutes
    ));
    if !insights.currency_amounts.is_empty() {
        output.push_str(&format!("Amounts: {}\n", insights.currency_amounts.join(", ")));
    }
    if !insights.dates.is_empty() {
        output.push_str(&format!("Dates: {}\n", insights.dates.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpa_core::ApplicationSection;
    use pretty_assertions::assert_eq;

    fn report() -> FileReport {
        let mut analysis = AnalysisResult::default();
        analysis.title = "Community RFP".to_string();
        analysis.requirements.timeline.push("Deadline by May 1, 2025".to_string());
        analysis
            .application_sections
            .push(ApplicationSection::new("Budget", "Financial information and budget"));
        FileReport {
            analysis,
            insights: DocumentInsights {
                word_count: 450,
                reading_time_minutes: 2,
                currency_amounts: vec!["$5,000".to_string()],
                dates: Vec::new(),
            },
        }
    }

    #[test]
    fn test_text_format() {
        let text = format_text(&report());
        assert!(text.starts_with("Title: Community RFP\n"));
        assert!(text.contains("Timeline:\n  - Deadline by May 1, 2025\n"));
        assert!(text.contains("  1. Budget: Financial information and budget\n"));
        assert!(text.contains("Words: 450 (about 2 min read)\n"));
        assert!(text.contains("Amounts: $5,000\n"));
        assert!(!text.contains("Eligibility:"));
        assert!(!text.contains("Dates:"));
    }

    #[test]
    fn test_csv_format() {
        let csv = format_csv(&report().analysis).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "title,organization,funding_amount,category,value");
        assert_eq!(
            lines[1],
            "Community RFP,Organization,Amount not specified,timeline,\"Deadline by May 1, 2025\""
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(load_config(missing.to_str()).is_err());
    }

    #[test]
    fn test_analyze_rejects_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "x".repeat(200)).unwrap();
        let err = analyze_file(&path, &AppConfig::default()).err().unwrap();
        assert!(err.to_string().starts_with("Invalid file type"), "{err}");
    }
}
