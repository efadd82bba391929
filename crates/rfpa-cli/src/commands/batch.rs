//! Batch command - analyze many documents matched by a glob pattern.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rfpa_core::util::{allowed_file, clean_text};
use rfpa_core::{AnalysisResult, AnalysisStore};
use tracing::{debug, error, warn};

use super::{FileReport, OutputFormat, analyze_file, format_report, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Store each analysis in the history database
    #[arg(long)]
    save: bool,
}

/// Outcome of analyzing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<FileReport>,
    saved_id: Option<i64>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| allowed_file(name, &config.upload.allowed_extensions))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to analyze",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let store = if args.save {
        Some(AnalysisStore::open(&config.storage.database_path)?)
    } else {
        None
    };

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = analyze_file(&path, &config).and_then(|report| {
            let saved_id = match &store {
                Some(store) => Some(save(store, &path, &report.analysis)?),
                None => None,
            };
            Ok((report, saved_id))
        });
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok((report, saved_id)) => results.push(ProcessResult {
                path,
                report: Some(report),
                saved_id,
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    error!("Failed to analyze {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Analysis failed for {}: {}", path.display(), error_msg);
                }
                warn!("Failed to analyze {}: {}", path.display(), error_msg);
                results.push(ProcessResult {
                    path,
                    report: None,
                    saved_id: None,
                    error: Some(error_msg),
                    processing_time_ms,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(report) = &result.report else {
                continue;
            };
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("analysis");
            let output_path = output_dir.join(format!("{}.{}", stem, args.format.extension()));
            fs::write(&output_path, format_report(report, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Analyzed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn save(store: &AnalysisStore, path: &Path, analysis: &AnalysisResult) -> anyhow::Result<i64> {
    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    Ok(store.save_analysis(filename, &analysis.title, &analysis.organization, analysis)?)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let wtr = csv::Writer::from_path(path)?;
    write_summary_records(wtr, results)
}

fn write_summary_records<W: std::io::Write>(
    mut wtr: csv::Writer<W>,
    results: &[ProcessResult],
) -> anyhow::Result<()> {
    wtr.write_record([
        "filename",
        "status",
        "title",
        "organization",
        "funding_amount",
        "requirements",
        "sections",
        "word_count",
        "analysis_id",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time_ms = result.processing_time_ms.to_string();

        match &result.report {
            Some(report) => {
                let analysis = &report.analysis;
                // Organization matches may span line breaks.
                wtr.write_record([
                    filename,
                    "success",
                    &clean_text(&analysis.title),
                    &clean_text(&analysis.organization),
                    &analysis.funding_amount,
                    &analysis.requirements.total().to_string(),
                    &analysis.application_sections.len().to_string(),
                    &report.insights.word_count.to_string(),
                    &result.saved_id.map(|id| id.to_string()).unwrap_or_default(),
                    &time_ms,
                    "",
                ])?;
            }
            None => {
                wtr.write_record([
                    filename,
                    "error",
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    &time_ms,
                    result.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rfpa_core::DocumentInsights;

    #[test]
    fn test_summary_rows() {
        let results = vec![
            ProcessResult {
                path: PathBuf::from("docs/a.txt"),
                report: Some(FileReport {
                    analysis: AnalysisResult::default(),
                    insights: DocumentInsights {
                        word_count: 120,
                        ..DocumentInsights::default()
                    },
                }),
                saved_id: Some(7),
                error: None,
                processing_time_ms: 3,
            },
            ProcessResult {
                path: PathBuf::from("docs/b.pdf"),
                report: None,
                saved_id: None,
                error: Some("Document appears to be empty or too short for analysis".to_string()),
                processing_time_ms: 1,
            },
        ];

        let mut buf = Vec::new();
        write_summary_records(csv::Writer::from_writer(&mut buf), &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "a.txt,success,RFP Document,Organization,Amount not specified,0,0,120,7,3,");
        assert_eq!(
            lines[2],
            "b.pdf,error,,,,,,,,1,Document appears to be empty or too short for analysis"
        );
    }

    #[test]
    fn test_summary_flattens_multiline_fields() {
        let mut analysis = AnalysisResult::default();
        analysis.organization = "Lakeside\n  Health Foundation".to_string();
        let results = vec![ProcessResult {
            path: PathBuf::from("c.txt"),
            report: Some(FileReport {
                analysis,
                insights: DocumentInsights::default(),
            }),
            saved_id: None,
            error: None,
            processing_time_ms: 0,
        }];

        let mut buf = Vec::new();
        write_summary_records(csv::Writer::from_writer(&mut buf), &results).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains(",Lakeside Health Foundation,"), "{text}");
    }
}
