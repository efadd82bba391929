//! Analyze command - extract RFP fields from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rfpa_core::AnalysisStore;
use tracing::{debug, info};

use super::{OutputFormat, analyze_file, format_report, load_config};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input document (PDF, DOCX or TXT)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Store the analysis in the history database
    #[arg(long)]
    save: bool,
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Analyzing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Analyzing {}", args.input.display()));

    let report = analyze_file(&args.input, &config);
    pb.finish_and_clear();
    let report = report?;

    if args.save {
        let store = AnalysisStore::open(&config.storage.database_path)?;
        let filename = args
            .input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let analysis = &report.analysis;
        let id = store.save_analysis(filename, &analysis.title, &analysis.organization, analysis)?;
        eprintln!("{} Saved analysis #{}", style("✓").green(), id);
    }

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
