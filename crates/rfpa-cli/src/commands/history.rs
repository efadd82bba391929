//! History command - browse stored analyses.

use clap::{Args, Subcommand};
use console::style;
use rfpa_core::AnalysisStore;

use super::load_config;

/// Arguments for the history command.
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List the most recent analyses
    List {
        /// Number of analyses to show (default: storage.recent_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print one stored analysis as JSON
    Show {
        /// Analysis id
        id: i64,
    },
}

pub async fn run(args: HistoryArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = AnalysisStore::open(&config.storage.database_path)?;

    match args.command {
        HistoryCommand::List { limit } => {
            let limit = limit.unwrap_or(config.storage.recent_limit);
            let recent = store.recent_analyses(limit)?;
            if recent.is_empty() {
                println!("{} No analyses stored yet.", style("ℹ").blue());
                return Ok(());
            }
            for row in recent {
                println!(
                    "{:>5}  {}  {}  {} ({})",
                    style(row.id).bold(),
                    row.created_at.format("%Y-%m-%d %H:%M"),
                    row.filename,
                    row.title,
                    row.organization
                );
            }
        }
        HistoryCommand::Show { id } => match store.get_analysis(id)? {
            Some(stored) => println!("{}", serde_json::to_string_pretty(&stored)?),
            None => anyhow::bail!("Analysis not found: {}", id),
        },
    }

    Ok(())
}
