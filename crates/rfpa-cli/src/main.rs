//! Command-line front end for the RFP document analyzer.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{analyze, batch, config, history, serve};

/// RFP analyzer - Surface funding, eligibility and deadlines from RFP documents
#[derive(Parser)]
#[command(name = "rfpa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a single RFP document
    Analyze(analyze::AnalyzeArgs),

    /// Analyze multiple RFP documents
    Batch(batch::BatchArgs),

    /// Browse stored analyses
    History(history::HistoryArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.as_deref();

    // Load errors are reported by the subcommand itself.
    let server_debug = matches!(cli.command, Commands::Serve(_))
        && commands::load_config(config_path).is_ok_and(|config| config.server.debug);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose, server_debug))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve(args) => serve::run(args, config_path).await,
        Commands::Analyze(args) => analyze::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::History(args) => history::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}

/// Subscriber level from the `-v` count, raised to DEBUG for a server
/// configured with `debug = true`.
fn log_level(verbose: u8, server_debug: bool) -> Level {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    if server_debug {
        level.max(Level::DEBUG)
    } else {
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_level(0, false), Level::WARN);
        assert_eq!(log_level(1, false), Level::INFO);
        assert_eq!(log_level(2, false), Level::DEBUG);
        assert_eq!(log_level(5, false), Level::TRACE);
    }

    #[test]
    fn test_server_debug_raises_level() {
        assert_eq!(log_level(0, true), Level::DEBUG);
        assert_eq!(log_level(1, true), Level::DEBUG);
        assert_eq!(log_level(3, true), Level::TRACE);
    }

    #[test]
    fn test_serve_args_parse() {
        let cli = Cli::parse_from(["rfpa", "serve", "--port", "8081"]);
        assert!(matches!(cli.command, Commands::Serve(_)));
        assert_eq!(cli.verbose, 0);
    }
}
