//! Serve command - run the web front end and JSON API.

use clap::Args;
use console::style;

use super::load_config;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides config and HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    println!(
        "{} Serving on http://{}:{}",
        style("ℹ").blue(),
        config.server.host,
        config.server.port
    );

    rfpa_web::serve(config).await
}
