//! rfpa-web: browser front end and JSON API for the RFP analyzer.
//!
//! Provides:
//!   - Upload form and recent-analyses listing
//!   - Rendered analysis pages
//!   - Prompt generator for proposal drafting
//!   - JSON endpoints for programmatic analysis

pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;

use std::net::SocketAddr;

use anyhow::Context;
use rfpa_core::AppConfig;
use tracing::info;

pub use error::WebError;
pub use router::build_router;
pub use state::AppState;

/// Run the web server until the process is stopped.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.server.host, config.server.port))?;

    let state = AppState::from_config(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
