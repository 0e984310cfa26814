//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging on stderr, and serves the VPS
//! tools on the configured transport. A missing `VPS_API_KEY` aborts
//! startup with a non-zero exit code.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use vps_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(base_url = %config.api.base_url, "Upstream API configured");

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config).context("Failed to create upstream API client")?;

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honoured; `MCP_LOG_LEVEL` sets the baseline.
/// Output goes to stderr because stdout carries the protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
