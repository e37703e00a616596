// Standalone MCP server binary

use anyhow::{Context, Result};
use raindrop_mcp::server::McpServer;
use raindrop_mcp::tools::raindrop_registry;
use raindrop_mcp::McpConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Raindrop MCP Server starting...");

    let config = McpConfig::from_env().context("Failed to load configuration")?;
    let client = config.client().context("Failed to create Raindrop client")?;

    let registry = raindrop_registry(&client);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
