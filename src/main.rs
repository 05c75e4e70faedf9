//! Pantry Availability Engine
//!
//! An MCP server for checking recipes against household stock.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use pantry::build_info;
use pantry::config::Config;
use pantry::mcp::PantryService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pantry=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    tracing::info!(
        "Expiry windows: soon <= {} days, later <= {} days; shopping category '{}'",
        config.thresholds.soon_days,
        config.thresholds.later_days,
        config.shopping_category
    );
    if let Some(today) = config.today_override {
        tracing::warn!("Using fixed date {} as today", today);
    }

    eprintln!("Starting MCP server on stdio...");
    let service = PantryService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
