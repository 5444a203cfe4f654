//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration from the environment and the
//! command line, and starts the server on the stdio transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use mastercard_developers_mcp::core::{Config, McpServer, StdioTransport, parse_args};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let mut config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    // CLI arguments override environment values
    let overrides = parse_args(std::env::args().skip(1));
    config.context.merge(overrides);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if let Some(service) = &config.context.service {
        info!("Configured Service URL: {}", service);
    }

    if let Some(api_specification) = &config.context.api_specification {
        info!("Configured API Specification URL: {}", api_specification);
    }

    // Context derivation failures are fatal here, before any tool registers
    let server = McpServer::new(config)?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr so
/// stdout stays reserved for the protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
