//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output, the default transport
//! for locally-spawned servers. Logging goes to stderr so stdout stays
//! reserved for protocol frames.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::server::McpServer;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// IO error during transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server initialization error.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// Service error from rmcp.
    #[error("Service error: {0}")]
    Service(String),
}

impl TransportError {
    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }
}

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the server over stdin/stdout until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::Service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
