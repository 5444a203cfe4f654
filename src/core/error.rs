//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type aggregating the per-layer errors,
//! providing consistent error handling across the application. Context
//! derivation failures stay transparent so their remediation message reaches
//! the operator unchanged.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configured service / API specification URL failed validation.
    /// Startup-fatal: no tools are registered.
    #[error(transparent)]
    Context(#[from] crate::core::context::ContextError),

    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error from the outbound API client.
    #[error("API error: {0}")]
    Api(#[from] crate::core::api::ApiError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
