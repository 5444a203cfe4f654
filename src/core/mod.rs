//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, context derivation, the outbound API client, error
//! handling, server lifecycle management, and the stdio transport.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod server;
pub mod transport;

pub use api::{ApiClient, ApiError};
pub use config::{Config, ContextConfig, parse_args};
pub use context::{ContextError, ToolContext};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
