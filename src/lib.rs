//! Mastercard Developers MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing
//! Mastercard's public developer documentation and API specifications as
//! callable tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Shared infrastructure - configuration, context derivation,
//!   the outbound API client, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The MCP tool catalog and its per-context registration
//!
//! # Example
//!
//! ```rust,no_run
//! use mastercard_developers_mcp::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Run the server over stdio...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
