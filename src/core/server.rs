//! MCP server implementation and lifecycle management.
//!
//! The server derives its [`ToolContext`](crate::core::context::ToolContext)
//! once at construction and builds the tool router from it; both are
//! immutable afterwards. A context derivation failure is startup-fatal, so a
//! misconfigured server never registers any tools.

use std::sync::Arc;

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};

use super::api::ApiClient;
use super::config::Config;
use super::context::ToolContext;
use super::error;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
#[derive(Clone, Debug)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Derived context, immutable for the lifetime of the server.
    context: Arc<ToolContext>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> error::Result<Self> {
        let context = Arc::new(ToolContext::from_config(&config.context)?);
        let client = Arc::new(ApiClient::new()?);

        Ok(Self {
            tool_router: build_tool_router(context.clone(), client),
            context,
            config: Arc::new(config),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the derived tool context.
    pub fn context(&self) -> &ToolContext {
        &self.context
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Browse Mastercard Developers documentation and API specifications. \
                 Use get-services-list to discover service ids, the documentation tools \
                 to read guides and pages, and the API operation tools to inspect \
                 OpenAPI specifications."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ContextConfig;
    use crate::core::context::ContextError;
    use crate::core::error::Error;

    fn config_with(context: ContextConfig) -> Config {
        Config {
            context,
            ..Config::default()
        }
    }

    #[test]
    fn test_new_with_empty_config() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.context(), &ToolContext::default());
        assert_eq!(server.name(), "mastercard-developers-mcp");
    }

    #[test]
    fn test_new_with_service_config() {
        let server = McpServer::new(config_with(ContextConfig {
            service: Some("https://developer.mastercard.com/open-banking-us/documentation/".into()),
            api_specification: None,
        }))
        .unwrap();
        assert_eq!(server.context().service_id.as_deref(), Some("open-banking-us"));
    }

    #[test]
    fn test_new_fails_on_invalid_service_url() {
        let err = McpServer::new(config_with(ContextConfig {
            service: Some("https://developer.mastercard.com/bad_id/documentation/".into()),
            api_specification: None,
        }))
        .unwrap_err();
        assert!(matches!(err, Error::Context(ContextError::InvalidServiceUrl)));
    }
}
