//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! The registry decides which tools exist for a context; this module only
//! turns that filtered catalog into routes for the transport layer.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::api::ApiClient;
use crate::core::context::ToolContext;

use super::registry::ToolRegistry;

/// Build the tool router with every tool enabled for the given context.
pub fn build_tool_router<S>(context: Arc<ToolContext>, client: Arc<ApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::new(context, client)
        .routes()
        .into_iter()
        .fold(ToolRouter::new(), |router, route| router.with_route(route))
}
