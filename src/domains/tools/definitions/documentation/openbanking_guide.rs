//! Open Banking integration guide tool.
//!
//! Fetches a fixed quick-start page; takes no arguments in any context.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{JsonObject, Tool},
};
use tracing::info;

use crate::core::api::ApiClient;
use crate::core::context::ToolContext;
use crate::domains::tools::ToolError;

use super::super::common::{call_result, object_schema};

const GUIDE_PATH: &str = "/open-banking-us/documentation/quick-start-guide/index.md";

/// Open Banking integration guide tool.
pub struct GetOpenBankingGuideTool;

impl GetOpenBankingGuideTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-openbanking-integration-guide";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get Open Banking Integration Guide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieves the comprehensive Open Banking integration guide including setup instructions,\nAPI usage examples, and implementation best practices.";

    /// Execute the tool.
    pub async fn execute(client: &ApiClient) -> Result<String, ToolError> {
        info!("Fetching Open Banking quick-start guide");
        Ok(client.get_documentation_page(GUIDE_PATH).await?)
    }

    /// Create the Tool model.
    pub fn to_tool(_context: &ToolContext) -> Tool {
        Tool {
            name: Self::METHOD.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: object_schema(JsonObject::new(), &[]),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.to_string()),
        }
    }

    /// Create a ToolRoute bound to the given context and client.
    pub fn create_route<S>(context: Arc<ToolContext>, client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(&context), move |_ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            async move { Ok(call_result(Self::execute(&client).await)) }.boxed()
        })
    }
}
