//! Services list tool.
//!
//! Lists every product and service on the Mastercard Developers platform.
//! The registry drops this tool when the context already pins a service.

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

/// Services list tool.
pub struct GetServicesListTool;

impl GetServicesListTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-services-list";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get Services List";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Lists all available Mastercard Developers Products and Services with their basic information\nincluding title, description, and service id.\nIMPORTANT: The response contains both 'Products' (business offerings) and 'Services' (technical APIs with serviceIds). Use \"serviceId\" for each service for any tools that require serviceId as the parameter.";

    /// Execute the tool.
    pub async fn execute(client: &ApiClient) -> Result<String, ToolError> {
        info!("Listing all available services");
        Ok(client.list_services().await?)
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
