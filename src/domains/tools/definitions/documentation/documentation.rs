//! Documentation overview tool.
//!
//! Fetches the llms.txt overview for one service. When the context pins a
//! service the serviceId parameter disappears from the declared schema and is
//! resolved from the context instead.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{JsonObject, Tool},
};
use serde::Deserialize;
use tracing::info;

use crate::core::api::ApiClient;
use crate::core::context::ToolContext;
use crate::domains::tools::ToolError;

use super::super::common::{call_result, non_empty_string_prop, object_schema};
use super::SERVICE_ID_DESCRIPTION;

/// Parameters for the documentation overview tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetDocumentationParams {
    /// Service id; elided from the schema when pre-bound by context.
    pub service_id: Option<String>,
}

/// Documentation overview tool.
pub struct GetDocumentationTool;

impl GetDocumentationTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-documentation";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get Documentation";

    fn description(context: &ToolContext) -> String {
        let base = "Provides an overview of all available documentation for a specific Mastercard service\nincluding section titles, descriptions, and navigation links.";

        match &context.service_id {
            Some(service_id) => {
                format!("{base}\n\nUses the configured service: {service_id}")
            }
            None => format!(
                "{base}\n\nIt takes one argument:\n- serviceId (str): {SERVICE_ID_DESCRIPTION}"
            ),
        }
    }

    fn input_schema(context: &ToolContext) -> Arc<JsonObject> {
        let mut properties = JsonObject::new();
        let mut required = Vec::new();

        if context.service_id.is_none() {
            properties.insert(
                "serviceId".to_string(),
                non_empty_string_prop(SERVICE_ID_DESCRIPTION),
            );
            required.push("serviceId");
        }

        object_schema(properties, &required)
    }

    /// Execute the tool, resolving pre-bound values from the context.
    pub async fn execute(
        context: &ToolContext,
        client: &ApiClient,
        params: GetDocumentationParams,
    ) -> Result<String, ToolError> {
        let service_id = context
            .service_id
            .clone()
            .or(params.service_id)
            .ok_or_else(|| ToolError::missing_argument("serviceId"))?;

        info!("Fetching documentation overview for service: {service_id}");
        Ok(client.get_documentation(&service_id).await?)
    }

    /// Create the Tool model for this context.
    pub fn to_tool(context: &ToolContext) -> Tool {
        Tool {
            name: Self::METHOD.into(),
            description: Some(Self::description(context).into()),
            input_schema: Self::input_schema(context),
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
        ToolRoute::new_dyn(Self::to_tool(&context), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let context = context.clone();
            let client = client.clone();
            async move {
                let params: GetDocumentationParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(call_result(Self::execute(&context, &client, params).await))
            }
            .boxed()
        })
    }
}
