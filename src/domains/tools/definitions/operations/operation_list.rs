//! API operation list tool.
//!
//! Summarizes every operation in an API specification. When the context pins
//! a specification the apiSpecificationPath parameter disappears from the
//! declared schema.

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

use super::super::common::{call_result, object_schema, string_prop};

const SPEC_PATH_DESCRIPTION: &str =
    "The path to the API specification file (e.g., /open-banking-us/swagger/openbanking-us.yaml)";

/// Parameters for the operation list tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetApiOperationListParams {
    /// Specification path; elided from the schema when pre-bound by context.
    pub api_specification_path: Option<String>,
}

/// API operation list tool.
pub struct GetApiOperationListTool;

impl GetApiOperationListTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-api-operation-list";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get API Operation List";

    fn description(context: &ToolContext) -> String {
        let base = "Provides a summary of all API operations for a specific Mastercard API\nspecification including HTTP methods, request paths, titles, and descriptions.";

        match &context.api_specification_path {
            Some(path) => format!("{base}\n\nUses the configured API specification: {path}"),
            None => format!(
                "{base}\n\nIt takes one argument:\n- apiSpecificationPath (str): The path to the API specification file (e.g., '/open-banking-us/swagger/openbanking-us.yaml')"
            ),
        }
    }

    fn input_schema(context: &ToolContext) -> Arc<JsonObject> {
        let mut properties = JsonObject::new();
        let mut required = Vec::new();

        if context.api_specification_path.is_none() {
            properties.insert(
                "apiSpecificationPath".to_string(),
                string_prop(SPEC_PATH_DESCRIPTION),
            );
            required.push("apiSpecificationPath");
        }

        object_schema(properties, &required)
    }

    /// Execute the tool, resolving pre-bound values from the context.
    pub async fn execute(
        context: &ToolContext,
        client: &ApiClient,
        params: GetApiOperationListParams,
    ) -> Result<String, ToolError> {
        let path = context
            .api_specification_path
            .clone()
            .or(params.api_specification_path)
            .ok_or_else(|| ToolError::missing_argument("apiSpecificationPath"))?;

        info!("Fetching API operation summary for: {path}");
        Ok(client.get_api_operations(&path).await?)
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
                let params: GetApiOperationListParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(call_result(Self::execute(&context, &client, params).await))
            }
            .boxed()
        })
    }
}
