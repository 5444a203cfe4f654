//! API operation details tool.
//!
//! Fetches one operation from an API specification. The specification path
//! can be pre-bound by context; method and path are always caller-supplied.

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
    "The path to the API specification (e.g., /open-finance-us/swagger/openbanking-us.yaml)";

const METHOD_DESCRIPTION: &str =
    "The HTTP method of the operation (e.g., GET, POST, PUT, DELETE)";

const PATH_DESCRIPTION: &str =
    "The API endpoint path from the specification (e.g., /payments, /accounts/{id})";

/// Parameters for the operation details tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetApiOperationDetailsParams {
    /// Specification path; elided from the schema when pre-bound by context.
    pub api_specification_path: Option<String>,

    /// HTTP method of the operation, always caller-supplied.
    pub method: Option<String>,

    /// Endpoint path of the operation, always caller-supplied.
    pub path: Option<String>,
}

/// API operation details tool.
pub struct GetApiOperationDetailsTool;

impl GetApiOperationDetailsTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-api-operation-details";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get API Operation Details";

    fn description(context: &ToolContext) -> String {
        let base = "Provides detailed information about a specific API operation including parameter definitions,\nrequest and response schemas, and technical specifications for successful API calls.";

        match &context.api_specification_path {
            Some(path) => format!(
                "{base}\n\nUses the configured API specification: {path}\n\nIt takes two arguments:\n- method (str): {METHOD_DESCRIPTION}\n- path (str): {PATH_DESCRIPTION}"
            ),
            None => format!(
                "{base}\n\nIt takes three arguments:\n- apiSpecificationPath (str): The path to the API specification file (e.g., '/open-finance-us/swagger/openbanking-us.yaml' for https://static.developer.mastercard.com/content/open-finance-us/swagger/openbanking-us.yaml)\n- method (str): {METHOD_DESCRIPTION}\n- path (str): {PATH_DESCRIPTION}"
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
        properties.insert("method".to_string(), string_prop(METHOD_DESCRIPTION));
        required.push("method");
        properties.insert("path".to_string(), string_prop(PATH_DESCRIPTION));
        required.push("path");

        object_schema(properties, &required)
    }

    /// Execute the tool, resolving pre-bound values from the context.
    pub async fn execute(
        context: &ToolContext,
        client: &ApiClient,
        params: GetApiOperationDetailsParams,
    ) -> Result<String, ToolError> {
        let spec_path = context
            .api_specification_path
            .clone()
            .or(params.api_specification_path)
            .ok_or_else(|| ToolError::missing_argument("apiSpecificationPath"))?;
        let method = params
            .method
            .ok_or_else(|| ToolError::missing_argument("method"))?;
        let path = params
            .path
            .ok_or_else(|| ToolError::missing_argument("path"))?;

        info!("Fetching operation details {method} {path} from: {spec_path}");
        Ok(client
            .get_api_operation_details(&spec_path, &method, &path)
            .await?)
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
                let params: GetApiOperationDetailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(call_result(Self::execute(&context, &client, params).await))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pinned() -> ToolContext {
        ToolContext {
            service_id: Some("open-banking-us".to_string()),
            api_specification_path: Some("/open-banking-us/swagger/openbanking-us.yaml".to_string()),
        }
    }

    #[test]
    fn test_schema_without_context_requires_all_three() {
        let tool = GetApiOperationDetailsTool::to_tool(&ToolContext::default());
        assert_eq!(
            tool.input_schema["required"],
            json!(["apiSpecificationPath", "method", "path"])
        );
    }

    #[test]
    fn test_schema_with_context_retains_method_and_path() {
        let tool = GetApiOperationDetailsTool::to_tool(&pinned());
        assert_eq!(tool.input_schema["required"], json!(["method", "path"]));
        assert!(tool.input_schema["properties"].get("apiSpecificationPath").is_none());
        assert!(tool.input_schema["properties"].get("method").is_some());
        assert!(tool.input_schema["properties"].get("path").is_some());
    }

    #[test]
    fn test_description_enumerates_remaining_arguments() {
        let unpinned = GetApiOperationDetailsTool::description(&ToolContext::default());
        assert!(unpinned.contains("It takes three arguments"));

        let pinned = GetApiOperationDetailsTool::description(&pinned());
        assert!(pinned.contains("It takes two arguments"));
        assert!(pinned.contains(
            "Uses the configured API specification: /open-banking-us/swagger/openbanking-us.yaml"
        ));
    }

    #[tokio::test]
    async fn test_execute_requires_method_and_path() {
        let client = ApiClient::new().unwrap();
        let err = GetApiOperationDetailsTool::execute(
            &pinned(),
            &client,
            GetApiOperationDetailsParams::default(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("method"));
    }
}
