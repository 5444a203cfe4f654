//! Documentation page tool.
//!
//! Fetches one documentation page by absolute path. Context never binds any
//! of its parameters.

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

const PAGE_PATH_DESCRIPTION: &str =
    "The full path to the documentation page (e.g., '/send/documentation/use-cases/index.md')";

/// Parameters for the documentation page tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetDocumentationPageParams {
    /// Absolute page path, always caller-supplied.
    pub page_path: Option<String>,
}

/// Documentation page tool.
pub struct GetDocumentationPageTool;

impl GetDocumentationPageTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-documentation-page";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get Documentation Page";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieves the complete content of a specific documentation page.\n\nTakes one argument:\n- pagePath (str): The full path to the documentation page (e.g., '/send/documentation/use-cases/index.md')";

    fn input_schema() -> Arc<JsonObject> {
        let mut properties = JsonObject::new();
        properties.insert(
            "pagePath".to_string(),
            non_empty_string_prop(PAGE_PATH_DESCRIPTION),
        );
        object_schema(properties, &["pagePath"])
    }

    /// Execute the tool.
    pub async fn execute(
        client: &ApiClient,
        params: GetDocumentationPageParams,
    ) -> Result<String, ToolError> {
        let page_path = params
            .page_path
            .ok_or_else(|| ToolError::missing_argument("pagePath"))?;

        info!("Fetching documentation page: {page_path}");
        Ok(client.get_documentation_page(&page_path).await?)
    }

    /// Create the Tool model.
    pub fn to_tool(_context: &ToolContext) -> Tool {
        Tool {
            name: Self::METHOD.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: Self::input_schema(),
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
            let client = client.clone();
            async move {
                let params: GetDocumentationPageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(call_result(Self::execute(&client, params).await))
            }
            .boxed()
        })
    }
}
