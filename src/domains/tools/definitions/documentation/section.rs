//! Documentation section content tool.
//!
//! A section is a group of pages, not a single page; the section content
//! endpoint returns all of them at once.

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

const SECTION_ID_DESCRIPTION: &str = "The specific section identifier within the service documentation (e.g., 'getting-started', 'api-reference')";

/// Parameters for the documentation section tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetDocumentationSectionParams {
    /// Service id; elided from the schema when pre-bound by context.
    pub service_id: Option<String>,

    /// Section identifier, always caller-supplied.
    pub section_id: Option<String>,
}

/// Documentation section content tool.
pub struct GetDocumentationSectionTool;

impl GetDocumentationSectionTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-documentation-section-content";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get Documentation Section Content";

    fn description(context: &ToolContext) -> String {
        let base = "Retrieves the complete content for a specific documentation section.\nIMPORTANT: A section is not a single page, but rather a collection of pages that are grouped together.";

        match &context.service_id {
            Some(service_id) => format!(
                "{base}\n\nUses the configured service: {service_id}\n\nIt takes one argument:\n- sectionId (str): {SECTION_ID_DESCRIPTION}"
            ),
            None => format!(
                "{base}\n\nIt takes two arguments:\n- serviceId (str): {SERVICE_ID_DESCRIPTION}\n- sectionId (str): {SECTION_ID_DESCRIPTION}"
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
        properties.insert(
            "sectionId".to_string(),
            non_empty_string_prop(SECTION_ID_DESCRIPTION),
        );
        required.push("sectionId");

        object_schema(properties, &required)
    }

    /// Execute the tool, resolving pre-bound values from the context.
    pub async fn execute(
        context: &ToolContext,
        client: &ApiClient,
        params: GetDocumentationSectionParams,
    ) -> Result<String, ToolError> {
        let service_id = context
            .service_id
            .clone()
            .or(params.service_id)
            .ok_or_else(|| ToolError::missing_argument("serviceId"))?;
        let section_id = params
            .section_id
            .ok_or_else(|| ToolError::missing_argument("sectionId"))?;

        info!("Fetching documentation section '{section_id}' for service: {service_id}");
        Ok(client
            .get_documentation_section(&service_id, &section_id)
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
                let params: GetDocumentationSectionParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(call_result(Self::execute(&context, &client, params).await))
            }
            .boxed()
        })
    }
}
