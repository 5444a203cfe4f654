//! OAuth 1.0a integration guide tool.
//!
//! The only tool with a two-tier fetch: a known language first tries the
//! README of the matching oauth1-signer repository on the raw GitHub mirror;
//! any failure there falls back to the generic guide page served through the
//! documentation API. Mirror failures are never surfaced to the caller.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{JsonObject, Tool},
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::core::api::ApiClient;
use crate::core::context::ToolContext;
use crate::domains::tools::ToolError;

use super::super::common::{call_result, enum_prop, object_schema};

/// Generic guide page used when no language-specific README applies.
const GUIDE_PATH: &str =
    "/platform/documentation/authentication/using-oauth-1a-to-access-mastercard-apis/index.md";

/// Raw content mirror hosting the signer repository READMEs.
const MIRROR_BASE: &str = "https://raw.githubusercontent.com/Mastercard";

const LANGUAGES: [&str; 8] = [
    "java",
    "kotlin",
    "c#",
    "python",
    "javascript",
    "typescript",
    "golang",
    "others",
];

const LANGUAGE_DESCRIPTION: &str =
    "Programming language for language-specific examples and guidance";

/// Parameters for the OAuth guide tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetOAuth10aGuideParams {
    /// Optional programming language selecting a signer repository.
    pub language: Option<String>,
}

/// Map a language to its signer repository, if one exists.
fn repository_for_language(language: &str) -> Option<&'static str> {
    match language {
        "java" | "kotlin" => Some("oauth1-signer-java"),
        "c#" => Some("oauth1-signer-csharp"),
        "python" => Some("oauth1-signer-python"),
        "javascript" | "typescript" => Some("oauth1-signer-nodejs"),
        "golang" => Some("oauth1-signer-golang"),
        _ => None,
    }
}

/// README location for a signer repository on the mirror.
fn readme_url(repository: &str) -> String {
    format!("{MIRROR_BASE}/{repository}/refs/heads/main/README.md")
}

/// OAuth 1.0a integration guide tool.
pub struct GetOAuth10aGuideTool;

impl GetOAuth10aGuideTool {
    /// Tool name as registered in MCP. Stable across contexts.
    pub const METHOD: &'static str = "get-oauth10a-integration-guide";

    /// Human-readable label.
    pub const TITLE: &'static str = "Get OAuth 1.0a Integration Guide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieves the comprehensive OAuth 1.0a integration guide including step-by-step instructions,\ncode examples, and best practices for Mastercard APIs. Optionally specify a programming language\nto get language-specific examples and guidance.";

    fn input_schema() -> Arc<JsonObject> {
        let mut properties = JsonObject::new();
        properties.insert(
            "language".to_string(),
            enum_prop(&LANGUAGES, LANGUAGE_DESCRIPTION),
        );
        object_schema(properties, &[])
    }

    /// Execute the tool.
    ///
    /// Mirror failures (network errors, non-OK status, unreadable body) are
    /// soft: they trigger the fallback rather than an error result.
    pub async fn execute(
        client: &ApiClient,
        params: GetOAuth10aGuideParams,
    ) -> Result<String, ToolError> {
        if let Some(repository) = params
            .language
            .as_deref()
            .and_then(repository_for_language)
        {
            let url = readme_url(repository);
            info!("Fetching language-specific OAuth guide: {url}");

            match reqwest::get(&url).await {
                Ok(response) if response.status().is_success() => {
                    match response.text().await {
                        Ok(body) => return Ok(body),
                        Err(e) => debug!("Signer README body unreadable, falling back: {e}"),
                    }
                }
                Ok(response) => {
                    debug!(
                        "Signer README fetch returned status {}, falling back",
                        response.status()
                    );
                }
                Err(e) => debug!("Signer README fetch failed, falling back: {e}"),
            }
        }

        info!("Fetching generic OAuth 1.0a guide page");
        Ok(client.get_documentation_page(GUIDE_PATH).await?)
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
                let params: GetOAuth10aGuideParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(call_result(Self::execute(&client, params).await))
            }
            .boxed()
        })
    }
}
