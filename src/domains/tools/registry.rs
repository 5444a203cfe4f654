//! Tool registry - assembles the tool catalog for a given context.
//!
//! The registry builds the full catalog in a fixed order, then applies the
//! single filtering rule: a pinned service makes listing all services
//! redundant, so `get-services-list` is dropped from that catalog.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use rmcp::model::Tool;

use crate::core::api::ApiClient;
use crate::core::context::ToolContext;

use super::definitions::{
    GetApiOperationDetailsTool, GetApiOperationListTool, GetDocumentationPageTool,
    GetDocumentationSectionTool, GetDocumentationTool, GetOAuth10aGuideTool,
    GetOpenBankingGuideTool, GetServicesListTool,
};

/// Tool registry - manages the catalog for one context.
pub struct ToolRegistry {
    context: Arc<ToolContext>,
    client: Arc<ApiClient>,
}

impl ToolRegistry {
    /// Method names of the full catalog, in registration order.
    pub const METHODS: [&'static str; 8] = [
        GetServicesListTool::METHOD,
        GetDocumentationTool::METHOD,
        GetDocumentationSectionTool::METHOD,
        GetDocumentationPageTool::METHOD,
        GetOAuth10aGuideTool::METHOD,
        GetOpenBankingGuideTool::METHOD,
        GetApiOperationListTool::METHOD,
        GetApiOperationDetailsTool::METHOD,
    ];

    /// Create a new registry for the given context.
    pub fn new(context: Arc<ToolContext>, client: Arc<ApiClient>) -> Self {
        Self { context, client }
    }

    fn enabled(&self, method: &str) -> bool {
        !(self.context.service_id.is_some() && method == GetServicesListTool::METHOD)
    }

    /// Names of the enabled tools, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        Self::METHODS
            .into_iter()
            .filter(|method| self.enabled(method))
            .collect()
    }

    /// Metadata for the enabled tools, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        let context = &self.context;
        vec![
            GetServicesListTool::to_tool(context),
            GetDocumentationTool::to_tool(context),
            GetDocumentationSectionTool::to_tool(context),
            GetDocumentationPageTool::to_tool(context),
            GetOAuth10aGuideTool::to_tool(context),
            GetOpenBankingGuideTool::to_tool(context),
            GetApiOperationListTool::to_tool(context),
            GetApiOperationDetailsTool::to_tool(context),
        ]
        .into_iter()
        .filter(|tool| self.enabled(tool.name.as_ref()))
        .collect()
    }

    /// Routes for the enabled tools, in registration order.
    pub fn routes<S>(&self) -> Vec<ToolRoute<S>>
    where
        S: Send + Sync + 'static,
    {
        let context = &self.context;
        let client = &self.client;
        let catalog = vec![
            (
                GetServicesListTool::METHOD,
                GetServicesListTool::create_route(context.clone(), client.clone()),
            ),
            (
                GetDocumentationTool::METHOD,
                GetDocumentationTool::create_route(context.clone(), client.clone()),
            ),
            (
                GetDocumentationSectionTool::METHOD,
                GetDocumentationSectionTool::create_route(context.clone(), client.clone()),
            ),
            (
                GetDocumentationPageTool::METHOD,
                GetDocumentationPageTool::create_route(context.clone(), client.clone()),
            ),
            (
                GetOAuth10aGuideTool::METHOD,
                GetOAuth10aGuideTool::create_route(context.clone(), client.clone()),
            ),
            (
                GetOpenBankingGuideTool::METHOD,
                GetOpenBankingGuideTool::create_route(context.clone(), client.clone()),
            ),
            (
                GetApiOperationListTool::METHOD,
                GetApiOperationListTool::create_route(context.clone(), client.clone()),
            ),
            (
                GetApiOperationDetailsTool::METHOD,
                GetApiOperationDetailsTool::create_route(context.clone(), client.clone()),
            ),
        ];

        catalog
            .into_iter()
            .filter(|(method, _)| self.enabled(method))
            .map(|(_, route)| route)
            .collect()
    }
}
