//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file and follows one shared pattern: a
//! `METHOD` constant (the stable protocol name), a context-dependent
//! description and input schema, an `execute()` resolving pre-bound values
//! from the context, and a `create_route()` for the rmcp router.

pub(crate) mod common;
pub mod documentation;
pub mod operations;
pub mod services;

pub use documentation::{
    GetDocumentationPageTool, GetDocumentationSectionTool, GetDocumentationTool,
    GetOAuth10aGuideTool, GetOpenBankingGuideTool,
};
pub use operations::{GetApiOperationDetailsTool, GetApiOperationListTool};
pub use services::GetServicesListTool;
