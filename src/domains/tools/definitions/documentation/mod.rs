//! Documentation tools.

mod documentation;
mod oauth10a_guide;
mod openbanking_guide;
mod page;
mod section;

pub use documentation::GetDocumentationTool;
pub use oauth10a_guide::GetOAuth10aGuideTool;
pub use openbanking_guide::GetOpenBankingGuideTool;
pub use page::GetDocumentationPageTool;
pub use section::GetDocumentationSectionTool;

/// Shared argument prose for the service id parameter.
pub(crate) const SERVICE_ID_DESCRIPTION: &str =
    "The unique identifier of the Mastercard service (e.g., 'send', 'loyalty', 'locations')";
