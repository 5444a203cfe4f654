//! Tool-specific error types.

use thiserror::Error;

use crate::core::api::ApiError;

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A still-required argument was missing or invalid.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The outbound request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create an error for a missing required parameter.
    pub fn missing_argument(name: &str) -> Self {
        Self::InvalidArguments(format!("Missing required parameter: {name}"))
    }
}
