//! Common utilities shared across tool definitions.
//!
//! Provides the JSON schema builders used to declare per-context parameter
//! sets, and the single conversion point from execute results to protocol
//! content.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::{Value, json};
use tracing::warn;

use super::super::error::ToolError;

/// Build an object schema from a property map and required-name list.
pub(crate) fn object_schema(properties: JsonObject, required: &[&str]) -> Arc<JsonObject> {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert(
        "required".to_string(),
        Value::Array(
            required
                .iter()
                .map(|name| Value::String((*name).to_string()))
                .collect(),
        ),
    );
    Arc::new(schema)
}

/// A plain string property.
pub(crate) fn string_prop(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

/// A string property that must not be empty.
pub(crate) fn non_empty_string_prop(description: &str) -> Value {
    json!({ "type": "string", "minLength": 1, "description": description })
}

/// A string property restricted to a fixed set of values.
pub(crate) fn enum_prop(values: &[&str], description: &str) -> Value {
    json!({ "type": "string", "enum": values, "description": description })
}

/// Convert an execute result into protocol content.
///
/// Failures become error-flagged text content instead of protocol faults so
/// the session stays alive across bad calls.
pub(crate) fn call_result(result: Result<String, ToolError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            warn!("Tool call failed: {e}");
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_schema_shape() {
        let mut properties = JsonObject::new();
        properties.insert("serviceId".to_string(), non_empty_string_prop("id"));
        let schema = object_schema(properties, &["serviceId"]);

        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["required"], json!(["serviceId"]));
        assert_eq!(schema["properties"]["serviceId"]["minLength"], json!(1));
    }

    #[test]
    fn test_empty_object_schema() {
        let schema = object_schema(JsonObject::new(), &[]);
        assert_eq!(schema["properties"], json!({}));
        assert_eq!(schema["required"], json!([]));
    }

    #[test]
    fn test_enum_prop_values() {
        let prop = enum_prop(&["java", "python"], "language");
        assert_eq!(prop["enum"], json!(["java", "python"]));
    }

    #[test]
    fn test_call_result_success() {
        let result = call_result(Ok("body".to_string()));
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_call_result_error_keeps_session_alive() {
        let result = call_result(Err(ToolError::missing_argument("serviceId")));
        assert!(result.is_error.unwrap_or(false));
    }
}
