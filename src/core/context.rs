//! Tool context derivation.
//!
//! The server can be pinned to a single Mastercard service (or a single API
//! specification) at startup. This module parses the two accepted URL shapes
//! into a canonical [`ToolContext`] that the tool definitions use to decide
//! which parameters are still caller-supplied versus pre-bound.

use thiserror::Error;
use url::Url;

use super::config::ContextConfig;

/// Hostname of the documentation portal, accepted in service URLs.
const DEVELOPER_HOST: &str = "developer.mastercard.com";

/// Hostname of the static content CDN, accepted in API specification URLs.
const STATIC_HOST: &str = "static.developer.mastercard.com";

/// Errors raised while deriving a [`ToolContext`] from configuration.
///
/// These are startup-time failures: the server refuses to register any tools
/// when the configured URL does not match the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error(
        "Invalid service URL provided. It should be in the format: \
         https://developer.mastercard.com/<service-id>/documentation/**"
    )]
    InvalidServiceUrl,

    #[error(
        "Invalid API specification path provided. It should be in the format: \
         https://static.developer.mastercard.com/content/<service-id>/swagger/<nested-file-path>.yaml"
    )]
    InvalidApiSpecUrl,
}

/// Canonical derived state, immutable once built.
///
/// Invariant: `api_specification_path` is never set without `service_id`
/// holding the same service id. `service_id` may be set alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolContext {
    /// Lowercase service id, e.g. `open-banking-us`.
    pub service_id: Option<String>,

    /// Root-relative specification path, always of the form
    /// `/<service-id>/swagger/<nested-path>.yaml`.
    pub api_specification_path: Option<String>,
}

impl ToolContext {
    /// Derive the context from raw configuration.
    ///
    /// Precedence: when `service` is present, only the service URL is
    /// consulted and `api_specification` is ignored entirely, even if also
    /// set. The specification URL acts as a fallback input only. Neither
    /// being present yields an empty context, which is valid.
    pub fn from_config(config: &ContextConfig) -> Result<Self, ContextError> {
        if let Some(service) = config.service.as_deref() {
            let service_id =
                parse_service_id(service).ok_or(ContextError::InvalidServiceUrl)?;
            return Ok(Self {
                service_id: Some(service_id),
                api_specification_path: None,
            });
        }

        if let Some(input) = config.api_specification.as_deref() {
            let spec =
                parse_api_specification(input).ok_or(ContextError::InvalidApiSpecUrl)?;
            return Ok(Self {
                service_id: Some(spec.service_id),
                api_specification_path: Some(spec.path),
            });
        }

        Ok(Self::default())
    }
}

/// A parsed API specification reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSpecification {
    /// Lowercase service id owning the specification.
    pub service_id: String,

    /// Root-relative path to the specification document.
    pub path: String,
}

/// Extract a service id from a documentation portal URL.
///
/// Accepts `https://developer.mastercard.com/<service-id>/documentation/**`
/// and returns the id lower-cased. Returns `None` for any other shape; never
/// fails.
pub fn parse_service_id(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    if url.host_str() != Some(DEVELOPER_HOST) {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 || segments[1] != "documentation" {
        return None;
    }

    let candidate = segments[0];
    if !is_valid_service_id(candidate) {
        return None;
    }

    Some(candidate.to_ascii_lowercase())
}

/// Extract a service id and specification path from a static content URL.
///
/// Accepts
/// `https://static.developer.mastercard.com/content/<service-id>/swagger/<nested-file-path>.yaml`.
/// The nested file path may span multiple segments and its casing is
/// preserved verbatim; only the service id is lower-cased in the rebuilt
/// path. The `.yaml` suffix check is literal, so `.yml` and `.json` are
/// rejected.
pub fn parse_api_specification(input: &str) -> Option<ApiSpecification> {
    let url = Url::parse(input).ok()?;
    if url.host_str() != Some(STATIC_HOST) {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    if segments.len() < 4 || segments[0] != "content" || segments[2] != "swagger" {
        return None;
    }

    let candidate = segments[1];
    let file = segments[3..].join("/");
    if !is_valid_service_id(candidate) || !file.ends_with(".yaml") {
        return None;
    }

    let service_id = candidate.to_ascii_lowercase();
    let path = format!("/{service_id}/swagger/{file}");
    Some(ApiSpecification { service_id, path })
}

/// Service id grammar: one or more letters, optionally followed by repeated
/// groups of a hyphen plus one-or-more alphanumerics. Case-insensitive.
fn is_valid_service_id(candidate: &str) -> bool {
    let mut groups = candidate.split('-');
    let first = match groups.next() {
        Some(g) => g,
        None => return false,
    };
    if first.is_empty() || !first.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    groups.all(|g| !g.is_empty() && g.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(service: Option<&str>, api_specification: Option<&str>) -> ContextConfig {
        ContextConfig {
            service: service.map(String::from),
            api_specification: api_specification.map(String::from),
        }
    }

    #[test]
    fn test_parse_service_id_basic() {
        let id = parse_service_id("https://developer.mastercard.com/open-banking-us/documentation/");
        assert_eq!(id.as_deref(), Some("open-banking-us"));
    }

    #[test]
    fn test_parse_service_id_deep_path() {
        let id = parse_service_id(
            "https://developer.mastercard.com/send/documentation/use-cases/index.md",
        );
        assert_eq!(id.as_deref(), Some("send"));
    }

    #[test]
    fn test_parse_service_id_lowercases() {
        let id = parse_service_id("https://developer.mastercard.com/Open-Banking-US/documentation/");
        assert_eq!(id.as_deref(), Some("open-banking-us"));
    }

    #[test]
    fn test_parse_service_id_rejects_wrong_host() {
        assert_eq!(
            parse_service_id("https://example.com/send/documentation/"),
            None
        );
        assert_eq!(
            parse_service_id("https://static.developer.mastercard.com/send/documentation/"),
            None
        );
    }

    #[test]
    fn test_parse_service_id_requires_documentation_segment() {
        assert_eq!(
            parse_service_id("https://developer.mastercard.com/send/"),
            None
        );
        assert_eq!(
            parse_service_id("https://developer.mastercard.com/send/swagger/spec.yaml"),
            None
        );
    }

    #[test]
    fn test_parse_service_id_rejects_malformed_ids() {
        assert_eq!(
            parse_service_id(
                "https://developer.mastercard.com/service_with_underscore/documentation/"
            ),
            None
        );
        assert_eq!(
            parse_service_id("https://developer.mastercard.com/123-send/documentation/"),
            None
        );
        assert_eq!(
            parse_service_id("https://developer.mastercard.com/send-/documentation/"),
            None
        );
    }

    #[test]
    fn test_parse_service_id_rejects_non_url() {
        assert_eq!(parse_service_id("open-banking-us"), None);
        assert_eq!(parse_service_id(""), None);
    }

    #[test]
    fn test_parse_api_specification_basic() {
        let spec = parse_api_specification(
            "https://static.developer.mastercard.com/content/open-banking-us/swagger/openbanking-us.yaml",
        )
        .unwrap();
        assert_eq!(spec.service_id, "open-banking-us");
        assert_eq!(spec.path, "/open-banking-us/swagger/openbanking-us.yaml");
    }

    #[test]
    fn test_parse_api_specification_nested_path() {
        let spec = parse_api_specification(
            "https://static.developer.mastercard.com/content/payment-gateway/swagger/nested/spec.yaml",
        )
        .unwrap();
        assert_eq!(spec.service_id, "payment-gateway");
        assert_eq!(spec.path, "/payment-gateway/swagger/nested/spec.yaml");
    }

    #[test]
    fn test_parse_api_specification_preserves_file_casing() {
        let spec = parse_api_specification(
            "https://static.developer.mastercard.com/content/Send/swagger/Nested/Spec.yaml",
        )
        .unwrap();
        assert_eq!(spec.service_id, "send");
        assert_eq!(spec.path, "/send/swagger/Nested/Spec.yaml");
    }

    #[test]
    fn test_parse_api_specification_rejects_other_extensions() {
        assert_eq!(
            parse_api_specification(
                "https://static.developer.mastercard.com/content/send/swagger/spec.yml"
            ),
            None
        );
        assert_eq!(
            parse_api_specification(
                "https://static.developer.mastercard.com/content/send/swagger/spec.json"
            ),
            None
        );
        assert_eq!(
            parse_api_specification(
                "https://static.developer.mastercard.com/content/send/swagger/spec.YAML"
            ),
            None
        );
    }

    #[test]
    fn test_parse_api_specification_rejects_wrong_shape() {
        // wrong host
        assert_eq!(
            parse_api_specification(
                "https://developer.mastercard.com/content/send/swagger/spec.yaml"
            ),
            None
        );
        // missing content segment
        assert_eq!(
            parse_api_specification(
                "https://static.developer.mastercard.com/send/swagger/spec.yaml"
            ),
            None
        );
        // missing swagger segment
        assert_eq!(
            parse_api_specification(
                "https://static.developer.mastercard.com/content/send/spec.yaml"
            ),
            None
        );
        // malformed service id
        assert_eq!(
            parse_api_specification(
                "https://static.developer.mastercard.com/content/send_v2/swagger/spec.yaml"
            ),
            None
        );
    }

    #[test]
    fn test_from_config_service_only() {
        let context = ToolContext::from_config(&config(
            Some("https://developer.mastercard.com/open-banking-us/documentation/"),
            None,
        ))
        .unwrap();
        assert_eq!(context.service_id.as_deref(), Some("open-banking-us"));
        assert_eq!(context.api_specification_path, None);
    }

    #[test]
    fn test_from_config_api_specification_only() {
        let context = ToolContext::from_config(&config(
            None,
            Some(
                "https://static.developer.mastercard.com/content/payment-gateway/swagger/nested/spec.yaml",
            ),
        ))
        .unwrap();
        assert_eq!(context.service_id.as_deref(), Some("payment-gateway"));
        assert_eq!(
            context.api_specification_path.as_deref(),
            Some("/payment-gateway/swagger/nested/spec.yaml")
        );
    }

    #[test]
    fn test_from_config_service_wins_over_api_specification() {
        let both = ToolContext::from_config(&config(
            Some("https://developer.mastercard.com/send/documentation/"),
            Some(
                "https://static.developer.mastercard.com/content/payment-gateway/swagger/spec.yaml",
            ),
        ))
        .unwrap();
        let service_only = ToolContext::from_config(&config(
            Some("https://developer.mastercard.com/send/documentation/"),
            None,
        ))
        .unwrap();
        assert_eq!(both, service_only);
        assert_eq!(both.api_specification_path, None);
    }

    #[test]
    fn test_from_config_invalid_api_specification_ignored_when_service_present() {
        // The specification URL is never consulted on the service branch, so
        // a garbage value there cannot fail context construction.
        let context = ToolContext::from_config(&config(
            Some("https://developer.mastercard.com/send/documentation/"),
            Some("not a url"),
        ))
        .unwrap();
        assert_eq!(context.service_id.as_deref(), Some("send"));
    }

    #[test]
    fn test_from_config_empty_is_valid() {
        let context = ToolContext::from_config(&ContextConfig::default()).unwrap();
        assert_eq!(context, ToolContext::default());
    }

    #[test]
    fn test_from_config_invalid_service_url() {
        let err = ToolContext::from_config(&config(
            Some("https://developer.mastercard.com/service_with_underscore/documentation/"),
            None,
        ))
        .unwrap_err();
        assert_eq!(err, ContextError::InvalidServiceUrl);
        assert!(err.to_string().contains("developer.mastercard.com/<service-id>/documentation/**"));
    }

    #[test]
    fn test_from_config_invalid_api_specification_url() {
        let err = ToolContext::from_config(&config(
            None,
            Some("https://static.developer.mastercard.com/content/send/swagger/spec.json"),
        ))
        .unwrap_err();
        assert_eq!(err, ContextError::InvalidApiSpecUrl);
        assert!(err.to_string().contains("swagger/<nested-file-path>.yaml"));
    }

    #[test]
    fn test_service_id_grammar() {
        assert!(is_valid_service_id("send"));
        assert!(is_valid_service_id("open-banking-us"));
        assert!(is_valid_service_id("loyalty-2"));
        assert!(is_valid_service_id("MDES"));
        assert!(!is_valid_service_id(""));
        assert!(!is_valid_service_id("-send"));
        assert!(!is_valid_service_id("send-"));
        assert!(!is_valid_service_id("123"));
        assert!(!is_valid_service_id("open--banking"));
        assert!(!is_valid_service_id("open_banking"));
    }
}
