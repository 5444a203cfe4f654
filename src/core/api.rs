//! Outbound API client for the Mastercard Developers platform.
//!
//! Thin wrapper around `reqwest` that issues GET requests against the fixed
//! `developer.mastercard.com` origin and returns response bodies as text.
//! Every endpoint is resolved against the base URL and re-checked against the
//! base hostname, so a path-shaped argument can never redirect a request to
//! another host.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Base origin every tool endpoint resolves against.
const BASE_URL: &str = "https://developer.mastercard.com/";

/// User-Agent sent with every outbound request.
const USER_AGENT: &str = "mastercard-developers-mcp";

/// Errors from outbound requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint could not be resolved against the base URL.
    #[error("Invalid endpoint {0}")]
    InvalidEndpoint(String),

    /// The resolved URL left the permitted hostname.
    #[error("Invalid endpoint: URL hostname mismatch")]
    HostnameMismatch,

    /// A path argument was empty or missing the leading `/`.
    #[error("{0}")]
    InvalidPath(String),

    /// Upstream answered with a non-2xx status.
    #[error("Request failed with status {status} - {url}")]
    UpstreamStatus { status: u16, url: String },

    /// Network-level failure.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// API client for the Mastercard Developers platform.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    /// Create a client with the fixed base origin and User-Agent.
    pub fn new() -> Result<Self, ApiError> {
        let base = Url::parse(BASE_URL)
            .map_err(|_| ApiError::InvalidEndpoint(BASE_URL.to_string()))?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { base, http })
    }

    /// Resolve an endpoint against the base URL, enforcing the hostname
    /// policy.
    fn resolve_endpoint(&self, endpoint: &str) -> Result<Url, ApiError> {
        let url = self
            .base
            .join(endpoint)
            .map_err(|_| ApiError::InvalidEndpoint(endpoint.to_string()))?;

        // A crafted endpoint ("https://evil.example/x", "//evil.example/x")
        // joins successfully but lands on another host.
        if url.host_str() != self.base.host_str() {
            return Err(ApiError::HostnameMismatch);
        }

        Ok(url)
    }

    /// Issue a GET request and return the response body as text.
    async fn request(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        let mut url = self.resolve_endpoint(endpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut().clear().extend_pairs(query);
        }

        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Retrieve the list of all available Mastercard services.
    pub async fn list_services(&self) -> Result<String, ApiError> {
        self.request("/llms.txt", &[("absolute_urls", "false")]).await
    }

    /// Get the documentation overview for a service.
    pub async fn get_documentation(&self, service_id: &str) -> Result<String, ApiError> {
        self.request(
            &format!("/{service_id}/documentation/llms.txt"),
            &[("absolute_urls", "false")],
        )
        .await
    }

    /// Get the content of one documentation section.
    pub async fn get_documentation_section(
        &self,
        service_id: &str,
        section_id: &str,
    ) -> Result<String, ApiError> {
        self.request(
            &format!("/{service_id}/documentation/llms-full.txt"),
            &[("absolute_urls", "false"), ("section_id", section_id)],
        )
        .await
    }

    /// Get a specific documentation page by absolute path.
    pub async fn get_documentation_page(&self, page_path: &str) -> Result<String, ApiError> {
        validate_path(page_path)?;
        self.request(page_path, &[]).await
    }

    /// Get the operation summary for an API specification.
    pub async fn get_api_operations(
        &self,
        api_specification_path: &str,
    ) -> Result<String, ApiError> {
        validate_path(api_specification_path)?;
        self.request(api_specification_path, &[("summary", "true")])
            .await
    }

    /// Get detailed information for a single API operation.
    pub async fn get_api_operation_details(
        &self,
        api_specification_path: &str,
        method: &str,
        path: &str,
    ) -> Result<String, ApiError> {
        validate_path(api_specification_path)?;
        self.request(api_specification_path, &[("method", method), ("path", path)])
            .await
    }
}

/// Validate a path-shaped argument before issuing a request.
fn validate_path(path: &str) -> Result<(), ApiError> {
    if path.is_empty() {
        return Err(ApiError::InvalidPath(
            "Path must be a non-empty string".to_string(),
        ));
    }
    if !path.starts_with('/') {
        return Err(ApiError::InvalidPath("Path must start with /".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new().unwrap()
    }

    #[test]
    fn test_resolve_endpoint_relative_path() {
        let url = client().resolve_endpoint("/llms.txt").unwrap();
        assert_eq!(url.as_str(), "https://developer.mastercard.com/llms.txt");
    }

    #[test]
    fn test_resolve_endpoint_nested_path() {
        let url = client()
            .resolve_endpoint("/send/documentation/llms.txt")
            .unwrap();
        assert_eq!(url.host_str(), Some("developer.mastercard.com"));
        assert_eq!(url.path(), "/send/documentation/llms.txt");
    }

    #[test]
    fn test_resolve_endpoint_rejects_absolute_foreign_url() {
        let err = client()
            .resolve_endpoint("https://evil.example/llms.txt")
            .unwrap_err();
        assert!(matches!(err, ApiError::HostnameMismatch));
    }

    #[test]
    fn test_resolve_endpoint_rejects_protocol_relative_url() {
        let err = client().resolve_endpoint("//evil.example/llms.txt").unwrap_err();
        assert!(matches!(err, ApiError::HostnameMismatch));
    }

    #[test]
    fn test_validate_path_accepts_absolute() {
        assert!(validate_path("/send/documentation/index.md").is_ok());
    }

    #[test]
    fn test_validate_path_rejects_empty() {
        let err = validate_path("").unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_validate_path_rejects_relative() {
        let err = validate_path("send/documentation").unwrap_err();
        assert!(err.to_string().contains("start with /"));
    }

    #[test]
    fn test_upstream_status_message_contains_status() {
        let err = ApiError::UpstreamStatus {
            status: 404,
            url: "https://developer.mastercard.com/llms.txt".to_string(),
        };
        assert!(err.to_string().contains("404"));
    }

    // Integration tests (require network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_list_services_live() {
        let body = client().list_services().await.unwrap();
        assert!(!body.is_empty());
    }

    #[ignore]
    #[tokio::test]
    async fn test_get_documentation_page_live() {
        let body = client()
            .get_documentation_page("/send/documentation/llms.txt")
            .await
            .unwrap();
        assert!(!body.is_empty());
    }
}
