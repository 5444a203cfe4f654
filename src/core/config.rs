//! Configuration management for the MCP server.
//!
//! Configuration comes from three layers: built-in defaults, `MCP_*`
//! environment variables (with `.env` support via dotenvy), and command-line
//! arguments. CLI arguments take precedence over the environment.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Context pinning configuration (service / API specification URLs).
    pub context: ContextConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Raw context inputs, prior to validation.
///
/// At most one of the two fields is meaningful: when `service` is set,
/// `api_specification` is ignored during context derivation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Documentation portal URL pinning the server to one service,
    /// e.g. `https://developer.mastercard.com/open-banking-us/documentation/`.
    pub service: Option<String>,

    /// Static content URL pinning the server to one API specification,
    /// e.g. `https://static.developer.mastercard.com/content/send/swagger/send.yaml`.
    pub api_specification: Option<String>,
}

impl ContextConfig {
    /// Overlay non-empty fields from `overrides` onto this configuration.
    pub fn merge(&mut self, overrides: ContextConfig) {
        if overrides.service.is_some() {
            self.service = overrides.service;
        }
        if overrides.api_specification.is_some() {
            self.api_specification = overrides.api_specification;
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mastercard-developers-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            context: ContextConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_SERVICE_URL`, `MCP_API_SPECIFICATION_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(service) = std::env::var("MCP_SERVICE_URL") {
            config.context.service = Some(service);
        }

        if let Ok(spec) = std::env::var("MCP_API_SPECIFICATION_URL") {
            config.context.api_specification = Some(spec);
        }

        config
    }
}

/// Parse command-line arguments of the form `--service=<url>` and
/// `--api-specification=<url>` into a [`ContextConfig`].
///
/// Unknown or malformed arguments are logged and ignored; argument parsing is
/// never fatal.
pub fn parse_args<I>(args: I) -> ContextConfig
where
    I: IntoIterator<Item = String>,
{
    let mut config = ContextConfig::default();

    for arg in args {
        if !arg.starts_with("--") {
            continue;
        }

        let (key, value) = match arg[2..].split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => (key, value),
            _ => {
                warn!("Invalid argument format: {arg}. Use --key=value format.");
                continue;
            }
        };

        match key {
            "service" => config.service = Some(value.to_string()),
            "api-specification" => config.api_specification = Some(value.to_string()),
            _ => warn!("Unknown argument: {key}"),
        }
    }

    config
}
