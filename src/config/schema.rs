//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits so configs can be built in tests and
//! logged; at runtime the loader fills them from the environment.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, body limit).
    pub listener: ListenerConfig,

    /// CORS settings for the browser client.
    pub cors: CorsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Issue-tracker credentials and endpoint.
    pub jira: JiraConfig,

    /// Test-generation service credentials and endpoint.
    pub generator: GeneratorConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum inbound request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// CORS configuration for the browser client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origin allowed to call the relay, with credentials.
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Inbound request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Timeout for one outbound issue-tracker call in seconds.
    pub upstream_secs: u64,

    /// Timeout for one outbound test-generation call in seconds.
    pub generator_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            upstream_secs: 10,
            generator_secs: 30,
        }
    }
}

/// Issue-tracker configuration.
///
/// Every field is optional: the relay boots without credentials and answers
/// a 500 to `/api/jira/fetch` until all three are present.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct JiraConfig {
    /// Base URL of the tracker (e.g., "https://acme.atlassian.net").
    pub base_url: Option<String>,

    /// Account email for basic auth.
    pub email: Option<String>,

    /// API token paired with the email.
    pub api_token: Option<String>,
}

impl JiraConfig {
    /// The complete credential set, or `None` if any part is missing.
    pub fn credentials(&self) -> Option<JiraCredentials<'_>> {
        Some(JiraCredentials {
            base_url: self.base_url.as_deref()?,
            email: self.email.as_deref()?,
            api_token: self.api_token.as_deref()?,
        })
    }
}

/// Borrowed view of a complete issue-tracker credential set.
#[derive(Debug, Clone, Copy)]
pub struct JiraCredentials<'a> {
    pub base_url: &'a str,
    pub email: &'a str,
    pub api_token: &'a str,
}

/// Test-generation service configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base URL of the OpenAI-compatible generation API.
    pub api_base: Option<String>,

    /// Bearer token for the generation API.
    pub api_key: Option<String>,

    /// Model name injected into payloads that do not name one.
    pub model: Option<String>,
}

impl GeneratorConfig {
    /// The complete credential set, or `None` if endpoint or key is missing.
    pub fn credentials(&self) -> Option<GeneratorCredentials<'_>> {
        Some(GeneratorCredentials {
            api_base: self.api_base.as_deref()?,
            api_key: self.api_key.as_deref()?,
            model: self.model.as_deref(),
        })
    }
}

/// Borrowed view of a complete generation-service credential set.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorCredentials<'a> {
    pub api_base: &'a str,
    pub api_key: &'a str,
    pub model: Option<&'a str>,
}
