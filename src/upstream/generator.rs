//! Test-generation service client.
//!
//! # Responsibilities
//! - Forward generation payloads to the OpenAI-compatible completions API
//! - Authenticate with the server-held bearer token
//! - Inject the configured model when the payload names none
//! - Relay upstream status and body to the HTTP layer

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::config::schema::GeneratorConfig;
use crate::upstream::types::{UpstreamError, UpstreamResult};

/// Client for the test-generation service.
#[derive(Clone)]
pub struct GeneratorClient {
    http: reqwest::Client,
    config: GeneratorConfig,
}

impl GeneratorClient {
    /// Create a new client with the given per-call timeout.
    pub fn new(config: GeneratorConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, config })
    }

    /// Forward one generation payload and return the decoded response.
    pub async fn generate(&self, mut payload: Value) -> UpstreamResult<Value> {
        let Some(creds) = self.config.credentials() else {
            return Err(UpstreamError::NotConfigured {
                service: "Test generation",
            });
        };

        if let (Some(model), Value::Object(map)) = (creds.model, &mut payload) {
            map.entry("model")
                .or_insert_with(|| Value::String(model.to_string()));
        }

        let url = completions_url(creds.api_base)?;
        tracing::debug!(url = %url, "Forwarding generation request");

        let response = self
            .http
            .post(url)
            .bearer_auth(creds.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                context: "Test generation request failed",
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        response.json().await.map_err(UpstreamError::Decode)
    }
}

/// Build the completions endpoint under the configured API base.
fn completions_url(base: &str) -> UpstreamResult<Url> {
    let mut url = Url::parse(base.trim_end_matches('/'))
        .map_err(|_| UpstreamError::BaseUrl(base.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| UpstreamError::BaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(["chat", "completions"]);
    Ok(url)
}
