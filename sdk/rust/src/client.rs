//! Relay client with retry, backoff, and per-attempt timeouts.
//!
//! # Responsibilities
//! - Issue JSON POSTs against the relay API
//! - Bound every attempt with its own deadline
//! - Retry failed attempts with exponential backoff, surfacing only the
//!   final failure
//!
//! # Design Decisions
//! - Attempts are strictly sequential; cancelling a deadline aborts only
//!   that attempt's in-flight call
//! - A 2xx response never triggers another send: a malformed success body
//!   fails the attempt like any other error
//! - Only the last error's message survives, folded into the final error

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backoff::{calculate_backoff, BASE_DELAY_MS, MAX_DELAY_MS};
use crate::error::ClientError;

/// Retry and deadline settings for one logical call.
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    /// Maximum number of network attempts (inclusive).
    pub retries: u32,

    /// Deadline for each individual attempt.
    pub timeout: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            retries: 3,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Flattened issue content as the relay returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueContent {
    pub summary: String,
    pub description: String,
}

/// Error body shape the relay uses for failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the relay API.
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// Create a new client for the given relay base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST `body` to `path`, retrying per `options`.
    ///
    /// Attempts run one after another; between failures the client sleeps
    /// `min(1000 * 2^(attempt-1), 5000)` milliseconds. The first success
    /// returns immediately; the last failure is wrapped with the attempt
    /// count.
    pub async fn request<T, B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        for attempt in 1..=options.retries {
            tracing::debug!(attempt, retries = options.retries, url = %url, "Request attempt");

            match self.attempt(&url, body, options.timeout).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(attempt, error = %err, "Attempt failed");

                    if attempt == options.retries {
                        return Err(ClientError::Exhausted {
                            attempts: options.retries,
                            message: err.to_string(),
                        });
                    }

                    tokio::time::sleep(calculate_backoff(attempt, BASE_DELAY_MS, MAX_DELAY_MS))
                        .await;
                }
            }
        }

        // Reached only with retries == 0.
        Err(ClientError::Exhausted {
            attempts: options.retries,
            message: "request was not attempted".into(),
        })
    }

    /// One bounded network attempt.
    async fn attempt<T, B>(&self, url: &str, body: &B, timeout: Duration) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let send = self.http.post(url).json(body).send();
        let response = tokio::time::timeout(timeout, send)
            .await
            .map_err(|_| ClientError::Timeout(timeout))?
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let fallback = format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            let message = match response.json::<ErrorBody>().await {
                Ok(ErrorBody { error: Some(error) }) => error,
                _ => fallback,
            };
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(ClientError::Decode)
    }

    /// Forward a generation payload; generation is slow, so the deadline
    /// is stretched to 30 seconds per attempt.
    pub async fn generate_tests(&self, request: &Value) -> Result<Value, ClientError> {
        self.request(
            "/api/generate-tests",
            request,
            RequestOptions {
                timeout: Duration::from_secs(30),
                ..RequestOptions::default()
            },
        )
        .await
    }

    /// Fetch one issue's flattened summary and description.
    pub async fn fetch_issue(&self, issue_key: &str) -> Result<IssueContent, ClientError> {
        self.request(
            "/api/jira/fetch",
            &serde_json::json!({ "issueKey": issue_key }),
            RequestOptions::default(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = RelayClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_default_options() {
        let options = RequestOptions::default();
        assert_eq!(options.retries, 3);
        assert_eq!(options.timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_zero_retries_never_sends() {
        // Nothing listens on this address; with zero attempts allowed the
        // call must fail without touching the network.
        let client = RelayClient::new("http://127.0.0.1:9");
        let result: Result<Value, _> = client
            .request(
                "/api/health",
                &Value::Null,
                RequestOptions {
                    retries: 0,
                    timeout: Duration::from_millis(50),
                },
            )
            .await;
        match result {
            Err(ClientError::Exhausted { attempts, message }) => {
                assert_eq!(attempts, 0);
                assert!(message.contains("not attempted"));
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }
}
