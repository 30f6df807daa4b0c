//! HTTP-boundary error type.
//!
//! # Responsibilities
//! - Map relay failures to status codes and JSON bodies
//! - Guarantee every error response carries an `error` field
//! - Pass upstream statuses through verbatim, with the captured body
//!
//! # Design Decisions
//! - Handlers return `Result<_, ApiError>`; nothing escapes as a
//!   non-JSON response
//! - Network-level upstream failures collapse into a generic 502 so
//!   internal endpoints never leak into responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The inbound request was malformed.
    #[error("Invalid request: {message}")]
    Validation {
        message: String,
        details: Option<String>,
    },

    /// A required upstream credential set is absent.
    #[error("{0}")]
    NotConfigured(String),

    /// The upstream answered with a non-success status; relayed verbatim.
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        body: String,
    },

    /// The upstream could not be reached at all.
    #[error("Failed to reach upstream service")]
    Gateway,
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        let message = err.to_string();
        match err {
            UpstreamError::NotConfigured { .. } => ApiError::NotConfigured(message),
            UpstreamError::Status { status, body, .. } => ApiError::Upstream {
                status,
                message,
                body,
            },
            UpstreamError::Network(_) | UpstreamError::Decode(_) | UpstreamError::BaseUrl(_) => {
                ApiError::Gateway
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Gateway => StatusCode::BAD_GATEWAY,
        };

        let body = match &self {
            ApiError::Validation {
                details: Some(details),
                ..
            } => json!({ "error": self.to_string(), "details": details }),
            ApiError::Upstream { body, .. } => {
                json!({ "error": self.to_string(), "body": body })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_400_with_details() {
        let (status, body) = render(ApiError::Validation {
            message: "issue key is required".into(),
            details: Some("issueKey was blank".into()),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request: issue key is required");
        assert_eq!(body["details"], "issueKey was blank");
    }

    #[tokio::test]
    async fn test_missing_credentials_render_500() {
        let err = ApiError::from(UpstreamError::NotConfigured { service: "JIRA" });
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "JIRA credentials not configured on server");
    }

    #[tokio::test]
    async fn test_upstream_status_passes_through_with_body() {
        let err = ApiError::from(UpstreamError::Status {
            context: "Failed to fetch JIRA issue",
            status: 404,
            reason: "Not Found".into(),
            body: r#"{"errorMessages":["no such issue"]}"#.into(),
        });
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Failed to fetch JIRA issue: 404 Not Found");
        assert!(body["body"].as_str().unwrap().contains("no such issue"));
    }

    #[tokio::test]
    async fn test_gateway_renders_502() {
        let (status, body) = render(ApiError::Gateway).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Failed to reach upstream service");
    }
}
