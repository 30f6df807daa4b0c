//! Route handlers.
//!
//! # Responsibilities
//! - Validate inbound JSON payloads
//! - Call the upstream clients and relay their results
//! - Answer JSON on every path, including the 404 fallback

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::upstream::IssueContent;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Inbound payload for the issue-fetch route.
#[derive(Debug, Deserialize)]
pub struct FetchIssueRequest {
    #[serde(rename = "issueKey")]
    pub issue_key: String,
}

/// Health check endpoint, used by monitors and the CLI.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Fetch one issue from the tracker and return flattened content.
pub async fn fetch_issue(
    State(state): State<AppState>,
    payload: Result<Json<FetchIssueRequest>, JsonRejection>,
) -> Result<Json<IssueContent>, ApiError> {
    let Json(request) = payload.map_err(bad_json)?;

    if request.issue_key.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "issue key is required".into(),
            details: None,
        });
    }

    tracing::info!(issue_key = %request.issue_key, "Fetching issue");

    let issue = state
        .jira
        .fetch_issue(&request.issue_key)
        .await
        .map_err(|err| {
            tracing::error!(issue_key = %request.issue_key, error = %err, "Issue fetch failed");
            ApiError::from(err)
        })?;

    Ok(Json(issue))
}

/// Forward a generation payload to the test-generation service.
pub async fn generate_tests(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(bad_json)?;

    tracing::info!("Forwarding test generation request");

    let response = state.generator.generate(request).await.map_err(|err| {
        tracing::error!(error = %err, "Test generation failed");
        ApiError::from(err)
    })?;

    Ok(Json(response))
}

/// JSON 404 for unknown routes.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}

fn bad_json(rejection: JsonRejection) -> ApiError {
    ApiError::Validation {
        message: "malformed JSON body".into(),
        details: Some(rejection.body_text()),
    }
}
