//! Issue-tracker client.
//!
//! # Responsibilities
//! - Build the versioned issue endpoint from the configured base URL
//! - Authenticate with basic auth (email + API token)
//! - Normalize the response into flat summary/description strings
//! - Capture non-success statuses with their raw body for relaying
//!
//! # Design Decisions
//! - One bounded attempt per inbound request; retrying is the caller's
//!   concern, not the relay's
//! - A malformed success body degrades to empty fields rather than failing

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::schema::JiraConfig;
use crate::document::{extract_plain_text, RichTextNode};
use crate::upstream::types::{UpstreamError, UpstreamResult};

/// Path of the issue resource under the tracker's REST API.
const ISSUE_SEGMENTS: [&str; 4] = ["rest", "api", "3", "issue"];

/// Fields requested from the tracker.
const ISSUE_FIELDS: &str = "fields=summary,description";

/// Client for the issue-tracker REST API.
#[derive(Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    config: JiraConfig,
}

/// Normalized issue content returned to the browser client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueContent {
    pub summary: String,
    pub description: String,
}

/// Raw issue payload as the tracker returns it.
#[derive(Debug, Default, Deserialize)]
struct IssuePayload {
    #[serde(default)]
    fields: IssueFields,
}

#[derive(Debug, Default, Deserialize)]
struct IssueFields {
    #[serde(default)]
    summary: Option<String>,

    /// Plain string or a rich-text document tree.
    #[serde(default)]
    description: Option<RichTextNode>,
}

impl JiraClient {
    /// Create a new client with the given per-call timeout.
    pub fn new(config: JiraConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, config })
    }

    /// Fetch one issue and flatten its summary and description.
    ///
    /// Fails with [`UpstreamError::NotConfigured`] before any network
    /// traffic when credentials are incomplete.
    pub async fn fetch_issue(&self, issue_key: &str) -> UpstreamResult<IssueContent> {
        let Some(creds) = self.config.credentials() else {
            return Err(UpstreamError::NotConfigured { service: "JIRA" });
        };

        let url = issue_url(creds.base_url, issue_key)?;
        tracing::debug!(url = %url, "Fetching issue from tracker");

        let response = self
            .http
            .get(url)
            .basic_auth(creds.email, Some(creds.api_token))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                context: "Failed to fetch JIRA issue",
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        // The tracker occasionally returns bodies the model does not cover;
        // treat those as an empty payload rather than failing the request.
        let payload: IssuePayload = response.json().await.unwrap_or_default();
        Ok(payload.into())
    }
}

impl From<IssuePayload> for IssueContent {
    fn from(payload: IssuePayload) -> Self {
        Self {
            summary: payload.fields.summary.unwrap_or_default(),
            description: extract_plain_text(payload.fields.description.as_ref()),
        }
    }
}

/// Build the issue endpoint URL.
///
/// Trailing slashes of the base are stripped and the issue key is
/// percent-encoded as a single path segment.
fn issue_url(base: &str, issue_key: &str) -> UpstreamResult<Url> {
    let mut url = Url::parse(base.trim_end_matches('/'))
        .map_err(|_| UpstreamError::BaseUrl(base.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| UpstreamError::BaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(ISSUE_SEGMENTS.iter().copied().chain([issue_key]));
    url.set_query(Some(ISSUE_FIELDS));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_url_shape() {
        let url = issue_url("https://acme.atlassian.net", "PROJ-1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.atlassian.net/rest/api/3/issue/PROJ-1?fields=summary,description"
        );
    }

    #[test]
    fn test_issue_url_strips_trailing_slashes() {
        let url = issue_url("https://acme.atlassian.net///", "PROJ-1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.atlassian.net/rest/api/3/issue/PROJ-1?fields=summary,description"
        );
    }

    #[test]
    fn test_issue_key_is_percent_encoded() {
        let url = issue_url("https://acme.atlassian.net", "PROJ 1/x").unwrap();
        assert!(url.as_str().contains("/issue/PROJ%201%2Fx?"));
    }

    #[test]
    fn test_rich_description_is_flattened() {
        let payload: IssuePayload = serde_json::from_str(
            r#"{"fields":{"summary":"A summary","description":{
                "type":"doc","version":1,"content":[
                    {"type":"paragraph","content":[{"type":"text","text":"body"}]}
                ]}}}"#,
        )
        .unwrap();
        let content = IssueContent::from(payload);
        assert_eq!(content.summary, "A summary");
        assert_eq!(content.description, "body\n");
    }

    #[test]
    fn test_plain_string_description_passes_through() {
        let payload: IssuePayload =
            serde_json::from_str(r#"{"fields":{"description":"already plain"}}"#).unwrap();
        let content = IssueContent::from(payload);
        assert_eq!(content.summary, "");
        assert_eq!(content.description, "already plain");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let content = IssueContent::from(IssuePayload::default());
        assert_eq!(content.summary, "");
        assert_eq!(content.description, "");
    }
}
