//! Shared error definitions for upstream calls.

use thiserror::Error;

/// Errors that can occur while talking to an upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Required credentials are absent from the server environment.
    #[error("{service} credentials not configured on server")]
    NotConfigured { service: &'static str },

    /// The upstream answered with a non-success status.
    #[error("{context}: {status} {reason}")]
    Status {
        context: &'static str,
        status: u16,
        reason: String,
        body: String,
    },

    /// The upstream could not be reached, or the attempt timed out.
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response carried a body that could not be decoded.
    #[error("upstream response could not be decoded: {0}")]
    Decode(reqwest::Error),

    /// The configured base URL cannot be extended with path segments.
    #[error("upstream base URL is not usable: {0:?}")]
    BaseUrl(String),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
