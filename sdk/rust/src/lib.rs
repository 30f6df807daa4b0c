//! Client SDK for the Issue Relay.
//!
//! Wraps every call in per-attempt timeouts and bounded retries with
//! exponential backoff, so transient relay or network failures are
//! absorbed before they reach the caller.

pub mod backoff;
pub mod client;
pub mod error;

pub use client::{IssueContent, RelayClient, RequestOptions};
pub use error::ClientError;
