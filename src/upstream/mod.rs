//! Outbound upstream clients.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → jira.rs (GET issue, basic auth, normalize summary/description)
//!     → generator.rs (POST payload, bearer auth, relay status/body)
//!     → types.rs (shared UpstreamError taxonomy)
//! ```
//!
//! # Design Decisions
//! - Every external call has a deadline (reqwest client-level timeout)
//! - Missing credentials are reported before any network traffic
//! - Upstream non-2xx statuses are captured with their raw body so the
//!   HTTP layer can relay them verbatim

pub mod generator;
pub mod jira;
pub mod types;

pub use generator::GeneratorClient;
pub use jira::{IssueContent, JiraClient};
pub use types::UpstreamError;
