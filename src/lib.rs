//! Issue Relay Library
//!
//! Backend-for-frontend relay: fetches issues from a tracker with
//! server-held credentials, flattens rich-text descriptions, and proxies
//! test-generation requests.

pub mod config;
pub mod document;
pub mod http;
pub mod lifecycle;
pub mod upstream;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
