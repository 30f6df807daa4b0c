//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (read variables, semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc to the HTTP layer and upstream clients
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so a bare environment still boots
//! - Upstream credentials are optional at startup: their absence is a
//!   per-request 500, never a boot failure

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::GeneratorConfig;
pub use schema::JiraConfig;
pub use schema::ListenerConfig;
pub use schema::RelayConfig;
