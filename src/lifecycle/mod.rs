//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Build server → Bind listener → Run
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C (or a test trigger) → broadcast → Stop accepting → Drain → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
