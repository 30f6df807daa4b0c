//! Rich-text document subsystem.
//!
//! # Data Flow
//! ```text
//! Upstream issue JSON (description field)
//!     → node.rs (deserialize into RichTextNode tree)
//!     → flatten.rs (pre-order traversal, collect text leaves)
//!     → plain String returned to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - The tree is a closed set of variants with a catch-all arm, so
//!   flattening is total: unknown node kinds yield "" instead of an error
//! - Only "text" leaves carry content; structural nodes are unwrapped
//! - "paragraph" is the one structural node with rendering significance
//!   (a trailing newline)

pub mod flatten;
pub mod node;

pub use flatten::extract_plain_text;
pub use node::RichTextNode;
