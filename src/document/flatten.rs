//! Plain-text extraction from rich-text trees.
//!
//! # Responsibilities
//! - Collapse a document tree into the concatenation of its text leaves
//! - Preserve paragraph boundaries as single newlines
//! - Degrade to "" for unknown node kinds instead of failing
//!
//! # Design Decisions
//! - Total over any well-formed tree; display-only extraction prefers
//!   silent omission over error propagation
//! - The paragraph arm is checked before the generic content unwrap, so a
//!   paragraph always carries its trailing newline no matter what wraps it

use crate::document::node::RichTextNode;

/// Flatten a rich-text tree into plain text.
///
/// An absent document yields the empty string, as does any node kind the
/// extractor does not recognize.
pub fn extract_plain_text(node: Option<&RichTextNode>) -> String {
    node.map(flatten_node).unwrap_or_default()
}

fn flatten_node(node: &RichTextNode) -> String {
    match node {
        RichTextNode::Text(text) => text.clone(),
        RichTextNode::Sequence(items) => items.iter().map(flatten_node).collect(),
        RichTextNode::Node {
            node_type,
            text,
            content,
        } => {
            if node_type.as_deref() == Some("text") {
                if let Some(text) = text {
                    return text.clone();
                }
            }
            match content {
                Some(inner) if node_type.as_deref() == Some("paragraph") => {
                    let mut flattened = flatten_node(inner);
                    flattened.push('\n');
                    flattened
                }
                Some(inner) => flatten_node(inner),
                None => String::new(),
            }
        }
        RichTextNode::Other(_) => String::new(),
    }
}
