//! Rich-text tree model.
//!
//! Issue descriptions arrive either as a bare string or as an
//! Atlassian-Document-Format tree: `type`-tagged objects whose children sit
//! in a nested `content` array. Only the shapes needed for text extraction
//! are modeled; everything else falls into the catch-all variant.

use serde::{Deserialize, Serialize};

/// One node of a rich-text document.
///
/// Deserialized untagged, so the JSON shape picks the variant: strings and
/// arrays map directly, objects map to [`RichTextNode::Node`] (unknown keys
/// ignored), and any other JSON value lands in [`RichTextNode::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichTextNode {
    /// A bare string.
    Text(String),

    /// An ordered sequence of nodes.
    Sequence(Vec<RichTextNode>),

    /// A `type`-tagged node with optional `text` and `content` fields.
    Node {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        node_type: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<Box<RichTextNode>>,
    },

    /// Any other well-formed JSON value (number, bool, null). Flattens to
    /// the empty string.
    Other(serde_json::Value),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_deserializes_to_text() {
        let node: RichTextNode = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(node, RichTextNode::Text("plain".into()));
    }

    #[test]
    fn test_array_deserializes_to_sequence() {
        let node: RichTextNode = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(
            node,
            RichTextNode::Sequence(vec![
                RichTextNode::Text("a".into()),
                RichTextNode::Text("b".into()),
            ])
        );
    }

    #[test]
    fn test_object_keeps_type_tag_and_ignores_unknown_keys() {
        let node: RichTextNode =
            serde_json::from_str(r#"{"type":"heading","attrs":{"level":1}}"#).unwrap();
        match node {
            RichTextNode::Node {
                node_type,
                text,
                content,
            } => {
                assert_eq!(node_type.as_deref(), Some("heading"));
                assert!(text.is_none());
                assert!(content.is_none());
            }
            other => panic!("expected Node, got {other:?}"),
        }
    }

    #[test]
    fn test_scalars_fall_through_to_other() {
        let node: RichTextNode = serde_json::from_str("42").unwrap();
        assert!(matches!(node, RichTextNode::Other(_)));

        let node: RichTextNode = serde_json::from_str("null").unwrap();
        assert!(matches!(node, RichTextNode::Other(serde_json::Value::Null)));
    }
}
