//! The content document model: `{root, content: [{type, props}]}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structured content document for one region or page template.
///
/// `root` names the document's root element; `content` is the node tree
/// under it. The raw (reference-carrying) and compiled (literal-carrying)
/// forms share this type; which one a given value is depends on where it
/// sits in a [`crate::compiler`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub content: Vec<ContentNode>,
}

impl ContentDocument {
    /// An empty document with the given root element name.
    pub fn empty(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            content: Vec::new(),
        }
    }

    /// Total node count, including nested children.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[ContentNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.content)
    }
}

/// One node of a content document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    /// The page-builder component type ("Button", "RichText", ...). Opaque
    /// to the engine.
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            props: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }
}
