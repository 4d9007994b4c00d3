//! Concrete Nodes
//!
//! This module defines the node types stored in the in-memory [`Document`].
//!
//! [`Document`]: super::Document

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use smallvec::SmallVec;

/// Unique identifier for a node in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Generate a new unique node ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The kind of a concrete node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A text node. Holds a value and never has children.
    Text,

    /// A tagged element with attributes and children.
    Element,
}

/// Payload of a concrete node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Text content.
    Text(String),

    /// An element with its tag and insertion-ordered attributes.
    Element {
        tag: String,
        attributes: IndexMap<String, String>,
    },
}

/// Child list storage. Most elements have only a handful of children.
pub type Children = SmallVec<[NodeId; 4]>;

/// A node in the output tree.
#[derive(Debug, Clone)]
pub struct ConcreteNode {
    /// Unique identifier for this node.
    id: NodeId,

    /// Text value or element payload.
    data: NodeData,

    /// Children in insertion order. Always empty for text nodes.
    children: Children,

    /// The element this node is attached to, if any.
    parent: Option<NodeId>,
}

impl ConcreteNode {
    /// Create a new detached text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            data: NodeData::Text(value.into()),
            children: Children::new(),
            parent: None,
        }
    }

    /// Create a new detached element with no attributes.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            data: NodeData::Element {
                tag: tag.into(),
                attributes: IndexMap::new(),
            },
            children: Children::new(),
            parent: None,
        }
    }

    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's kind.
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Element { .. } => NodeKind::Element,
        }
    }

    /// Get the node's payload.
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// The element tag, or `None` for text nodes.
    pub fn tag(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    /// The text value, or `None` for elements.
    pub fn value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(value) => Some(value),
            NodeData::Element { .. } => None,
        }
    }

    /// Look up an attribute. Always `None` for text nodes.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match &self.data {
            NodeData::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    /// All attributes in insertion order. Empty for text nodes.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        let attributes = match &self.data {
            NodeData::Element { attributes, .. } => Some(attributes),
            NodeData::Text(_) => None,
        };
        attributes
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Replace the text value.
    ///
    /// Returns `false` for elements, which have no value to replace.
    pub fn set_value(&mut self, value: &str) -> bool {
        match &mut self.data {
            NodeData::Text(current) => {
                current.clear();
                current.push_str(value);
                true
            }
            NodeData::Element { .. } => false,
        }
    }

    /// Set an attribute, overwriting any previous value.
    ///
    /// Returns `false` for text nodes.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match &mut self.data {
            NodeData::Element { attributes, .. } => {
                attributes.insert(name.to_string(), value.to_string());
                true
            }
            NodeData::Text(_) => false,
        }
    }

    /// Get the children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Get the parent, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn remove_child(&mut self, child: NodeId) {
        self.children.retain(|c| *c != child);
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn text_node_holds_value() {
        let mut node = ConcreteNode::text("a");
        assert_eq!(node.kind(), NodeKind::Text);
        assert_eq!(node.value(), Some("a"));
        assert_eq!(node.tag(), None);

        assert!(node.set_value("b"));
        assert_eq!(node.value(), Some("b"));

        // Text nodes carry no attributes
        assert!(!node.set_attribute("class", "x"));
        assert_eq!(node.attributes().count(), 0);
    }

    #[test]
    fn element_attributes_keep_insertion_order() {
        let mut node = ConcreteNode::element("div");
        node.set_attribute("id", "root");
        node.set_attribute("class", "app");
        node.set_attribute("id", "main");

        let attrs: Vec<_> = node.attributes().collect();
        assert_eq!(attrs, vec![("id", "main"), ("class", "app")]);
        assert_eq!(node.attribute("class"), Some("app"));
    }

    #[test]
    fn element_ignores_value_writes() {
        let mut node = ConcreteNode::element("p");
        assert!(!node.set_value("ignored"));
        assert_eq!(node.value(), None);
        assert_eq!(node.tag(), Some("p"));
    }

    #[test]
    fn child_management() {
        let mut parent = ConcreteNode::element("ul");
        let a = NodeId::new();
        let b = NodeId::new();

        parent.push_child(a);
        parent.push_child(b);
        assert_eq!(parent.children(), &[a, b]);

        parent.remove_child(a);
        assert_eq!(parent.children(), &[b]);
    }
}
