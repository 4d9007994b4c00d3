//! In-Memory Document
//!
//! An arena of [`ConcreteNode`]s indexed by [`NodeId`]. Nodes are never
//! removed: the engine has no removal path, and detached nodes simply stay
//! in the arena until the document is dropped.
//!
//! The document also counts the mutations it receives. Callers can reset the
//! counters before a pass and inspect them afterwards to check that a pass
//! only did what it had to.

use std::collections::HashMap;

use tracing::trace;

use super::node::{ConcreteNode, NodeData, NodeId};
use super::snapshot::Snapshot;
use super::{Host, NodeList};
use crate::error::{Error, Result};

/// Counters for the mutations applied to a [`Document`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationStats {
    /// Text nodes created.
    pub texts_created: usize,
    /// Elements created.
    pub elements_created: usize,
    /// Child appends.
    pub appends: usize,
    /// Text value writes, including writes that left the value unchanged.
    pub text_writes: usize,
    /// Attribute writes.
    pub attribute_writes: usize,
}

impl MutationStats {
    /// Total number of nodes created.
    pub fn nodes_created(&self) -> usize {
        self.texts_created + self.elements_created
    }
}

/// In-memory output tree.
#[derive(Debug, Default)]
pub struct Document {
    /// All nodes, indexed by ID.
    nodes: HashMap<NodeId, ConcreteNode>,

    stats: MutationStats,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
            stats: MutationStats::default(),
        }
    }

    fn insert(&mut self, node: ConcreteNode) -> NodeId {
        let id = node.id();
        self.nodes.insert(id, node);
        id
    }

    /// Get a reference to a node.
    pub fn get(&self, id: NodeId) -> Option<&ConcreteNode> {
        self.nodes.get(&id)
    }

    fn node(&self, id: NodeId) -> Result<&ConcreteNode> {
        self.nodes.get(&id).ok_or(Error::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut ConcreteNode> {
        self.nodes.get_mut(&id).ok_or(Error::UnknownNode(id))
    }

    /// The element tag of `id`, if it is an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(ConcreteNode::tag)
    }

    /// The text value of `id`, if it is a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(ConcreteNode::value)
    }

    /// An attribute of `id`.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|node| node.attribute(name))
    }

    /// The children of `id`. Empty for unknown nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(ConcreteNode::children).unwrap_or_default()
    }

    /// The parent of `id`, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(ConcreteNode::parent)
    }

    /// Concatenated text of every text node under `id`, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(node) = self.get(id) {
            match node.data() {
                NodeData::Text(value) => out.push_str(value),
                NodeData::Element { .. } => {
                    for child in node.children() {
                        self.collect_text(*child, out);
                    }
                }
            }
        }
    }

    /// Total number of nodes ever created in this document.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Mutation counters since creation or the last [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> MutationStats {
        self.stats
    }

    /// Zero the mutation counters.
    pub fn reset_stats(&mut self) {
        self.stats = MutationStats::default();
    }

    /// Capture the subtree rooted at `id`.
    pub fn snapshot(&self, id: NodeId) -> Result<Snapshot> {
        let node = self.node(id)?;
        Ok(match node.data() {
            NodeData::Text(value) => Snapshot::Text {
                value: value.clone(),
            },
            NodeData::Element { tag, attributes } => Snapshot::Element {
                tag: tag.clone(),
                attributes: attributes.clone(),
                children: node
                    .children()
                    .iter()
                    .map(|child| self.snapshot(*child))
                    .collect::<Result<_>>()?,
            },
        })
    }

    /// Render the subtree rooted at `id` as markup.
    pub fn to_html(&self, id: NodeId) -> Result<String> {
        Ok(self.snapshot(id)?.to_html())
    }
}

impl Host for Document {
    type Node = NodeId;

    fn create_text(&mut self, value: &str) -> NodeId {
        self.stats.texts_created += 1;
        let id = self.insert(ConcreteNode::text(value));
        trace!(node = id.raw(), value, "created text node");
        id
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.stats.elements_created += 1;
        let id = self.insert(ConcreteNode::element(tag));
        trace!(node = id.raw(), tag, "created element");
        id
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        if self.node_mut(node)?.set_attribute(name, value) {
            self.stats.attribute_writes += 1;
        } else {
            trace!(node = node.raw(), name, "attribute on text node ignored");
        }
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, value: &str) -> Result<()> {
        // Like a DOM element's node value, writing text to an element does nothing.
        if self.node_mut(node)?.set_value(value) {
            self.stats.text_writes += 1;
        } else {
            trace!(node = node.raw(), "text write on element ignored");
        }
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.node(parent)?.value().is_some() {
            return Err(Error::NotAnElement(parent));
        }

        let mut ancestor = Some(parent);
        while let Some(node) = ancestor {
            if node == child {
                return Err(Error::CyclicAppend { parent, child });
            }
            ancestor = self.node(node)?.parent();
        }

        // Appending an attached node moves it.
        if let Some(previous) = self.node(child)?.parent() {
            self.node_mut(previous)?.remove_child(child);
        }

        self.node_mut(parent)?.push_child(child);
        self.node_mut(child)?.set_parent(Some(parent));
        self.stats.appends += 1;
        Ok(())
    }

    fn child_nodes(&self, node: NodeId) -> Result<NodeList<NodeId>> {
        Ok(self.node(node)?.children().iter().copied().collect())
    }

    fn child_count(&self, node: NodeId) -> Result<usize> {
        Ok(self.node(node)?.children().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_append() {
        let mut doc = Document::new();

        let ul = doc.create_element("ul");
        let li = doc.create_element("li");
        let text = doc.create_text("apples");

        doc.append_child(li, text).unwrap();
        doc.append_child(ul, li).unwrap();

        assert_eq!(doc.node_count(), 3);
        assert_eq!(doc.children(ul), &[li]);
        assert_eq!(doc.parent(li), Some(ul));
        assert_eq!(doc.text_content(ul), "apples");
    }

    #[test]
    fn append_to_text_node_fails() {
        let mut doc = Document::new();
        let text = doc.create_text("a");
        let child = doc.create_text("b");

        assert_eq!(doc.append_child(text, child), Err(Error::NotAnElement(text)));
        assert_eq!(doc.parent(child), None);
    }

    #[test]
    fn unknown_nodes_are_reported() {
        let mut doc = Document::new();
        let stray = NodeId::new();

        assert_eq!(doc.set_text(stray, "x"), Err(Error::UnknownNode(stray)));
        assert_eq!(doc.child_count(stray), Err(Error::UnknownNode(stray)));
        assert!(doc.children(stray).is_empty());
    }

    #[test]
    fn append_moves_attached_node() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_text("x");

        doc.append_child(a, child).unwrap();
        doc.append_child(b, child).unwrap();

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn append_into_own_subtree_fails() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("p");
        doc.append_child(outer, inner).unwrap();

        assert_eq!(
            doc.append_child(outer, outer),
            Err(Error::CyclicAppend { parent: outer, child: outer })
        );
        assert_eq!(
            doc.append_child(inner, outer),
            Err(Error::CyclicAppend { parent: inner, child: outer })
        );

        // The tree is left as it was
        assert_eq!(doc.children(outer), &[inner]);
        assert_eq!(doc.parent(outer), None);
        assert_eq!(doc.to_html(outer).unwrap(), "<div><p></p></div>");
    }

    #[test]
    fn text_write_on_element_is_ignored() {
        let mut doc = Document::new();
        let div = doc.create_element("div");

        doc.set_text(div, "hello").unwrap();

        assert_eq!(doc.text(div), None);
        assert_eq!(doc.stats().text_writes, 0);
    }

    #[test]
    fn stats_count_mutations() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        let text = doc.create_text("a");
        doc.set_attribute(div, "class", "app").unwrap();
        doc.append_child(div, text).unwrap();
        doc.set_text(text, "b").unwrap();

        let stats = doc.stats();
        assert_eq!(stats.elements_created, 1);
        assert_eq!(stats.texts_created, 1);
        assert_eq!(stats.nodes_created(), 2);
        assert_eq!(stats.attribute_writes, 1);
        assert_eq!(stats.appends, 1);
        assert_eq!(stats.text_writes, 1);

        doc.reset_stats();
        assert_eq!(doc.stats(), MutationStats::default());
    }

    #[test]
    fn html_rendering() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(div, "class", "app").unwrap();
        let h1 = doc.create_element("h1");
        let title = doc.create_text("Title & more");
        doc.append_child(h1, title).unwrap();
        doc.append_child(div, h1).unwrap();

        assert_eq!(
            doc.to_html(div).unwrap(),
            r#"<div class="app"><h1>Title &amp; more</h1></div>"#
        );
    }
}
