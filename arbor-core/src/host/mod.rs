//! Output Tree Hosts
//!
//! The reconciler never owns the output tree. It drives a [`Host`], which
//! creates concrete nodes and applies mutations to them. A browser binding
//! would implement [`Host`] over DOM nodes; this crate ships [`Document`], an
//! in-memory arena used by tests, benchmarks, and non-browser targets.
//!
//! # Contract
//!
//! A host must support:
//!
//! - creating text nodes and tagged element nodes
//! - assigning attributes
//! - appending a child to an element
//! - enumerating an element's children in insertion order
//!
//! Node handles are small copyable values. The reconciler holds no references
//! into the host between calls.

mod document;
mod node;
mod snapshot;

use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::error::Result;

pub use document::{Document, MutationStats};
pub use node::{Children, ConcreteNode, NodeData, NodeId, NodeKind};
pub use snapshot::Snapshot;

/// Child handles returned by [`Host::child_nodes`].
pub type NodeList<N> = SmallVec<[N; 8]>;

/// A concrete output tree the reconciler can write to.
pub trait Host {
    /// Handle to a node owned by this host.
    type Node: Copy + Eq + Hash + Debug + Send + 'static;

    /// Create a detached text node.
    fn create_text(&mut self, value: &str) -> Self::Node;

    /// Create a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Set an attribute. No validation is applied to the name or value.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str) -> Result<()>;

    /// Replace the value of a text node.
    fn set_text(&mut self, node: Self::Node, value: &str) -> Result<()>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<()>;

    /// The children of `node`, in insertion order.
    fn child_nodes(&self, node: Self::Node) -> Result<NodeList<Self::Node>>;

    /// Number of children of `node`.
    fn child_count(&self, node: Self::Node) -> Result<usize> {
        Ok(self.child_nodes(node)?.len())
    }
}
