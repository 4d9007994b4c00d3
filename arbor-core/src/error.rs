//! Errors
//!
//! The engine does not validate virtual trees. The variants below are the
//! points where a pass cannot continue (a missing parent on first render, an
//! existing child with no virtual counterpart, a host refusing a mutation)
//! surfaced as values instead of aborting the process.

use thiserror::Error;

use crate::component::InstanceId;
use crate::host::NodeId;

/// Errors produced while rendering or reconciling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node had to be created from scratch but no parent was given to attach it to.
    #[error("no existing node and no parent to attach the rendered node to")]
    MissingParent,

    /// An existing concrete child has no virtual child at the same position.
    ///
    /// Children are matched by index only, so a virtual element with fewer
    /// children than its concrete counterpart cannot be reconciled.
    #[error("existing child at index {index} has no virtual counterpart")]
    MissingVirtualChild { index: usize },

    /// Child counts differ but the virtual element has no child to append.
    #[error("child count changed but the virtual element has no children to append")]
    NothingToAppend,

    /// The node handle does not belong to this document.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// A child was appended to a text node.
    #[error("node {0:?} is a text node and cannot hold children")]
    NotAnElement(NodeId),

    /// A node was appended into itself or into one of its descendants.
    #[error("cannot append node {child:?} into {parent:?}, which it contains")]
    CyclicAppend { parent: NodeId, child: NodeId },

    /// No mounted component instance has this id.
    #[error("unknown component instance {0:?}")]
    UnknownInstance(InstanceId),

    /// Failure reported by a host implementation.
    #[error("host error: {0}")]
    Host(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
