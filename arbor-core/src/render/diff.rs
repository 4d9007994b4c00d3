//! Reconciler
//!
//! Brings an existing concrete node in line with a virtual node by mutating
//! it in place. Children are matched by position only.
//!
//! # Algorithm
//!
//! 1. No existing node: create the subtree and append it to `parent`. This is
//!    the first-render path and returns `None`.
//! 2. Text: overwrite the existing node's text.
//! 3. Component: instantiate, render, and reconcile the same existing node
//!    against the output. The component node's own children are added after
//!    the rendered root's, where [`render_new`] appended them.
//! 4. Element:
//!    a. If the child counts differ, create the *last* virtual child and
//!       append it. This handles exactly one appended child; removals,
//!       multiple insertions, and reordering are not handled.
//!    b. Reconcile every existing child against the virtual child at the same
//!       index.
//!
//! Attributes are only ever written when a node is created. An existing
//! child without a virtual counterpart fails the pass with
//! [`Error::MissingVirtualChild`]; mutations made before that point stay.

use tracing::{trace, warn};

use super::create::render_new;
use super::context::Context;
use crate::component::ComponentInstance;
use crate::error::{Error, Result};
use crate::host::Host;
use crate::vnode::VNode;

/// Reconcile `existing` against `node`.
///
/// Returns the existing node, or `None` on the first-render path.
pub fn reconcile<H: Host>(
    cx: &mut Context<H>,
    existing: Option<H::Node>,
    node: &VNode,
    parent: Option<H::Node>,
) -> Result<Option<H::Node>> {
    let Some(existing) = existing else {
        let Some(parent) = parent else {
            warn!("nothing to reconcile against and no parent to attach to");
            return Err(Error::MissingParent);
        };
        let created = render_new(cx, node)?;
        cx.host_mut().append_child(parent, created)?;
        trace!(?parent, ?created, "mounted new subtree");
        return Ok(None);
    };

    match node {
        VNode::Text(value) => {
            cx.host_mut().set_text(existing, value)?;
        }
        VNode::Component(c) => {
            let instance = ComponentInstance::<H::Node>::new(c.component, c.props.clone());
            trace!(component = c.component.name(), ?existing, "unwrapping component");
            let mut rendered = instance.render();
            rendered.extend_children(c.children.iter().cloned());
            reconcile(cx, Some(existing), &rendered, None)?;
        }
        VNode::Element(el) => {
            let count = cx.host().child_count(existing)?;
            if el.children.len() != count {
                let Some(last) = el.children.last() else {
                    warn!(?existing, count, "child count changed but no virtual children");
                    return Err(Error::NothingToAppend);
                };
                let created = render_new(cx, last)?;
                cx.host_mut().append_child(existing, created)?;
                trace!(?existing, ?created, "appended child");
            }

            for (index, child) in cx.host().child_nodes(existing)?.into_iter().enumerate() {
                let Some(virtual_child) = el.children.get(index) else {
                    warn!(?existing, index, "existing child has no virtual counterpart");
                    return Err(Error::MissingVirtualChild { index });
                };
                reconcile(cx, Some(child), virtual_child, None)?;
            }
        }
    }

    Ok(Some(existing))
}
