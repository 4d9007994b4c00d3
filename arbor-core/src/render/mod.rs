//! Rendering and Reconciliation
//!
//! This module turns virtual trees into concrete output and keeps that output
//! up to date.
//!
//! - [`render_new`] creates a fresh concrete subtree from a virtual node.
//! - [`reconcile`] mutates an existing concrete node to match a virtual node,
//!   or creates and attaches one on the first pass.
//! - [`Context`] holds the host and root container and is the entry point for
//!   the initial render and for state replacement.
//!
//! # Flow
//!
//! ```text
//! Context::render ──► reconcile(None, node, container) ──► render_new
//!
//! replace_state ──► Component::render ──► reconcile(base, output, None)
//! ```
//!
//! Every pass runs to completion before returning. There is no batching:
//! each state replacement is one full pass.

mod context;
mod create;
mod diff;
mod shared;

pub use context::Context;
pub use create::render_new;
pub use diff::reconcile;
pub use shared::SharedRoot;

use crate::error::Result;
use crate::host::Host;
use crate::vnode::VNode;

/// Create a context for `container` and mount `node` into it.
pub fn mount<H: Host>(host: H, container: H::Node, node: &VNode) -> Result<Context<H>> {
    let mut cx = Context::new(host, container);
    cx.render(node)?;
    Ok(cx)
}
