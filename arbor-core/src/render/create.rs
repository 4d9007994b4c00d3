//! Output Renderer
//!
//! Turns a virtual node into a brand-new concrete subtree.

use tracing::trace;

use super::context::Context;
use crate::component::ComponentInstance;
use crate::error::Result;
use crate::host::Host;
use crate::vnode::{attribute_text, VNode};

/// Create the concrete subtree for `node`.
///
/// - Text becomes a text node.
/// - An element becomes an element of that tag, with every prop set as an
///   attribute.
/// - A component is instantiated, rendered, and its output created
///   recursively. The instance records that output as its base and is
///   registered with the context.
///
/// Children are then created in order and appended to the node produced
/// above. For a component node this is the component's rendered root.
pub fn render_new<H: Host>(cx: &mut Context<H>, node: &VNode) -> Result<H::Node> {
    let created = match node {
        VNode::Text(value) => return Ok(cx.host_mut().create_text(value)),
        VNode::Element(el) => {
            let host = cx.host_mut();
            let created = host.create_element(&el.tag);
            for (name, value) in el.props.iter().flatten() {
                host.set_attribute(created, name, &attribute_text(value))?;
            }
            created
        }
        VNode::Component(c) => {
            let mut instance = ComponentInstance::new(c.component, c.props.clone());
            trace!(
                instance = instance.id().raw(),
                component = c.component.name(),
                "instantiated component"
            );
            let rendered = instance.render();
            let created = render_new(cx, &rendered)?;
            instance.set_base(Some(created));
            cx.register(instance);
            created
        }
    };

    for child in node.children() {
        let child = render_new(cx, child)?;
        cx.host_mut().append_child(created, child)?;
    }

    Ok(created)
}
