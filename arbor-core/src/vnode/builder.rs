//! Node Tree Builder

use super::node::{ComponentNode, ElementNode, NodeType, VNode};
use super::values::Props;

/// Build a virtual node from a type, optional props, and children.
///
/// `ty` is a tag name or a [`ComponentType`](crate::component::ComponentType).
/// Text children are passed as [`VNode::Text`], usually via `.into()` or
/// [`text`].
///
/// ```rust
/// use arbor_core::vnode::{h, props, text};
///
/// let tree = h("div", props([("class", "app")]), [
///     h("h1", None, [text("Hello")]),
/// ]);
/// assert_eq!(tree.children().len(), 1);
/// ```
pub fn h(
    ty: impl Into<NodeType>,
    props: Option<Props>,
    children: impl IntoIterator<Item = VNode>,
) -> VNode {
    let children = children.into_iter().collect();
    match ty.into() {
        NodeType::Tag(tag) => VNode::Element(ElementNode {
            tag,
            props,
            children,
        }),
        NodeType::Component(component) => VNode::Component(ComponentNode {
            component,
            props,
            children,
        }),
    }
}

/// Build a text node.
pub fn text(value: impl Into<String>) -> VNode {
    VNode::Text(value.into())
}
