//! Virtual Node Types

use crate::component::ComponentType;

use super::values::Props;

/// Description of desired output.
///
/// The variant is fixed when the node is built, so neither the renderer nor
/// the reconciler inspect types at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    /// A text value.
    Text(String),

    /// A tagged element.
    Element(ElementNode),

    /// A component to instantiate and render.
    Component(ComponentNode),
}

/// A tagged element with optional props and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub props: Option<Props>,
    pub children: Vec<VNode>,
}

/// A component reference with optional props and ordered children.
///
/// The children are appended to the component's rendered root, after the
/// children the component rendered itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    pub component: ComponentType,
    pub props: Option<Props>,
    pub children: Vec<VNode>,
}

impl VNode {
    /// The ordered children. Empty for text.
    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Text(_) => &[],
            VNode::Element(el) => &el.children,
            VNode::Component(c) => &c.children,
        }
    }

    /// The props, if any were given. Always `None` for text.
    pub fn props(&self) -> Option<&Props> {
        match self {
            VNode::Text(_) => None,
            VNode::Element(el) => el.props.as_ref(),
            VNode::Component(c) => c.props.as_ref(),
        }
    }

    /// The text value, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VNode::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Append `extra` to this node's children. Text has no children and is
    /// left unchanged.
    pub(crate) fn extend_children(&mut self, extra: impl IntoIterator<Item = VNode>) {
        match self {
            VNode::Text(_) => {}
            VNode::Element(el) => el.children.extend(extra),
            VNode::Component(c) => c.children.extend(extra),
        }
    }

    /// The element tag, if this is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element(el) => Some(&el.tag),
            _ => None,
        }
    }
}

impl From<&str> for VNode {
    fn from(value: &str) -> Self {
        VNode::Text(value.to_string())
    }
}

impl From<String> for VNode {
    fn from(value: String) -> Self {
        VNode::Text(value)
    }
}

/// What a built node refers to: a tag or a component.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    Tag(String),
    Component(ComponentType),
}

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        NodeType::Tag(tag.to_string())
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        NodeType::Tag(tag)
    }
}

impl From<ComponentType> for NodeType {
    fn from(component: ComponentType) -> Self {
        NodeType::Component(component)
    }
}
