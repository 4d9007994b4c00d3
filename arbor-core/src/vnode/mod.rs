//! Virtual Nodes
//!
//! A virtual node describes what the output tree should look like. It is one
//! of three variants:
//!
//! - **Text**: a string value with no children
//! - **Element**: a tag with optional props and ordered children
//! - **Component**: a component type with optional props and ordered children
//!
//! Virtual nodes are immutable values. A fresh tree is built on every render
//! and carries no keys: old and new trees correspond by child position only.

mod builder;
mod node;
mod values;

pub use builder::{h, text};
pub use node::{ComponentNode, ElementNode, NodeType, VNode};
pub use values::{attribute_text, from_json, props, state, Props, State};
