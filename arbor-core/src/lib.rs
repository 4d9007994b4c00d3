//! Arbor Core
//!
//! This crate provides the reconciliation engine for the Arbor declarative
//! UI library. It implements:
//!
//! - Virtual nodes and a builder for them
//! - Creation of concrete output trees from virtual nodes
//! - Positional, in-place reconciliation of existing output
//! - Stateful components that re-render when their state is replaced
//!
//! The output tree belongs to a host. The crate ships an in-memory
//! [`Document`](host::Document); other targets implement [`Host`](host::Host).
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `vnode`: Virtual node types and the `h` builder
//! - `host`: The output tree contract and the in-memory document
//! - `component`: The component trait and live instances
//! - `render`: Rendering, reconciliation, and the render context
//!
//! # Example
//!
//! ```rust
//! use arbor_core::component::{Component, ComponentType};
//! use arbor_core::host::{Document, Host};
//! use arbor_core::render::mount;
//! use arbor_core::vnode::{h, props, state, text, Props, State, VNode};
//!
//! struct Fruits;
//!
//! impl Component for Fruits {
//!     fn create(_props: &Props) -> Self {
//!         Fruits
//!     }
//!
//!     fn initial_state(&self) -> State {
//!         state([("fruits", serde_json::json!(["apples"]))])
//!     }
//!
//!     fn render(&self, _props: &Props, state: &State) -> VNode {
//!         let fruits = state["fruits"].as_array().cloned().unwrap_or_default();
//!         h("ul", None, fruits.iter().map(|f| {
//!             h("li", None, [text(f.as_str().unwrap_or_default())])
//!         }))
//!     }
//! }
//!
//! let mut doc = Document::new();
//! let root = doc.create_element("div");
//!
//! let tree = h("div", props([("class", "app")]), [
//!     h("h1", None, [text("Fruit")]),
//!     h(ComponentType::of::<Fruits>(), None, []),
//! ]);
//! let mut cx = mount(doc, root, &tree).unwrap();
//!
//! let id = cx.instances_of(ComponentType::of::<Fruits>()).next().unwrap();
//! cx.replace_state(id, state([("fruits", serde_json::json!(["apples", "pears"]))])).unwrap();
//!
//! assert_eq!(cx.host().text_content(root), "Fruitapplespears");
//! ```

pub mod component;
pub mod error;
pub mod host;
pub mod render;
pub mod vnode;

pub use component::{Component, ComponentInstance, ComponentType, InstanceId, Lifecycle};
pub use error::{Error, Result};
pub use host::{Document, Host, NodeId};
pub use render::{mount, reconcile, render_new, Context, SharedRoot};
pub use vnode::{h, props, state, text, Props, State, VNode};
