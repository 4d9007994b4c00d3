//! Components
//!
//! A component is a stateful unit that describes its output as a virtual
//! tree. Components are referenced from virtual trees by [`ComponentType`],
//! which knows how to construct an instance from props.
//!
//! # Lifecycle
//!
//! An instance is either *constructed* (props and initial state set, no
//! output yet) or *mounted* (its output has been rendered and it remembers the
//! concrete node it produced, its "base"). There is no unmount.
//!
//! A fresh instance is created every time the renderer or reconciler meets a
//! component node. Identity only persists for an instance the application
//! keeps hold of and updates through `replace_state`.

mod instance;

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::vnode::{Props, State, VNode};

pub use instance::{ComponentInstance, InstanceId, Lifecycle};

/// A component: construction from props plus a render function.
///
/// # Example
///
/// ```rust
/// use arbor_core::component::Component;
/// use arbor_core::vnode::{h, text, Props, State, VNode};
///
/// struct Greeting;
///
/// impl Component for Greeting {
///     fn create(_props: &Props) -> Self {
///         Greeting
///     }
///
///     fn render(&self, props: &Props, _state: &State) -> VNode {
///         let name = props.get("name").and_then(|v| v.as_str()).unwrap_or("world");
///         h("p", None, [text(format!("Hello, {name}"))])
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// Construct a component from its props.
    fn create(props: &Props) -> Self
    where
        Self: Sized;

    /// State of a freshly constructed instance. Empty unless overridden.
    fn initial_state(&self) -> State {
        State::new()
    }

    /// Describe the output for the given props and state.
    ///
    /// Expected to be a pure function of its arguments. This is not enforced,
    /// but reconciliation assumes it.
    fn render(&self, props: &Props, state: &State) -> VNode;
}

fn construct<C: Component>(props: &Props) -> Box<dyn Component> {
    Box::new(C::create(props))
}

/// Reference to a component type, usable as the type of a virtual node.
#[derive(Clone, Copy)]
pub struct ComponentType {
    id: TypeId,
    name: &'static str,
    construct: fn(&Props) -> Box<dyn Component>,
}

impl ComponentType {
    /// The component type for `C`.
    pub fn of<C: Component>() -> Self {
        let full = type_name::<C>();
        Self {
            id: TypeId::of::<C>(),
            name: short_name(full),
            construct: construct::<C>,
        }
    }

    /// Short type name, used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Construct a new component from props.
    pub fn construct(&self, props: &Props) -> Box<dyn Component> {
        (self.construct)(props)
    }
}

/// `a::b::Item<c::Value>` becomes `Item`.
fn short_name(full: &'static str) -> &'static str {
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentType {}

impl Hash for ComponentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentType").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vnode::{h, props, text};

    struct Label;

    impl Component for Label {
        fn create(_props: &Props) -> Self {
            Label
        }

        fn render(&self, props: &Props, _state: &State) -> VNode {
            let value = props.get("value").and_then(|v| v.as_str()).unwrap_or("");
            h("label", None, [text(value)])
        }
    }

    struct Other;

    impl Component for Other {
        fn create(_props: &Props) -> Self {
            Other
        }

        fn render(&self, _props: &Props, _state: &State) -> VNode {
            text("other")
        }
    }

    #[test]
    fn component_types_compare_by_type() {
        assert_eq!(ComponentType::of::<Label>(), ComponentType::of::<Label>());
        assert_ne!(ComponentType::of::<Label>(), ComponentType::of::<Other>());
    }

    #[test]
    fn component_type_name_is_short() {
        assert_eq!(ComponentType::of::<Label>().name(), "Label");
        assert_eq!(format!("{:?}", ComponentType::of::<Other>()), "ComponentType(\"Other\")");
    }

    struct Wrapper<T>(std::marker::PhantomData<T>);

    impl<T: Send + 'static> Component for Wrapper<T> {
        fn create(_props: &Props) -> Self {
            Wrapper(std::marker::PhantomData)
        }

        fn render(&self, _props: &Props, _state: &State) -> VNode {
            text("wrapped")
        }
    }

    #[test]
    fn generic_component_name_drops_arguments() {
        assert_eq!(ComponentType::of::<Wrapper<Label>>().name(), "Wrapper");
        assert_eq!(ComponentType::of::<Wrapper<Vec<Other>>>().name(), "Wrapper");
        assert_ne!(ComponentType::of::<Wrapper<Label>>(), ComponentType::of::<Wrapper<Other>>());
    }

    #[test]
    fn construct_and_render() {
        let ty = ComponentType::of::<Label>();
        let p = props([("value", "hi")]).unwrap_or_default();
        let component = ty.construct(&p);

        let rendered = component.render(&p, &component.initial_state());
        assert_eq!(rendered.tag(), Some("label"));
        assert_eq!(rendered.children()[0].as_text(), Some("hi"));
    }
}
