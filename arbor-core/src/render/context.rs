//! Render Context
//!
//! The context ties a [`Host`] to the root container the application mounts
//! into, and keeps every component instance the renderer mounted. It is
//! threaded through every render and reconcile call; there is no global
//! root.
//!
//! Registered instances are how application code reaches a live component
//! after the initial render: look it up with [`Context::instances_of`] and
//! drive it with [`Context::replace_state`].

use indexmap::IndexMap;
use tracing::debug_span;

use super::diff::reconcile;
use crate::component::{ComponentInstance, ComponentType, InstanceId};
use crate::error::{Error, Result};
use crate::host::Host;
use crate::vnode::{State, VNode};

/// A host, its root container, and the mounted component instances.
pub struct Context<H: Host> {
    host: H,

    /// The node the initial render is appended to.
    container: H::Node,

    /// Instances created by the renderer, in mount order.
    instances: IndexMap<InstanceId, ComponentInstance<H::Node>>,
}

impl<H: Host> Context<H> {
    /// Create a context that renders into `container`.
    pub fn new(host: H, container: H::Node) -> Self {
        Self {
            host,
            container,
            instances: IndexMap::new(),
        }
    }

    /// The root container.
    pub fn container(&self) -> H::Node {
        self.container
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the context and return the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Mount `node` into the root container.
    ///
    /// This is the first reconciliation pass: there is no existing node, so
    /// the tree is created and appended to the container. Calling it again
    /// appends another tree; it does not update the first one.
    pub fn render(&mut self, node: &VNode) -> Result<()> {
        let container = self.container;
        let _span = debug_span!("render", ?container).entered();
        reconcile(self, None, node, Some(container))?;
        Ok(())
    }

    /// Get a mounted instance.
    pub fn instance(&self, id: InstanceId) -> Option<&ComponentInstance<H::Node>> {
        self.instances.get(&id)
    }

    /// All mounted instances, in mount order.
    pub fn instances(&self) -> impl Iterator<Item = &ComponentInstance<H::Node>> {
        self.instances.values()
    }

    /// IDs of the mounted instances of `component`, in mount order.
    pub fn instances_of(&self, component: ComponentType) -> impl Iterator<Item = InstanceId> + '_ {
        self.instances
            .values()
            .filter(move |instance| instance.component_type() == component)
            .map(ComponentInstance::id)
    }

    pub(crate) fn register(&mut self, instance: ComponentInstance<H::Node>) -> InstanceId {
        let id = instance.id();
        self.instances.insert(id, instance);
        id
    }

    /// Replace the state of a mounted instance and re-render it.
    ///
    /// Runs one full reconciliation pass against the instance's base before
    /// returning. See [`ComponentInstance::replace_state`].
    pub fn replace_state(&mut self, id: InstanceId, state: State) -> Result<()> {
        let _span = debug_span!("replace_state", instance = id.raw()).entered();

        let (base, rendered) = {
            let instance = self
                .instances
                .get_mut(&id)
                .ok_or(Error::UnknownInstance(id))?;
            instance.set_state(state);
            (instance.base(), instance.render())
        };

        let base = reconcile(self, base, &rendered, None)?;

        if let Some(instance) = self.instances.get_mut(&id) {
            instance.set_base(base);
        }
        Ok(())
    }

    /// Derive a new state from the current one, then replace it.
    pub fn update_state<F>(&mut self, id: InstanceId, f: F) -> Result<()>
    where
        F: FnOnce(&State) -> State,
    {
        let next = {
            let instance = self.instance(id).ok_or(Error::UnknownInstance(id))?;
            f(instance.state())
        };
        self.replace_state(id, next)
    }
}
