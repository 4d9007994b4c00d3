//! Component Instances

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::{Component, ComponentType};
use crate::error::Result;
use crate::host::Host;
use crate::render::{reconcile, render_new, Context};
use crate::vnode::{Props, State, VNode};

/// Unique identifier for a component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Generate a new unique instance ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Props and initial state are set. Nothing has been rendered.
    Constructed,

    /// Output has been rendered; the instance holds its base node.
    Mounted,
}

/// A live component: the component value plus its props, state, and base.
///
/// `N` is the host's node handle type.
pub struct ComponentInstance<N> {
    id: InstanceId,
    component_type: ComponentType,
    component: Box<dyn Component>,
    props: Props,
    state: State,

    /// The concrete node produced by the last render or reconcile pass.
    base: Option<N>,
}

impl<N: Copy> ComponentInstance<N> {
    /// Construct an instance. Missing props are treated as empty.
    pub fn new(component_type: ComponentType, props: Option<Props>) -> Self {
        let props = props.unwrap_or_default();
        let component = component_type.construct(&props);
        let state = component.initial_state();
        Self {
            id: InstanceId::new(),
            component_type,
            component,
            props,
            state,
            base: None,
        }
    }

    /// Get the instance's unique ID.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The type this instance was constructed from.
    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// The concrete node this instance last produced.
    pub fn base(&self) -> Option<N> {
        self.base
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self.base {
            Some(_) => Lifecycle::Mounted,
            None => Lifecycle::Constructed,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.base.is_some()
    }

    /// Describe the current output.
    pub fn render(&self) -> VNode {
        self.component.render(&self.props, &self.state)
    }

    pub(crate) fn set_base(&mut self, base: Option<N>) {
        self.base = base;
    }

    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Render this instance fresh and append the output to `parent`.
    ///
    /// The created node becomes the base, so later calls to
    /// [`replace_state`](Self::replace_state) reconcile against it. Components
    /// nested in the output are registered with the context; this instance
    /// stays with the caller.
    pub fn mount<H>(&mut self, cx: &mut Context<H>, parent: N) -> Result<N>
    where
        H: Host<Node = N>,
    {
        let created = render_new(cx, &self.render())?;
        cx.host_mut().append_child(parent, created)?;
        self.base = Some(created);
        debug!(
            instance = self.id.raw(),
            component = self.component_type.name(),
            "mounted instance"
        );
        Ok(created)
    }

    /// Replace the whole state and re-render synchronously.
    ///
    /// The new state is not merged with the old one. The fresh output is
    /// reconciled against the current base, and the base is overwritten with
    /// the result. An instance that was never mounted has no base and no
    /// parent to attach to, so the pass fails with
    /// [`Error::MissingParent`](crate::Error::MissingParent).
    pub fn replace_state<H>(&mut self, cx: &mut Context<H>, state: State) -> Result<()>
    where
        H: Host<Node = N>,
    {
        debug!(
            instance = self.id.raw(),
            component = self.component_type.name(),
            "replacing state"
        );
        self.state = state;
        let rendered = self.render();
        self.base = reconcile(cx, self.base, &rendered, None)?;
        Ok(())
    }
}

impl<N: fmt::Debug> fmt::Debug for ComponentInstance<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentInstance")
            .field("id", &self.id)
            .field("component", &self.component_type)
            .field("props", &self.props)
            .field("state", &self.state)
            .field("base", &self.base)
            .finish()
    }
}
