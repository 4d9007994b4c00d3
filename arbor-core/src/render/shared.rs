//! Shared Root
//!
//! Reconciliation is synchronous and assumes a single writer. Hosts that
//! drive updates from several threads wrap their [`Context`] in a
//! [`SharedRoot`], which serializes every render and state replacement
//! behind one lock.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::context::Context;
use crate::component::InstanceId;
use crate::error::Result;
use crate::host::Host;
use crate::vnode::{State, VNode};

/// A cloneable, lock-protected [`Context`].
pub struct SharedRoot<H: Host> {
    inner: Arc<Mutex<Context<H>>>,
}

impl<H: Host> SharedRoot<H> {
    pub fn new(cx: Context<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cx)),
        }
    }

    /// Lock the context for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, Context<H>> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the context.
    pub fn with<R>(&self, f: impl FnOnce(&mut Context<H>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`Context::render`].
    pub fn render(&self, node: &VNode) -> Result<()> {
        self.inner.lock().render(node)
    }

    /// See [`Context::replace_state`].
    pub fn replace_state(&self, id: InstanceId, state: State) -> Result<()> {
        self.inner.lock().replace_state(id, state)
    }

    /// See [`Context::update_state`]. The read and the replacement happen
    /// under the same lock.
    pub fn update_state<F>(&self, id: InstanceId, f: F) -> Result<()>
    where
        F: FnOnce(&State) -> State,
    {
        self.inner.lock().update_state(id, f)
    }
}

impl<H: Host> Clone for SharedRoot<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, ComponentType};
    use crate::host::Document;
    use crate::vnode::{h, state, text, Props};
    use std::thread;

    struct Tally;

    impl Component for Tally {
        fn create(_props: &Props) -> Self {
            Tally
        }

        fn initial_state(&self) -> State {
            state([("marks", 0)])
        }

        fn render(&self, _props: &Props, state: &State) -> VNode {
            let marks = state.get("marks").and_then(|v| v.as_u64()).unwrap_or(0);
            h("div", None, (0..marks).map(|_| h("i", None, [text("|")])))
        }
    }

    #[test]
    fn serializes_updates_across_threads() {
        let mut doc = Document::new();
        let root = doc.create_element("body");
        let shared = SharedRoot::new(Context::new(doc, root));
        shared.render(&h(ComponentType::of::<Tally>(), None, [])).unwrap();

        let id = shared.with(|cx| cx.instances_of(ComponentType::of::<Tally>()).next()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..5 {
                        shared
                            .update_state(id, |current| {
                                let marks = current["marks"].as_u64().unwrap_or(0);
                                state([("marks", marks + 1)])
                            })
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let cx = shared.lock();
        let base = cx.instance(id).and_then(|i| i.base()).unwrap();
        assert_eq!(cx.host().children(base).len(), 20);
        assert_eq!(cx.instance(id).unwrap().state()["marks"], 20);
    }
}
