// Shared by multiple test harnesses; not every harness uses every helper.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus_ws_status::{LifecycleEvent, Listener, SocketStatus, SubscriptionHandle, Unlisten};

/// In-memory stand-in for a subscription transport client: a settable status
/// getter plus a listener registry with named lifecycle events.
#[derive(Clone, Default)]
pub struct StubSocket {
    inner: Rc<StubInner>,
}

#[derive(Default)]
struct StubInner {
    status: Cell<SocketStatus>,
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<u64, (LifecycleEvent, Rc<RefCell<Listener>>)>>,
}

impl StubSocket {
    pub fn new(status: SocketStatus) -> Self {
        let socket = Self::default();
        socket.set_status(status);
        socket
    }

    pub fn set_status(&self, status: SocketStatus) {
        self.inner.status.set(status);
    }

    /// Fires every listener registered for `event`, synchronously, the way a
    /// real emitter delivers on the current event-loop turn.
    pub fn emit(&self, event: LifecycleEvent) {
        let fired: Vec<Rc<RefCell<Listener>>> = self
            .inner
            .listeners
            .borrow()
            .values()
            .filter(|(registered, _)| *registered == event)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in fired {
            (listener.borrow_mut())();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, event: LifecycleEvent) -> usize {
        self.inner
            .listeners
            .borrow()
            .values()
            .filter(|(registered, _)| *registered == event)
            .count()
    }
}

impl SubscriptionHandle for StubSocket {
    fn status(&self) -> SocketStatus {
        self.inner.status.get()
    }

    fn on(&self, event: LifecycleEvent, listener: Listener) -> Unlisten {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .insert(id, (event, Rc::new(RefCell::new(listener))));

        let inner = Rc::clone(&self.inner);
        Box::new(move || {
            inner.listeners.borrow_mut().remove(&id);
        })
    }
}
