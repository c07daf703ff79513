use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::status::SocketStatus;

/// Callback invoked when the handle emits the subscribed lifecycle event.
/// Event payloads are never inspected, so the callback takes no arguments.
pub type Listener = Box<dyn FnMut()>;

/// Detaches the listener registered by [`SubscriptionHandle::on`].
pub type Unlisten = Box<dyn FnOnce()>;

/// Named transport lifecycle notifications emitted by the subscription
/// client. The set is fixed; the status aggregator listens to all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleEvent {
    Connecting,
    Connected,
    Reconnecting,
    Reconnected,
    Disconnected,
    Error,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 6] = [
        LifecycleEvent::Connecting,
        LifecycleEvent::Connected,
        LifecycleEvent::Reconnecting,
        LifecycleEvent::Reconnected,
        LifecycleEvent::Disconnected,
        LifecycleEvent::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleEvent::Connecting => "connecting",
            LifecycleEvent::Connected => "connected",
            LifecycleEvent::Reconnecting => "reconnecting",
            LifecycleEvent::Reconnected => "reconnected",
            LifecycleEvent::Disconnected => "disconnected",
            LifecycleEvent::Error => "error",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability surface of an already-constructed subscription client.
///
/// The client owns the protocol state machine, retry/backoff and reconnects;
/// this crate only reads its status and subscribes to its lifecycle events.
/// Registration takes `&self` because emitters hand out listener slots
/// through interior mutability, the way event-emitter types do.
pub trait SubscriptionHandle {
    /// Current status code. A cheap synchronous getter that cannot fail.
    fn status(&self) -> SocketStatus;

    /// Registers `listener` for `event` and returns the unsubscribe closure.
    fn on(&self, event: LifecycleEvent, listener: Listener) -> Unlisten;
}

/// Cheaply clonable reference to a [`SubscriptionHandle`].
///
/// Equality is pointer identity: two `SharedHandle`s are equal only when they
/// wrap the same client instance. That identity drives both context
/// memoization and the provider's remount-on-handle-change behavior.
#[derive(Clone)]
pub struct SharedHandle(Rc<dyn SubscriptionHandle>);

impl SharedHandle {
    pub fn new(handle: impl SubscriptionHandle + 'static) -> Self {
        Self(Rc::new(handle))
    }

    pub fn from_rc(handle: Rc<dyn SubscriptionHandle>) -> Self {
        Self(handle)
    }

    /// Stable identity of the wrapped client.
    pub fn key(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl Deref for SharedHandle {
    type Target = dyn SubscriptionHandle;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SharedHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedHandle").field(&self.key()).finish()
    }
}
