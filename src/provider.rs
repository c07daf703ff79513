use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use futures_util::future::LocalBoxFuture;

use crate::aggregator::{CancelGuard, LocalSpawn, StatusAggregator};
use crate::handle::SharedHandle;
use crate::status::SocketStatus;

/// Quiet window before a status change is published, so that a flapping
/// connection does not thrash the UI.
pub const DEBOUNCE_TIME: Duration = Duration::from_millis(5000);

/// Shared context value: the debounced status plus the handle the provider is
/// watching. Both are signals, so consumers track handle swaps as well as
/// status changes. Consumers read, never write.
#[derive(Clone, Copy)]
pub struct WsContext {
    /// Debounced connection status. Written only by the provider's
    /// aggregator.
    pub status: Signal<SocketStatus>,
    /// The watched handle, for consumers that need to talk to the socket
    /// directly. `None` only in hand-built contexts (tests, storybooks).
    pub handle: Signal<Option<SharedHandle>>,
}

/// Raw context access, for callers that need the connection handle.
pub fn use_ws() -> Option<WsContext> {
    try_consume_context::<WsContext>()
}

/// Current debounced status. Outside any [`WebSocketProvider`] this degrades
/// to [`SocketStatus::CONNECTING`] rather than failing.
pub fn use_ws_status() -> SocketStatus {
    match try_consume_context::<WsContext>() {
        Some(cx) => (cx.status)(),
        None => SocketStatus::CONNECTING,
    }
}

/// Tracks the connection status of `handle` and shares it with every
/// descendant through [`WsContext`].
///
/// Handle identity is checked on every render: when a different client
/// instance is passed in, the old aggregator is dropped (detaching its
/// listeners and cancelling its timer) before the new handle is subscribed,
/// and the status starts over from `CONNECTING`. `debounce` overrides the
/// publish window (defaults to [`DEBOUNCE_TIME`]).
#[component]
pub fn WebSocketProvider(
    handle: SharedHandle,
    debounce: Option<Duration>,
    children: Element,
) -> Element {
    let window = debounce.unwrap_or(DEBOUNCE_TIME);
    let mut status = use_signal(|| SocketStatus::CONNECTING);
    let mut watched: Signal<Option<SharedHandle>> = use_signal(|| None);
    let slot: Rc<RefCell<Option<StatusAggregator>>> = use_hook(|| Rc::new(RefCell::new(None)));

    // `peek`, not `read`: the provider writes this signal below and must not
    // subscribe itself to it.
    let changed = watched.peek().as_ref() != Some(&handle);
    if changed {
        let mut aggregator = slot.borrow_mut();
        // Detach the old listeners before the new ones attach. A swapped-in
        // client starts over from the connecting phase.
        if aggregator.take().is_some() {
            status.set(SocketStatus::CONNECTING);
        }
        *aggregator = Some(StatusAggregator::attach(
            handle.clone(),
            window,
            move |current| status.set(current),
            ScopeSpawner,
        ));
        watched.set(Some(handle.clone()));
    }

    use_context_provider(|| WsContext {
        status,
        handle: watched,
    });

    children
}

/// Timer driver for aggregators mounted in components: debounce timers run as
/// scope tasks, so unmount also cancels whatever is still sleeping.
struct ScopeSpawner;

impl LocalSpawn for ScopeSpawner {
    fn spawn(&self, fut: LocalBoxFuture<'static, ()>) -> CancelGuard {
        let task = spawn(fut);
        CancelGuard::new(move || task.cancel())
    }
}
