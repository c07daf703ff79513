use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::logger::tracing::{debug, trace};
use futures_util::future::LocalBoxFuture;

use crate::debounce::TrailingDebounce;
use crate::handle::{LifecycleEvent, SharedHandle, Unlisten};
use crate::status::SocketStatus;
use crate::time;

/// Cancels the timer it guards when dropped, so replacing the pending guard
/// with a newer one is what resets the debounce window. Cancelling a timer
/// that already fired is a no-op.
pub struct CancelGuard(Option<Box<dyn FnOnce()>>);

impl CancelGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(cancel)))
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.0.take() {
            cancel();
        }
    }
}

/// Seam between the aggregator and whatever drives its timers: components
/// hand in the Dioxus scope spawner, tests a tokio local set.
pub trait LocalSpawn {
    fn spawn(&self, fut: LocalBoxFuture<'static, ()>) -> CancelGuard;
}

/// Converts a burst of heterogeneous lifecycle notifications into a single
/// debounced status publish.
///
/// On attach it registers one listener per [`LifecycleEvent`]. Every firing
/// listener reads the handle's status and arms a fresh full-window timer,
/// replacing (and thereby cancelling) any timer from an earlier event. When a
/// timer survives the whole window it publishes the status read at the last
/// trigger. Dropping the aggregator detaches every listener and cancels the
/// pending timer; a timer that slips through anyway is neutralized by the
/// debounce epoch guard.
pub struct StatusAggregator {
    unlisteners: Vec<Unlisten>,
    pending: Rc<RefCell<Option<CancelGuard>>>,
}

impl StatusAggregator {
    pub fn attach<S, F>(handle: SharedHandle, window: Duration, publish: F, spawner: S) -> Self
    where
        S: LocalSpawn + 'static,
        F: FnMut(SocketStatus) + 'static,
    {
        let debounce = Rc::new(RefCell::new(TrailingDebounce::new(window)));
        let pending: Rc<RefCell<Option<CancelGuard>>> = Rc::new(RefCell::new(None));
        let publish = Rc::new(RefCell::new(publish));
        let spawner = Rc::new(spawner);

        let unlisteners = LifecycleEvent::ALL
            .iter()
            .map(|&event| {
                let reader = handle.clone();
                let debounce = Rc::clone(&debounce);
                let pending = Rc::clone(&pending);
                let publish = Rc::clone(&publish);
                let spawner = Rc::clone(&spawner);

                handle.on(
                    event,
                    Box::new(move || {
                        // The event payload is irrelevant; only the status
                        // the handle reports right now matters.
                        let status = reader.status();
                        trace!(event = event.as_str(), %status, "socket lifecycle event");

                        let epoch = debounce.borrow_mut().trigger(status);
                        let window = debounce.borrow().window();

                        let debounce = Rc::clone(&debounce);
                        let publish = Rc::clone(&publish);
                        let timer = spawner.spawn(Box::pin(async move {
                            time::sleep(window).await;
                            if let Some(status) = debounce.borrow_mut().take_if_current(epoch) {
                                debug!(%status, "publishing debounced socket status");
                                (publish.borrow_mut())(status);
                            }
                        }));

                        // Replacing the guard cancels the previous timer, so
                        // at most one deferred publish is ever pending.
                        *pending.borrow_mut() = Some(timer);
                    }),
                )
            })
            .collect();

        debug!(listeners = LifecycleEvent::ALL.len(), "attached socket lifecycle listeners");

        Self { unlisteners, pending }
    }
}

impl Drop for StatusAggregator {
    fn drop(&mut self) {
        for unlisten in self.unlisteners.drain(..) {
            unlisten();
        }
        // Dropping the guard cancels any timer still pending.
        self.pending.borrow_mut().take();
        debug!("detached socket lifecycle listeners");
    }
}
