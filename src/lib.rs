//! Debounced connection-status tracking for Dioxus applications.
//!
//! Wraps an externally owned subscription socket client behind the
//! [`SubscriptionHandle`] capability trait, collapses its burst of lifecycle
//! events into one debounced status value, and shares `{status, handle}` with
//! the whole subtree through [`WebSocketProvider`]. [`WebSocketStatus`]
//! renders the classic status dot from that context.
//!
//! ```rust,ignore
//! rsx! {
//!     WebSocketProvider { handle: SharedHandle::new(my_client),
//!         Navbar { WebSocketStatus {} }
//!         Router::<Route> {}
//!     }
//! }
//! ```
//!
//! The transport, its retry policy and its reconnect behavior stay with the
//! client; readers mounted outside a provider get `CONNECTING` instead of a
//! panic, and status codes the visual table does not know degrade to the
//! disconnected dot.

mod aggregator;
mod debounce;
mod handle;
mod indicator;
mod provider;
mod status;
mod time;

pub use aggregator::{CancelGuard, LocalSpawn, StatusAggregator};
pub use debounce::TrailingDebounce;
pub use handle::{LifecycleEvent, Listener, SharedHandle, SubscriptionHandle, Unlisten};
pub use indicator::{
    WebSocketStatus, WebSocketStatusBadge, WebSocketStatusBadgeProps, WebSocketStatusProps,
};
pub use provider::{use_ws, use_ws_status, WebSocketProvider, WebSocketProviderProps, WsContext, DEBOUNCE_TIME};
pub use status::{SocketStatus, StatusVisual};
