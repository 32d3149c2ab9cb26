//! # Snapshot observers for the toast store.
//!
//! This module provides the [`Observe`] trait, the closure adapter
//! [`ObserverFn`], and the [`Subscription`] handle returned by
//! [`Store::subscribe`](crate::Store::subscribe).
//!
//! ## Architecture
//! ```text
//! Snapshot flow:
//!   enqueue / dismiss / update ──► Dispatcher ──► next Snapshot
//!                                                   │
//!                                    registry copy taken here
//!                                                   │
//!                  ┌────────────────┬───────────────┼───────────────┐
//!                  ▼                ▼               ▼               ▼
//!            on_snapshot()    on_snapshot()   on_snapshot()        ...
//!            (observer 1)     (observer 2)    (observer N)   (registration order)
//! ```
//!
//! ## Observer kinds
//! - **Renderers** - redraw the visible toasts from the snapshot
//! - **Passive observers** - react to [`Cause`](crate::Cause) (logging, sounds, badges)
//!
//! ## Implementing custom observers
//! ```no_run
//! use toastbox::{Observe, Snapshot};
//!
//! struct Badge;
//!
//! impl Observe for Badge {
//!     fn on_snapshot(&self, snapshot: &Snapshot) {
//!         let unread = snapshot.open().count();
//!         let _ = unread; // update a badge counter
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "badge"
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod observer;
mod observer_fn;
mod registry;

#[cfg(feature = "logging")]
pub use log::LogObserver;
pub use observer::Observe;
pub use observer_fn::ObserverFn;
pub use registry::Subscription;

pub(crate) use registry::ObserverRegistry;
