//! # toastbox
//!
//! **toastbox** is an in-memory store for transient UI notifications
//! ("toasts").
//!
//! It keeps one bounded, ordered sequence of toasts, closes each toast
//! automatically after its duration, and pushes an immutable snapshot to every
//! registered observer after each change. Operations are synchronous and can
//! be called from anywhere: UI code, HTTP client error paths, background tasks.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   UI code        HTTP client        Timer task
//!  (enqueue)    (enqueue on 401)     (auto-close)
//!      │               │                  │
//!      ▼               ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Store (public API: enqueue / dismiss / dismiss_all / update)     │
//! │  - Dispatcher (pure reduce over the sequence, capacity bound)     │
//! │  - Scheduler (one cancellable timer per toast)                    │
//! │  - ObserverRegistry (ordered, copied at broadcast start)          │
//! │  - SnapshotBus (broadcast channel for async receivers)            │
//! └──────┬───────────────────────────────────────────────┬────────────┘
//!        ▼                                               ▼
//!   Observe::on_snapshot(&Snapshot)            broadcast::Receiver<Snapshot>
//!   (sync, registration order)                 (Store::stream, async tasks)
//! ```
//!
//! ### Lifecycle of one toast
//! ```text
//! enqueue(spec) ──► Active (open = true) ── timer armed: duration + grace
//!                     │
//!                     ├─ dismiss(id) / dismiss_all() / timer fires ─► Closed (open = false)
//!                     │
//!                     └─ 20 newer toasts enqueued ─► Removed (evicted, timer cancelled)
//! Closed ── 20 newer toasts enqueued ─► Removed
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                    |
//! |-------------------|---------------------------------------------------------------|---------------------------------------|
//! | **Store**         | Bounded sequence, targeted and broadcast close, shallow merge | [`Store`], [`ToastHandle`]            |
//! | **Records**       | Immutable toast records and their builders                    | [`Toast`], [`ToastSpec`], [`ToastPatch`] |
//! | **Observers**     | Synchronous, ordered snapshot delivery                        | [`Observe`], [`ObserverFn`], [`Subscription`] |
//! | **Streams**       | Async snapshot receivers                                      | [`Store::stream`], [`Snapshot`]       |
//! | **Errors**        | Construction-time failures only                               | [`StoreError`]                        |
//! | **Configuration** | Capacity, durations, stream size                              | [`Config`]                            |
//!
//! ## Optional features
//! - `logging`: exports [`LogObserver`], which traces every snapshot _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use toastbox::{Config, Snapshot, Store, ToastSpec};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::new(Config::default())?;
//!
//!     let _render = store.subscribe_fn("render", |snap: &Snapshot| {
//!         for toast in snap.open() {
//!             println!("[toast] {}", toast.title().unwrap_or_default());
//!         }
//!     });
//!
//!     let id = store.enqueue(ToastSpec::new().with_title("Welcome"));
//!     assert_eq!(store.snapshot().len(), 1);
//!
//!     store.dismiss(id);
//!     assert!(!store.snapshot()[0].is_open());
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod observers;
mod toasts;

// ---- Public re-exports ----

pub use crate::core::{Store, StoreBuilder, ToastHandle};
pub use config::{Config, CAPACITY, DEFAULT_DURATION, GRACE_DELAY};
pub use error::{ParseToastIdError, StoreError};
pub use events::{Cause, Snapshot, SnapshotBus};
pub use observers::{Observe, ObserverFn, Subscription};
pub use toasts::{Toast, ToastAction, ToastId, ToastPatch, ToastSpec, Variant};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
