//! # Store: the public API over dispatcher, observers and scheduler.
//!
//! The [`Store`] owns the single authoritative toast sequence. Every mutation
//! goes through one path:
//!
//! ```text
//! enqueue / update / dismiss / dismiss_all / (timer fires)
//!        │
//!        ▼
//!   dispatch lock (re-entrant) ──► reduce(current, op) ──► None: nothing published
//!        │                                  │
//!        │                                  ▼ Some(transition)
//!        │                      current = Snapshot { version + 1, .. }
//!        │                      arm the expiry timer (Add only)
//!        │                      disarm timers of evicted ids
//!        │                      SnapshotBus::publish(snapshot)
//!        │                      outbox.push(snapshot)
//!        ▼
//!   drain outbox (unless already draining on this thread)
//!        └─► ObserverRegistry::broadcast(snapshot) for each, in order
//! ```
//!
//! ## Concurrency
//! - Calls from different threads are serialized by the dispatch lock, which
//!   is held for the mutation **and** its broadcast. Observers therefore see
//!   every snapshot in mutation order, none skipped.
//! - Calls made from inside an observer (same thread) re-enter the lock, apply
//!   their mutation immediately and queue their snapshot. The outer drain loop
//!   delivers it once the in-flight broadcast completes, before the outermost
//!   call returns.
//! - Expiry timers run on the Tokio runtime and call back in like any caller.
//!   A timer that fires while another thread is broadcasting blocks its
//!   runtime worker on the dispatch lock until that broadcast ends.
//!
//! ## Example
//! ```rust
//! use toastbox::{Config, Snapshot, Store, ToastPatch, ToastSpec};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), toastbox::StoreError> {
//! let store = Store::new(Config::default())?;
//!
//! let sub = store.subscribe_fn("printer", |snap: &Snapshot| {
//!     println!("v{}: {} open", snap.version(), snap.open().count());
//! });
//!
//! let id = store.enqueue(ToastSpec::new().with_title("Saved"));
//! store.update(id, ToastPatch::new().with_description("Done"));
//! store.dismiss(id);
//!
//! let toast = store.snapshot().get(id).cloned().unwrap();
//! assert_eq!(toast.title(), Some("Saved"));
//! assert_eq!(toast.description(), Some("Done"));
//! assert!(!toast.is_open());
//!
//! sub.unsubscribe();
//! # Ok(())
//! # }
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use tokio::sync::broadcast;

use crate::config::Config;
use crate::core::builder::StoreBuilder;
use crate::core::dispatcher::{self, Op};
use crate::core::scheduler::Scheduler;
use crate::error::StoreError;
use crate::events::{Cause, Snapshot, SnapshotBus};
use crate::observers::{ObserverFn, ObserverRegistry, Observe, Subscription};
use crate::toasts::{Toast, ToastId, ToastPatch, ToastSpec};

/// State guarded by the dispatch lock.
struct Dispatch {
    current: RefCell<Snapshot>,
    outbox: RefCell<VecDeque<Snapshot>>,
    draining: Cell<bool>,
}

impl Dispatch {
    fn pop_pending(&self) -> Option<Snapshot> {
        self.outbox.borrow_mut().pop_front()
    }
}

struct Inner {
    cfg: Config,
    dispatch: ReentrantMutex<Dispatch>,
    observers: Arc<ObserverRegistry>,
    scheduler: Scheduler,
    bus: SnapshotBus,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.scheduler.shutdown();
    }
}

/// In-memory toast store.
///
/// Cheap to clone: clones share the same sequence, observers and timers.
/// Independent instances come from separate [`Store::new`] / [`Store::builder`] calls.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// Creates a store bound to the Tokio runtime of the calling thread.
    ///
    /// Returns [`StoreError::NoRuntime`] outside a runtime; use
    /// [`Store::builder`] with [`StoreBuilder::with_runtime`] there.
    pub fn new(cfg: Config) -> Result<Self, StoreError> {
        StoreBuilder::new(cfg).build()
    }

    /// Returns a builder for a store with optional runtime and initial observers.
    pub fn builder(cfg: Config) -> StoreBuilder {
        StoreBuilder::new(cfg)
    }

    pub(crate) fn from_parts(cfg: Config, runtime: tokio::runtime::Handle) -> Self {
        let bus = SnapshotBus::new(cfg.stream_capacity_clamped());
        Self {
            inner: Arc::new(Inner {
                cfg,
                dispatch: ReentrantMutex::new(Dispatch {
                    current: RefCell::new(Snapshot::empty()),
                    outbox: RefCell::new(VecDeque::new()),
                    draining: Cell::new(false),
                }),
                observers: ObserverRegistry::new(),
                scheduler: Scheduler::new(runtime),
                bus,
            }),
        }
    }

    /// Appends a new open toast and arms its auto-close timer.
    ///
    /// If the sequence exceeds capacity, the oldest toasts are evicted (and
    /// their timers cancelled). Never fails.
    pub fn enqueue(&self, spec: ToastSpec) -> ToastId {
        let id = ToastId::next();
        let toast = Toast::from_spec(id, spec, self.inner.cfg.default_duration);
        tracing::debug!(toast = %id, duration = ?toast.duration(), "toast enqueued");
        self.apply(Op::Add(toast), Cause::Enqueued(id));
        id
    }

    /// Enqueues a toast and returns a handle bound to its id.
    pub fn toast(&self, spec: ToastSpec) -> ToastHandle {
        let id = self.enqueue(spec);
        ToastHandle {
            id,
            store: self.clone(),
        }
    }

    /// Closes the toast with `id` (`open = false`). Unknown ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        self.apply(Op::Close(id), Cause::Dismissed(id));
    }

    /// Closes every toast in the sequence.
    pub fn dismiss_all(&self) {
        self.apply(Op::CloseAll, Cause::DismissedAll);
    }

    /// Merges the fields present in `patch` into the toast with `id`.
    /// Unknown ids are ignored.
    pub fn update(&self, id: ToastId, patch: ToastPatch) {
        self.apply(Op::Update(id, patch), Cause::Updated(id));
    }

    /// Registers an observer; it receives every snapshot published from now on.
    pub fn subscribe(&self, observer: Arc<dyn Observe>) -> Subscription {
        self.inner.observers.register(observer)
    }

    /// Registers a closure as an observer.
    pub fn subscribe_fn<F>(&self, name: &'static str, f: F) -> Subscription
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.subscribe(ObserverFn::arc(name, f))
    }

    /// Returns the current state.
    pub fn snapshot(&self) -> Snapshot {
        let dispatch = self.inner.dispatch.lock();
        let current = dispatch.current.borrow().clone();
        current
    }

    /// Returns a receiver for snapshots published from now on.
    ///
    /// Intended for async consumers; slow receivers skip to newer snapshots.
    pub fn stream(&self) -> broadcast::Receiver<Snapshot> {
        self.inner.bus.subscribe()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Number of auto-close timers still pending.
    pub fn pending_timers(&self) -> usize {
        self.inner.scheduler.pending()
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &Config {
        &self.inner.cfg
    }

    /// Cancels every pending auto-close timer and stops arming new ones.
    ///
    /// The sequence, observers and manual operations keep working. Also
    /// performed automatically when the last clone of the store is dropped.
    pub fn shutdown(&self) {
        self.inner.scheduler.shutdown();
        tracing::debug!("toast store scheduler shut down");
    }

    fn arm_expiry(&self, id: ToastId, delay: std::time::Duration) {
        let weak = Arc::downgrade(&self.inner);
        self.inner.scheduler.arm(id, delay, move || {
            if let Some(inner) = weak.upgrade() {
                inner.scheduler.forget(id);
                tracing::debug!(toast = %id, "toast expired");
                Store { inner }.apply(Op::Close(id), Cause::Expired(id));
            }
        });
    }

    fn apply(&self, op: Op, cause: Cause) {
        let dispatch = self.inner.dispatch.lock();

        let next = {
            let mut current = dispatch.current.borrow_mut();
            let Some(transition) =
                dispatcher::reduce(current.toasts(), &op, self.inner.cfg.capacity_clamped())
            else {
                tracing::trace!(cause = cause.as_label(), "no-op mutation, nothing published");
                return;
            };
            let next = Snapshot::new(
                current.version() + 1,
                cause,
                transition.toasts,
                transition.evicted,
            );
            *current = next.clone();
            next
        };

        // Armed under the dispatch lock after insertion; a fire waits for the lock.
        if let Op::Add(toast) = &op {
            let delay = self.inner.cfg.expiry_delay(toast.duration());
            self.arm_expiry(toast.id(), delay);
        }

        for id in next.evicted() {
            self.inner.scheduler.disarm(*id);
            tracing::debug!(toast = %id, "toast evicted");
        }

        self.inner.bus.publish(next.clone());
        dispatch.outbox.borrow_mut().push_back(next);

        if dispatch.draining.replace(true) {
            return;
        }
        while let Some(snapshot) = dispatch.pop_pending() {
            self.inner.observers.broadcast(&snapshot);
        }
        dispatch.draining.set(false);
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.snapshot();
        f.debug_struct("Store")
            .field("version", &snap.version())
            .field("len", &snap.len())
            .field("observers", &self.observer_count())
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}

/// Handle to one enqueued toast, returned by [`Store::toast`].
#[derive(Clone, Debug)]
pub struct ToastHandle {
    id: ToastId,
    store: Store,
}

impl ToastHandle {
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Closes this toast.
    pub fn dismiss(&self) {
        self.store.dismiss(self.id);
    }

    /// Merges `patch` into this toast.
    pub fn update(&self, patch: ToastPatch) {
        self.store.update(self.id, patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::time::Duration;

    fn store() -> Store {
        Store::new(Config::default()).unwrap()
    }

    fn titled(title: &str) -> ToastSpec {
        ToastSpec::new().with_title(title)
    }

    type Log = Arc<Mutex<Vec<(&'static str, u64)>>>;

    fn record(store: &Store, name: &'static str, log: &Log) -> Subscription {
        let log = Arc::clone(log);
        store.subscribe_fn(name, move |snap: &Snapshot| {
            log.lock().push((name, snap.version()));
        })
    }

    #[test]
    fn new_outside_runtime_fails() {
        let err = Store::new(Config::default()).unwrap_err();
        assert_eq!(err, StoreError::NoRuntime);
    }

    #[tokio::test]
    async fn welcome_scenario() {
        let store = store();
        let id1 = store.enqueue(titled("Welcome"));

        let snap = store.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].title(), Some("Welcome"));
        assert!(snap[0].is_open());

        store.dismiss(id1);
        let snap = store.snapshot();
        assert_eq!(snap.len(), 1);
        assert!(!snap[0].is_open());

        for i in 0..20 {
            store.enqueue(titled(&format!("toast {i}")));
        }
        let snap = store.snapshot();
        assert_eq!(snap.len(), 20);
        assert!(snap.get(id1).is_none());
    }

    #[tokio::test]
    async fn capacity_keeps_last_twenty_in_order() {
        let store = store();
        let ids: Vec<ToastId> = (0..35).map(|i| store.enqueue(titled(&format!("{i}")))).collect();

        let snap = store.snapshot();
        let kept: Vec<ToastId> = snap.iter().map(Toast::id).collect();
        assert_eq!(kept, ids[15..].to_vec());
        assert_eq!(snap[0].title(), Some("15"));
    }

    #[tokio::test]
    async fn ids_are_distinct_across_stores() {
        let a = store();
        let b = store();
        let x = a.enqueue(ToastSpec::new());
        let y = b.enqueue(ToastSpec::new());
        let z = a.enqueue(ToastSpec::new());
        assert_ne!(x, y);
        assert_ne!(x, z);
        assert_ne!(y, z);
    }

    #[tokio::test]
    async fn dismiss_twice_equals_dismiss_once() {
        let store = store();
        let id = store.enqueue(titled("Saved"));

        store.dismiss(id);
        let once = store.snapshot();
        store.dismiss(id);
        let twice = store.snapshot();

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn unknown_id_leaves_state_and_observers_untouched() {
        let store = store();
        store.enqueue(titled("Saved"));
        let before = store.snapshot();

        let log: Log = Arc::default();
        let _sub = record(&store, "a", &log);

        let ghost: ToastId = "999999999".parse().unwrap();
        store.update(ghost, ToastPatch::new().with_title("x"));
        store.dismiss(ghost);

        assert_eq!(store.snapshot(), before);
        assert!(log.lock().is_empty());
    }

    #[tokio::test]
    async fn every_observer_gets_same_snapshot_in_order() {
        let store = store();
        let seen: Arc<Mutex<Vec<(&'static str, Snapshot)>>> = Arc::default();

        let subs: Vec<Subscription> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                let seen = Arc::clone(&seen);
                store.subscribe_fn(name, move |snap: &Snapshot| {
                    seen.lock().push((name, snap.clone()));
                })
            })
            .collect();
        assert_eq!(subs.len(), 3);

        store.enqueue(titled("Saved"));

        let seen = seen.lock();
        let names: Vec<&str> = seen.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(seen.iter().all(|(_, s)| *s == seen[0].1));
        assert_eq!(seen[0].1, store.snapshot());
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let store = store();
        let log: Log = Arc::default();
        let a = record(&store, "a", &log);
        let _b = record(&store, "b", &log);

        store.enqueue(titled("one"));
        assert!(a.unsubscribe());
        store.enqueue(titled("two"));

        assert_eq!(*log.lock(), vec![("a", 1), ("b", 1), ("b", 2)]);
        assert_eq!(store.observer_count(), 1);
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let store = store();
        let id = store.enqueue(titled("Saved"));
        store.update(id, ToastPatch::new().with_description("Done"));

        let snap = store.snapshot();
        let toast = snap.get(id).unwrap();
        assert_eq!(toast.title(), Some("Saved"));
        assert_eq!(toast.description(), Some("Done"));
        assert_eq!(snap.cause(), Some(Cause::Updated(id)));
    }

    #[tokio::test]
    async fn dismiss_all_closes_every_toast() {
        let store = store();
        store.enqueue(titled("a"));
        store.enqueue(titled("b"));
        store.dismiss_all();

        let snap = store.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.open().count(), 0);
        assert_eq!(snap.cause(), Some(Cause::DismissedAll));
    }

    #[tokio::test]
    async fn handle_targets_its_toast() {
        let store = store();
        let other = store.enqueue(titled("other"));
        let handle = store.toast(titled("Uploading"));

        handle.update(ToastPatch::new().with_title("Uploaded"));
        handle.dismiss();

        let snap = store.snapshot();
        let toast = snap.get(handle.id()).unwrap();
        assert_eq!(toast.title(), Some("Uploaded"));
        assert!(!toast.is_open());
        assert!(snap.get(other).unwrap().is_open());
    }

    #[tokio::test]
    async fn reentrant_enqueue_keeps_delivery_order() {
        let store = store();
        let log: Log = Arc::default();

        let inner = store.clone();
        let _chain = store.subscribe_fn("chain", move |snap: &Snapshot| {
            if snap.version() == 1 {
                inner.enqueue(ToastSpec::new().with_title("follow-up"));
            }
        });
        let _rec = record(&store, "rec", &log);

        store.enqueue(titled("first"));

        assert_eq!(*log.lock(), vec![("rec", 1), ("rec", 2)]);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn subscribe_during_broadcast_applies_to_next_one() {
        let store = store();
        let log: Log = Arc::default();

        let inner = store.clone();
        let late_log = Arc::clone(&log);
        let _sub = store.subscribe_fn("registrar", move |snap: &Snapshot| {
            if snap.version() == 1 {
                let _late = record(&inner, "late", &late_log);
            }
        });

        store.enqueue(titled("one"));
        assert!(log.lock().is_empty());

        store.enqueue(titled("two"));
        assert_eq!(*log.lock(), vec![("late", 2)]);
    }

    #[tokio::test]
    async fn unsubscribe_during_broadcast_applies_to_next_one() {
        let store = store();
        let log: Log = Arc::default();
        let victim: Arc<Mutex<Option<Subscription>>> = Arc::default();

        let slot = Arc::clone(&victim);
        let _a = store.subscribe_fn("a", move |snap: &Snapshot| {
            if snap.version() == 1 {
                if let Some(sub) = slot.lock().take() {
                    assert!(sub.unsubscribe());
                }
            }
        });
        *victim.lock() = Some(record(&store, "b", &log));

        store.enqueue(titled("one"));
        store.enqueue(titled("two"));

        assert_eq!(*log.lock(), vec![("b", 1)]);
        assert_eq!(store.observer_count(), 1);
    }

    #[tokio::test]
    async fn dismiss_of_closed_toast_delivers_nothing() {
        let store = store();
        let id = store.enqueue(titled("Saved"));
        store.dismiss(id);

        let log: Log = Arc::default();
        let _rec = record(&store, "rec", &log);
        store.dismiss(id);
        store.dismiss_all();

        assert!(log.lock().is_empty());
    }

    #[tokio::test]
    async fn panicking_observer_does_not_block_others() {
        let store = store();
        let log: Log = Arc::default();
        let _boom = store.subscribe_fn("boom", |_: &Snapshot| panic!("render failed"));
        let _rec = record(&store, "rec", &log);

        store.enqueue(titled("one"));
        store.enqueue(titled("two"));

        assert_eq!(*log.lock(), vec![("rec", 1), ("rec", 2)]);
    }

    #[tokio::test]
    async fn stream_receives_snapshots() {
        let store = store();
        let mut rx = store.stream();

        let id = store.enqueue(titled("streamed"));
        store.dismiss(id);

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.cause(), Some(Cause::Enqueued(id)));
        assert_eq!(second.cause(), Some(Cause::Dismissed(id)));
        assert_eq!(second.version(), 2);
    }

    #[tokio::test]
    async fn observers_on_other_threads_see_ordered_versions() {
        let store = store();
        let log: Log = Arc::default();
        let _rec = record(&store, "rec", &log);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..10 {
                        store.enqueue(ToastSpec::new().with_title(format!("{t}-{i}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let versions: Vec<u64> = log.lock().iter().map(|(_, v)| *v).collect();
        assert_eq!(versions, (1..=40).collect::<Vec<u64>>());
        assert_eq!(store.snapshot().len(), 20);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn zero_delay_timers_never_outrun_insertion() {
        let cfg = Config {
            capacity: 5_000,
            grace: Duration::ZERO,
            ..Config::default()
        };
        let store = Store::new(cfg).unwrap();
        for i in 0..5_000 {
            store.enqueue(titled(&format!("{i}")).with_duration(Duration::ZERO));
        }

        let settled = tokio::time::timeout(Duration::from_secs(5), async {
            while store.snapshot().open().count() > 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;

        assert!(settled.is_ok(), "toasts left open without a timer");
        assert_eq!(store.snapshot().len(), 5_000);
        assert_eq!(store.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_closes_after_duration_plus_grace() {
        let store = store();
        let id = store.enqueue(titled("Saved"));

        tokio::time::sleep(Duration::from_millis(5_999)).await;
        assert!(store.snapshot().get(id).unwrap().is_open());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let snap = store.snapshot();
        assert!(!snap.get(id).unwrap().is_open());
        assert_eq!(snap.cause(), Some(Cause::Expired(id)));
        assert_eq!(store.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_uses_custom_duration() {
        let store = store();
        let short = store.enqueue(titled("short").with_duration(Duration::from_millis(500)));
        let long = store.enqueue(titled("long"));

        tokio::time::sleep(Duration::from_millis(1_501)).await;
        let snap = store.snapshot();
        assert!(!snap.get(short).unwrap().is_open());
        assert!(snap.get(long).unwrap().is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn late_timer_on_dismissed_toast_publishes_nothing() {
        let store = store();
        let id = store.enqueue(titled("Saved"));
        store.dismiss(id);
        let version = store.snapshot().version();

        tokio::time::sleep(Duration::from_secs(7)).await;
        assert_eq!(store.snapshot().version(), version);
        assert_eq!(store.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn eviction_cancels_timer() {
        let cfg = Config {
            capacity: 2,
            ..Config::default()
        };
        let store = Store::new(cfg).unwrap();
        let first = store.enqueue(titled("a"));
        store.enqueue(titled("b"));
        store.enqueue(titled("c"));

        assert_eq!(store.pending_timers(), 2);
        assert_eq!(store.snapshot().evicted(), &[first]);

        let log: Log = Arc::default();
        let _rec = record(&store, "rec", &log);
        tokio::time::sleep(Duration::from_secs(7)).await;

        // Two expiries, none for the evicted toast.
        assert_eq!(log.lock().len(), 2);
        assert_eq!(store.snapshot().open().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_auto_close() {
        let store = store();
        let id = store.enqueue(titled("sticky"));
        store.shutdown();
        assert_eq!(store.pending_timers(), 0);

        let late = store.enqueue(titled("late"));
        tokio::time::sleep(Duration::from_secs(10)).await;

        let snap = store.snapshot();
        assert!(snap.get(id).unwrap().is_open());
        assert!(snap.get(late).unwrap().is_open());

        store.dismiss(id);
        assert!(!store.snapshot().get(id).unwrap().is_open());
    }
}
