//! # Ordered observer registry with stable broadcast copies.
//!
//! [`ObserverRegistry`] maps subscription tokens to observers. Tokens grow
//! monotonically, so iterating the map yields registration order.
//!
//! ## Rules
//! - **Stable copy**: `broadcast()` clones the observer list before calling
//!   anyone; registering or unsubscribing during a broadcast only affects the
//!   next one.
//! - **Exactly one removal**: a [`Subscription`] removes its own token and no other.
//! - **Isolation**: a panicking observer is caught (`catch_unwind`) and logged;
//!   later observers still receive the snapshot.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state
//! inconsistent if an observer panics while holding its own lock.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::events::Snapshot;
use crate::observers::Observe;

/// Registered observers keyed by subscription token.
pub(crate) struct ObserverRegistry {
    next_token: AtomicU64,
    entries: Mutex<BTreeMap<u64, Arc<dyn Observe>>>,
}

impl ObserverRegistry {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            next_token: AtomicU64::new(0),
            entries: Mutex::new(BTreeMap::new()),
        })
    }

    /// Registers an observer and returns the handle that removes it.
    pub(crate) fn register(self: &Arc<Self>, observer: Arc<dyn Observe>) -> Subscription {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let name = observer.name();
        self.entries.lock().insert(token, observer);
        tracing::debug!(observer = name, token, "observer registered");

        Subscription {
            token,
            name,
            registry: Arc::downgrade(self),
        }
    }

    fn unregister(&self, token: u64) -> bool {
        self.entries.lock().remove(&token).is_some()
    }

    /// Calls every observer registered at call time, in registration order.
    pub(crate) fn broadcast(&self, snapshot: &Snapshot) {
        let observers: Vec<Arc<dyn Observe>> = self.entries.lock().values().cloned().collect();

        for observer in observers {
            let call = AssertUnwindSafe(|| observer.on_snapshot(snapshot));
            if let Err(panic_err) = panic::catch_unwind(call) {
                tracing::error!(
                    observer = observer.name(),
                    version = snapshot.version(),
                    panic = %panic_message(panic_err.as_ref()),
                    "observer panicked"
                );
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

fn panic_message(any: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Dropping the handle does **not** unsubscribe: the observer stays registered
/// for the life of the store unless [`Subscription::unsubscribe`] is called.
#[must_use = "call `unsubscribe` to stop delivery; dropping the handle keeps the observer registered"]
pub struct Subscription {
    token: u64,
    name: &'static str,
    registry: Weak<ObserverRegistry>,
}

impl Subscription {
    /// Removes exactly this observer.
    ///
    /// Returns `false` if the store is already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let removed = registry.unregister(self.token);
        if removed {
            tracing::debug!(observer = self.name, token = self.token, "observer unsubscribed");
        }
        removed
    }

    /// Name of the observer this handle controls.
    pub fn observer_name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("token", &self.token)
            .field("observer", &self.name)
            .finish()
    }
}
