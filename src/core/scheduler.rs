//! # Expiry scheduler: one cancellable timer per toast.
//!
//! Every enqueued toast gets a timer that closes it after
//! `duration + grace`. Timers run on the store's Tokio runtime.
//!
//! ## Architecture
//! ```text
//! Scheduler
//!   ├─ root: CancellationToken ──────────────┐ (shutdown / store drop)
//!   └─ timers: HashMap<ToastId, child token> │
//!                     │                      ▼
//!                     └────────► spawned task: select! {
//!                                    token.cancelled() => exit,
//!                                    sleep(deadline)   => fire(),
//!                                }
//! ```
//!
//! ## Rules
//! - The deadline is fixed when the timer is armed, not when the task first runs.
//! - Timers are **not** cancelled by dismiss/update; a late fire on a closed
//!   toast is a no-op in the dispatcher.
//! - Eviction disarms the evicted toast's timer, so no timer outlives its record.
//! - Arming after shutdown is ignored.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::toasts::ToastId;

/// Per-store timer set.
pub(crate) struct Scheduler {
    runtime: Handle,
    root: CancellationToken,
    timers: Mutex<HashMap<ToastId, CancellationToken>>,
}

impl Scheduler {
    pub(crate) fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            root: CancellationToken::new(),
            timers: Mutex::new(HashMap::new()),
        }
    }

    /// Arms a timer that runs `fire` once `delay` has elapsed, unless disarmed first.
    pub(crate) fn arm<F>(&self, id: ToastId, delay: Duration, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.root.is_cancelled() {
            return;
        }

        let token = self.root.child_token();
        self.timers.lock().insert(id, token.clone());

        let sleep = {
            let _guard = self.runtime.enter();
            tokio::time::sleep(delay)
        };

        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = sleep => fire(),
            }
        });
    }

    /// Cancels the timer of `id`, if still pending.
    pub(crate) fn disarm(&self, id: ToastId) {
        if let Some(token) = self.timers.lock().remove(&id) {
            token.cancel();
            tracing::trace!(toast = %id, "expiry timer cancelled");
        }
    }

    /// Drops the bookkeeping entry of a timer that has fired.
    pub(crate) fn forget(&self, id: ToastId) {
        self.timers.lock().remove(&id);
    }

    /// Number of armed timers that have neither fired nor been cancelled.
    pub(crate) fn pending(&self) -> usize {
        self.timers.lock().len()
    }

    /// Cancels every pending timer and refuses new ones.
    pub(crate) fn shutdown(&self) {
        self.root.cancel();
        self.timers.lock().clear();
    }

    pub(crate) fn is_shutdown(&self) -> bool {
        self.root.is_cancelled()
    }
}
