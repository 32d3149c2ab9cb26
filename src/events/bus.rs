//! # Async snapshot stream.
//!
//! [`SnapshotBus`] is a thin wrapper around [`tokio::sync::broadcast`] that
//! lets async tasks follow a store without registering a synchronous observer.
//!
//! ## Architecture
//! ```text
//! Dispatcher ── publish(Snapshot) ──► SnapshotBus ──► Receiver 1 (task)
//!  (under the dispatch lock)              │       ──► Receiver 2 (task)
//!                                         └─────► Receiver N (task)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent snapshots for all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//!   Since every snapshot is a full state, skipping is safe: the next one received
//!   is still authoritative.
//! - **No replay**: a receiver only sees snapshots published after it subscribed;
//!   use [`Store::snapshot`](crate::Store::snapshot) for the current state.

use tokio::sync::broadcast;

use super::snapshot::Snapshot;

/// Broadcast channel for published snapshots.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery guarantees for async receivers.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct SnapshotBus {
    tx: broadcast::Sender<Snapshot>,
}

impl SnapshotBus {
    /// Creates a new bus with the given channel capacity (min 1; clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Snapshot>(capacity);
        Self { tx }
    }

    /// Publishes a snapshot to all active receivers.
    ///
    /// If there are no receivers, the snapshot is dropped.
    pub fn publish(&self, snapshot: Snapshot) {
        let _ = self.tx.send(snapshot);
    }

    /// Creates a new receiver that will observe subsequent snapshots.
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
