//! # Immutable view of the toast sequence.
//!
//! Every effective mutation publishes a new [`Snapshot`]. Snapshots share their
//! records through an `Arc<[Toast]>`, so cloning one is cheap and no consumer
//! can mutate what the store holds.
//!
//! ## Ordering guarantees
//! Each snapshot has a per-store `version` that increases by exactly one per
//! published mutation. Observers see versions `n, n+1, n+2, ...` with no gaps.
//!
//! ## Example
//! ```rust
//! use toastbox::{Config, Store, ToastSpec};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), toastbox::StoreError> {
//! let store = Store::new(Config::default())?;
//! let id = store.enqueue(ToastSpec::new().with_title("Welcome"));
//!
//! let snap = store.snapshot();
//! assert_eq!(snap.version(), 1);
//! assert_eq!(snap.len(), 1);
//! assert_eq!(snap.get(id).and_then(|t| t.title()), Some("Welcome"));
//! # Ok(())
//! # }
//! ```

use std::ops::Deref;
use std::sync::Arc;

use crate::toasts::{Toast, ToastId};

/// What produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    /// A toast was appended.
    Enqueued(ToastId),
    /// A toast's fields were merged.
    Updated(ToastId),
    /// A toast was closed by an explicit dismiss.
    Dismissed(ToastId),
    /// Every open toast was closed.
    DismissedAll,
    /// A toast was closed by its auto-close timer.
    Expired(ToastId),
}

impl Cause {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Cause::Enqueued(_) => "toast_enqueued",
            Cause::Updated(_) => "toast_updated",
            Cause::Dismissed(_) => "toast_dismissed",
            Cause::DismissedAll => "toast_dismissed_all",
            Cause::Expired(_) => "toast_expired",
        }
    }

    /// The toast this cause targets (`None` for broadcast operations).
    pub fn toast(&self) -> Option<ToastId> {
        match *self {
            Cause::Enqueued(id) | Cause::Updated(id) | Cause::Dismissed(id) | Cause::Expired(id) => {
                Some(id)
            }
            Cause::DismissedAll => None,
        }
    }
}

/// Published state of a store at one version.
///
/// Dereferences to `[Toast]` (oldest first), so `len`, `iter` and indexing
/// work directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    version: u64,
    cause: Option<Cause>,
    toasts: Arc<[Toast]>,
    evicted: Arc<[ToastId]>,
}

impl Snapshot {
    /// The state of a freshly built store: version 0, no toasts.
    pub(crate) fn empty() -> Self {
        Self {
            version: 0,
            cause: None,
            toasts: Arc::from(Vec::new()),
            evicted: Arc::from(Vec::new()),
        }
    }

    pub(crate) fn new(version: u64, cause: Cause, toasts: Vec<Toast>, evicted: Vec<ToastId>) -> Self {
        Self {
            version,
            cause: Some(cause),
            toasts: Arc::from(toasts),
            evicted: Arc::from(evicted),
        }
    }

    /// Monotonic per-store version (0 before the first mutation).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// What produced this snapshot (`None` for the initial empty state).
    pub fn cause(&self) -> Option<Cause> {
        self.cause
    }

    /// Records in insertion order, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Ids dropped from the head by the mutation that produced this snapshot.
    pub fn evicted(&self) -> &[ToastId] {
        &self.evicted
    }

    /// Looks up a record by id.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    /// Iterates over the records that are still open.
    pub fn open(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|t| t.is_open())
    }
}

impl Deref for Snapshot {
    type Target = [Toast];

    fn deref(&self) -> &Self::Target {
        &self.toasts
    }
}
