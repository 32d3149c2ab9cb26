//! # Snapshot observer trait.
//!
//! Provides [`Observe`] the extension point for anything that wants to follow
//! the toast sequence: renderers, loggers, accessibility announcers.
//!
//! ## Rules
//! - Called **synchronously** on the thread that performed the mutation, in
//!   registration order, once per published snapshot.
//! - Every observer of one broadcast receives the same [`Snapshot`].
//! - Observers may call back into the store (enqueue, dismiss, subscribe...).
//!   Such re-entrant mutations are applied immediately; their snapshots are
//!   delivered after the current broadcast finishes, so ordering holds.
//! - A panicking observer is caught and logged; the broadcast continues with
//!   the next observer.
//! - Only changes are published: `dismiss` of a closed toast or of an unknown
//!   id, and updates that change nothing, deliver no snapshot.
//! - Keep `on_snapshot` short: other callers of the store wait for it, and so
//!   do expiry timers, which block a runtime worker until the broadcast ends.

use crate::events::Snapshot;

/// Receiver of published snapshots.
pub trait Observe: Send + Sync + 'static {
    /// Handles one published snapshot.
    fn on_snapshot(&self, snapshot: &Snapshot);

    /// Returns the observer name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose; override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
