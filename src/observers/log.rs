//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] traces every published snapshot through `tracing`.
//!
//! ## Output format (with a `fmt` subscriber)
//! ```text
//! INFO toastbox: [enqueued] toast=3 open=3 len=3 version=3
//! INFO toastbox: [updated] toast=3 open=3 len=3 version=4
//! INFO toastbox: [expired] toast=1 open=2 len=3 version=5
//! INFO toastbox: [dismissed-all] open=0 len=3 version=6
//! ```

use crate::events::{Cause, Snapshot};
use crate::observers::Observe;

/// Logging observer.
///
/// Enabled via the `logging` feature. Not intended as a renderer; implement a
/// custom [`Observe`] for that.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observe for LogObserver {
    fn on_snapshot(&self, s: &Snapshot) {
        let open = s.open().count();
        let len = s.len();
        let version = s.version();

        match s.cause() {
            Some(Cause::Enqueued(id)) => {
                tracing::info!("[enqueued] toast={id} open={open} len={len} version={version}");
            }
            Some(Cause::Updated(id)) => {
                tracing::info!("[updated] toast={id} open={open} len={len} version={version}");
            }
            Some(Cause::Dismissed(id)) => {
                tracing::info!("[dismissed] toast={id} open={open} len={len} version={version}");
            }
            Some(Cause::Expired(id)) => {
                tracing::info!("[expired] toast={id} open={open} len={len} version={version}");
            }
            Some(Cause::DismissedAll) => {
                tracing::info!("[dismissed-all] open={open} len={len} version={version}");
            }
            None => {}
        }

        for id in s.evicted() {
            tracing::info!("[evicted] toast={id} version={version}");
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
