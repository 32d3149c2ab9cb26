//! # Function-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] wraps a closure `F: Fn(&Snapshot)` so simple observers do
//! not need a dedicated type.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use toastbox::{Observe, ObserverFn, Snapshot};
//!
//! let obs: Arc<dyn Observe> = ObserverFn::arc("printer", |snap: &Snapshot| {
//!     println!("{} toasts", snap.len());
//! });
//! assert_eq!(obs.name(), "printer");
//! ```

use std::sync::Arc;

use crate::events::Snapshot;
use crate::observers::Observe;

/// Closure-backed observer.
#[derive(Debug)]
pub struct ObserverFn<F> {
    name: &'static str,
    f: F,
}

impl<F> ObserverFn<F> {
    /// Creates a new function-backed observer.
    ///
    /// Prefer [`ObserverFn::arc`] when you immediately pass it to a store.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Creates the observer and returns it as a shared handle.
    pub fn arc(name: &'static str, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Observe for ObserverFn<F>
where
    F: Fn(&Snapshot) + Send + Sync + 'static,
{
    fn on_snapshot(&self, snapshot: &Snapshot) {
        (self.f)(snapshot)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
