//! Store core: state, dispatch and expiry.
//!
//! The only public API from this module is [`Store`] (with its
//! [`StoreBuilder`] and [`ToastHandle`]), which owns the toast sequence,
//! serializes mutations and drives auto-close timers.
//!
//! Internal modules:
//! - [`dispatcher`]: pure transition function, capacity bound, no-op detection;
//! - [`scheduler`]: one cancellable Tokio timer per toast;
//! - [`store`]: dispatch lock, snapshot publication, public operations;
//! - [`builder`]: runtime binding and initial observers.

mod builder;
mod dispatcher;
mod scheduler;
mod store;

pub use builder::StoreBuilder;
pub use store::{Store, ToastHandle};
