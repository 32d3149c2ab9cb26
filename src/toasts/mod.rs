//! # Toast records and the values used to create and patch them.
//!
//! This module provides the record model:
//! - [`Toast`] - immutable record stored in the sequence
//! - [`ToastId`] - process-unique identifier
//! - [`ToastSpec`] - fields supplied to [`Store::enqueue`](crate::Store::enqueue)
//! - [`ToastPatch`] - partial fields merged by [`Store::update`](crate::Store::update)
//! - [`ToastAction`] - opaque handle to one interactive affordance
//! - [`Variant`] - styling hint for the presentation layer

mod action;
mod patch;
mod spec;
mod toast;

pub use action::ToastAction;
pub use patch::ToastPatch;
pub use spec::ToastSpec;
pub use toast::{Toast, ToastId, Variant};
