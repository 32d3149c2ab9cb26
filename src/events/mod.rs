//! Published state: snapshots and the async snapshot stream.
//!
//! This module groups the **data model** handed to consumers after every
//! mutation and the **bus** that carries it to async receivers.
//!
//! ## Contents
//! - [`Snapshot`], [`Cause`] the immutable published sequence and what produced it
//! - [`SnapshotBus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publisher**: the store dispatcher, once per effective mutation.
//! - **Consumers**: synchronous observers (see [`observers`](crate::observers))
//!   and any number of [`Store::stream`](crate::Store::stream) receivers.

mod bus;
mod snapshot;

pub use bus::SnapshotBus;
pub use snapshot::{Cause, Snapshot};
