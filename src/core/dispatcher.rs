//! # Dispatcher: pure transition function over the toast sequence.
//!
//! [`reduce`] computes the next sequence from the current one and an [`Op`].
//! It never mutates its input; the store swaps the result in with a single
//! assignment, so no partial state is ever observable.
//!
//! ## Transitions
//! ```text
//! Add(toast)     ─► append at tail, then drop from head until len == capacity
//! Update(id, p)  ─► replace record at same position with record.merged(p)
//! Close(id)      ─► replace record with record.closed()
//! CloseAll       ─► replace every record with record.closed()
//! ```
//!
//! ## Rules
//! - Unknown ids are silent no-ops.
//! - A transition whose result is value-equal to the input returns `None`
//!   (nothing to publish). This makes repeated closes idempotent.

use crate::toasts::{Toast, ToastId, ToastPatch};

/// Mutation requested by the public API.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Add(Toast),
    Update(ToastId, ToastPatch),
    Close(ToastId),
    CloseAll,
}

/// Result of an effective mutation.
#[derive(Debug)]
pub(crate) struct Transition {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) evicted: Vec<ToastId>,
}

/// Computes the next sequence, or `None` if the operation changes nothing.
///
/// `capacity` must be at least 1 (see [`Config::capacity_clamped`](crate::Config::capacity_clamped)).
pub(crate) fn reduce(current: &[Toast], op: &Op, capacity: usize) -> Option<Transition> {
    match op {
        Op::Add(toast) => {
            let mut toasts = Vec::with_capacity(current.len() + 1);
            toasts.extend_from_slice(current);
            toasts.push(toast.clone());

            let excess = toasts.len().saturating_sub(capacity);
            let evicted = toasts.drain(..excess).map(|t| t.id()).collect();
            Some(Transition { toasts, evicted })
        }
        Op::Update(id, patch) => {
            let pos = position(current, *id)?;
            let merged = current[pos].merged(patch);
            replace_at(current, pos, merged)
        }
        Op::Close(id) => {
            let pos = position(current, *id)?;
            let closed = current[pos].closed();
            replace_at(current, pos, closed)
        }
        Op::CloseAll => {
            if current.iter().all(|t| !t.is_open()) {
                return None;
            }
            let toasts = current.iter().map(Toast::closed).collect();
            Some(Transition {
                toasts,
                evicted: Vec::new(),
            })
        }
    }
}

fn position(current: &[Toast], id: ToastId) -> Option<usize> {
    current.iter().position(|t| t.id() == id)
}

fn replace_at(current: &[Toast], pos: usize, next: Toast) -> Option<Transition> {
    if current[pos] == next {
        return None;
    }
    let mut toasts = current.to_vec();
    toasts[pos] = next;
    Some(Transition {
        toasts,
        evicted: Vec::new(),
    })
}
