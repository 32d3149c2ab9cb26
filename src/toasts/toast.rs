//! # Toast record.
//!
//! A [`Toast`] is immutable once stored. Every state change produces a new
//! record (see [`Toast::closed`] and [`Toast::merged`]) that replaces the old
//! one by value in the next sequence.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ParseToastIdError;
use crate::toasts::{ToastAction, ToastPatch, ToastSpec};

/// Process-wide id counter. Shared by every store so ids are never reused.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of a toast.
///
/// Ids are unique for the lifetime of the process (across all stores) and are
/// never reused. The textual form is the decimal counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToastId {
    type Err = ParseToastIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(ToastId).map_err(|_| ParseToastIdError {
            input: s.to_string(),
        })
    }
}

/// Styling hint for the presentation layer. The store never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Neutral styling.
    #[default]
    Default,
    /// Error / destructive styling.
    Destructive,
}

/// A notification stored in the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    title: Option<Arc<str>>,
    description: Option<Arc<str>>,
    action: Option<ToastAction>,
    variant: Variant,
    duration: Duration,
    open: bool,
}

impl Toast {
    /// Builds a fresh, open record from a spec.
    pub(crate) fn from_spec(id: ToastId, spec: ToastSpec, default_duration: Duration) -> Self {
        Self {
            id,
            title: spec.title,
            description: spec.description,
            action: spec.action,
            variant: spec.variant,
            duration: spec.duration.unwrap_or(default_duration),
            open: true,
        }
    }

    /// Returns a copy with `open = false`.
    pub(crate) fn closed(&self) -> Self {
        Self {
            open: false,
            ..self.clone()
        }
    }

    /// Returns a copy with every field present in `patch` overriding this record's.
    pub(crate) fn merged(&self, patch: &ToastPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            action: patch.action.clone().unwrap_or_else(|| self.action.clone()),
            variant: patch.variant.unwrap_or(self.variant),
            duration: patch.duration.unwrap_or(self.duration),
            open: self.open,
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Display duration (the auto-close fires after this plus the grace delay).
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// `true` while the toast should remain visible.
    pub fn is_open(&self) -> bool {
        self.open
    }
}
