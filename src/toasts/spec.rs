//! # Toast specification.
//!
//! Defines [`ToastSpec`] the bundle of caller-supplied fields passed to
//! [`Store::enqueue`](crate::Store::enqueue). Every field is optional; a spec
//! without a duration inherits [`Config::default_duration`](crate::Config::default_duration).

use std::sync::Arc;
use std::time::Duration;

use crate::toasts::{ToastAction, Variant};

/// Fields for a new toast.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use toastbox::{ToastSpec, Variant};
///
/// let spec = ToastSpec::new()
///     .with_title("Upload failed")
///     .with_description("The server did not answer in time.")
///     .with_variant(Variant::Destructive)
///     .with_duration(Duration::from_secs(10));
///
/// assert_eq!(spec.duration(), Some(Duration::from_secs(10)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSpec {
    pub(crate) title: Option<Arc<str>>,
    pub(crate) description: Option<Arc<str>>,
    pub(crate) action: Option<ToastAction>,
    pub(crate) variant: Variant,
    pub(crate) duration: Option<Duration>,
}

impl ToastSpec {
    /// Creates an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new spec with the given title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns a new spec with the given description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Arc<str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a new spec with an action attached.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Returns a new spec with the given variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Returns a new spec with an explicit display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the explicit duration, if set.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
