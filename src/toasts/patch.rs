//! # Partial toast update.
//!
//! [`ToastPatch`] records which fields an [`update`](crate::Store::update)
//! overrides. Fields that were never touched keep the record's current value
//! (shallow merge). Text and action fields can also be explicitly cleared.
//!
//! `id` and `open` are not patchable: identity is fixed and closing goes
//! through [`dismiss`](crate::Store::dismiss).

use std::sync::Arc;
use std::time::Duration;

use crate::toasts::{ToastAction, Variant};

/// Set of field overrides applied by [`Store::update`](crate::Store::update).
///
/// `None` means "leave untouched"; `Some(None)` means "clear".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastPatch {
    pub(crate) title: Option<Option<Arc<str>>>,
    pub(crate) description: Option<Option<Arc<str>>>,
    pub(crate) action: Option<Option<ToastAction>>,
    pub(crate) variant: Option<Variant>,
    pub(crate) duration: Option<Duration>,
}

impl ToastPatch {
    /// Creates a patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    #[must_use]
    pub fn without_title(mut self) -> Self {
        self.title = Some(None);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<Arc<str>>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(Some(action));
        self
    }

    #[must_use]
    pub fn without_action(mut self) -> Self {
        self.action = Some(None);
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Overrides the stored duration.
    ///
    /// The auto-close timer armed at enqueue time is **not** re-armed.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// True if the patch overrides nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_patch_is_empty() {
        assert!(ToastPatch::new().is_empty());
        assert!(!ToastPatch::new().without_title().is_empty());
        assert!(!ToastPatch::new().with_variant(Variant::Default).is_empty());
    }
}
