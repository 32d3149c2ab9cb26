//! # Interactive affordance attached to a toast.
//!
//! The store carries a [`ToastAction`] around but never invokes it; the
//! presentation layer decides when (and whether) to call [`ToastAction::activate`].

use std::fmt;
use std::sync::Arc;

/// Shared callback behind a [`ToastAction`].
pub type ActionCallback = Arc<dyn Fn() + Send + Sync + 'static>;

/// Opaque handle to a single action button (e.g. "Undo", "Retry").
///
/// Cloning is cheap: the callback is shared. Two actions compare equal only
/// when they share the same callback and the same labels.
#[derive(Clone)]
pub struct ToastAction {
    label: Arc<str>,
    alt_text: Option<Arc<str>>,
    on_activate: ActionCallback,
}

impl ToastAction {
    /// Creates an action with a visible label and the callback to run on activation.
    pub fn new<F>(label: impl Into<Arc<str>>, on_activate: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            alt_text: None,
            on_activate: Arc::new(on_activate),
        }
    }

    /// Sets the accessible description announced instead of the label.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<Arc<str>>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Returns the visible label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the accessible description, if any.
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// Runs the callback. Called by the presentation layer, never by the store.
    pub fn activate(&self) {
        (self.on_activate)();
    }
}

impl PartialEq for ToastAction {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.on_activate), Arc::as_ptr(&other.on_activate))
            && self.label == other.label
            && self.alt_text == other.alt_text
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .field("alt_text", &self.alt_text)
            .finish_non_exhaustive()
    }
}
