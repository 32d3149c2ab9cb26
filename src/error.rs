//! Error types used by the toast store.
//!
//! Store operations themselves never fail: unknown ids are silent no-ops and
//! `enqueue` evicts instead of rejecting. Errors only exist at the edges:
//!
//! - [`StoreError`]: raised while constructing a [`Store`](crate::Store).
//! - [`ParseToastIdError`]: raised when parsing a [`ToastId`](crate::ToastId) from text.
//!
//! [`StoreError`] provides helper methods (`as_label`, `as_message`) for logs.

use thiserror::Error;

/// # Errors produced while building a store.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No Tokio runtime was supplied and none is running on the calling thread.
    ///
    /// The expiry scheduler needs a runtime to arm its timers. Build the store
    /// from inside a runtime or pass one with
    /// [`StoreBuilder::with_runtime`](crate::StoreBuilder::with_runtime).
    #[error("no tokio runtime available to drive toast expiry")]
    NoRuntime,
}

impl StoreError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use toastbox::StoreError;
    ///
    /// assert_eq!(StoreError::NoRuntime.as_label(), "store_no_runtime");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StoreError::NoRuntime => "store_no_runtime",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StoreError::NoRuntime => {
                "store requires a tokio runtime handle for its expiry scheduler".to_string()
            }
        }
    }
}

/// Text could not be parsed as a toast id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid toast id {input:?}")]
pub struct ParseToastIdError {
    /// The rejected input.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(StoreError::NoRuntime.as_label(), "store_no_runtime");
        assert!(StoreError::NoRuntime.as_message().contains("runtime"));
    }

    #[test]
    fn parse_error_displays_input() {
        let err = ParseToastIdError {
            input: "abc".into(),
        };
        assert_eq!(err.to_string(), "invalid toast id \"abc\"");
    }
}
