//! # Example: session_expired
//!
//! Demonstrates a non-UI caller feeding the store: an API client that turns
//! an authentication failure into a fixed, human-readable toast.
//!
//! Shows how to:
//! - Share one [`Store`] between UI code and a networking layer.
//! - Enqueue from an error path without awaiting anything.
//! - Attach the built-in [`LogObserver`] (`logging` feature).
//!
//! ## Run
//! ```bash
//! cargo run --example session_expired --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use toastbox::{Config, LogObserver, Observe, Snapshot, Store, ToastAction, ToastSpec, Variant};

/// Stand-in for an HTTP client. Requests after the first one are rejected as
/// if the access token had expired and could not be refreshed.
struct ApiClient {
    toasts: Store,
    calls: std::sync::atomic::AtomicU32,
}

#[derive(thiserror::Error, Debug)]
enum ApiError {
    #[error("401 unauthorized")]
    Unauthorized,
}

impl ApiClient {
    fn new(toasts: Store) -> Self {
        Self {
            toasts,
            calls: std::sync::atomic::AtomicU32::new(0),
        }
    }

    async fn get(&self, path: &str) -> Result<String, ApiError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let n = self
            .calls
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        if n == 0 {
            return Ok(format!("{path}: 12 trainees"));
        }

        self.toasts.enqueue(
            ToastSpec::new()
                .with_title("Session expired")
                .with_description("Please sign in again.")
                .with_variant(Variant::Destructive)
                .with_action(ToastAction::new("Sign in", || println!("[action] open sign-in"))),
        );
        Err(ApiError::Unauthorized)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let log: Arc<dyn Observe> = Arc::new(LogObserver::new());
    let store = Store::builder(Config::default())
        .with_observers(vec![log])
        .build()?;
    let _banner = store.subscribe_fn("banner", |snap: &Snapshot| {
        if let Some(t) = snap.open().last() {
            println!("[banner] {}", t.title().unwrap_or_default());
        }
    });

    let api = ApiClient::new(store.clone());
    for path in ["/trainees", "/entries"] {
        match api.get(path).await {
            Ok(body) => println!("[api] {body}"),
            Err(err) => println!("[api] {path} failed: {err}"),
        }
    }

    assert_eq!(store.snapshot().open().count(), 1);
    store.dismiss_all();
    Ok(())
}
