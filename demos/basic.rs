//! # Example: basic
//!
//! Demonstrates the store's public API end to end.
//!
//! Shows how to:
//! - Build a [`Store`] and attach a renderer-style observer.
//! - Enqueue, update and dismiss toasts.
//! - Let auto-close timers expire toasts (`duration + grace`).
//! - Follow snapshots from an async task via [`Store::stream`].
//!
//! ## Flow
//! ```text
//! enqueue("Saving…") ──► update(+ "Saved") ──► timer fires ──► Closed
//! enqueue("Deleted") ──► dismiss(id)       ──► Closed
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use std::time::Duration;

use toastbox::{Config, Snapshot, Store, ToastAction, ToastPatch, ToastSpec, Variant};

fn render(snap: &Snapshot) {
    let lines: Vec<String> = snap
        .open()
        .map(|t| {
            format!(
                "{}{}",
                t.title().unwrap_or("<untitled>"),
                t.description().map(|d| format!(" - {d}")).unwrap_or_default()
            )
        })
        .collect();
    println!("[render v{}] {:?}", snap.version(), lines);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = Config {
        default_duration: Duration::from_millis(800),
        grace: Duration::from_millis(200),
        ..Config::default()
    };
    let store = Store::new(cfg)?;

    let _render = store.subscribe_fn("render", render);

    let mut rx = store.stream();
    let follower = tokio::spawn(async move {
        while let Ok(snap) = rx.recv().await {
            if let Some(cause) = snap.cause() {
                println!("[stream] v{} {}", snap.version(), cause.as_label());
            }
        }
    });

    let saving = store.toast(ToastSpec::new().with_title("Saving…"));
    tokio::time::sleep(Duration::from_millis(300)).await;
    saving.update(ToastPatch::new().with_title("Saved").with_description("3 files"));

    let undo = ToastAction::new("Undo", || println!("[action] undo clicked"));
    let deleted = store.enqueue(
        ToastSpec::new()
            .with_title("Deleted")
            .with_variant(Variant::Destructive)
            .with_action(undo),
    );
    if let Some(action) = store.snapshot().get(deleted).and_then(|t| t.action()) {
        action.activate();
    }
    store.dismiss(deleted);

    tokio::time::sleep(Duration::from_millis(1_200)).await;
    println!("open after expiry: {}", store.snapshot().open().count());

    // The stream closes once every clone of the store (handles included) is gone.
    store.shutdown();
    drop(saving);
    drop(store);
    follower.await?;
    Ok(())
}
