use std::sync::Arc;

use tokio::runtime::Handle;

use crate::{config::Config, core::store::Store, error::StoreError, observers::Observe};

/// Builder for constructing a [`Store`] with optional runtime and observers.
pub struct StoreBuilder {
    cfg: Config,
    runtime: Option<Handle>,
    observers: Vec<Arc<dyn Observe>>,
}

impl StoreBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            runtime: None,
            observers: Vec::new(),
        }
    }

    /// Sets the Tokio runtime that drives auto-close timers.
    ///
    /// Without it, `build()` uses the runtime of the calling thread.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Sets observers registered before the first mutation, in order.
    ///
    /// Their subscriptions live as long as the store.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Builds and returns the store.
    ///
    /// Fails with [`StoreError::NoRuntime`] when no runtime was set and the
    /// calling thread is not inside one.
    pub fn build(self) -> Result<Store, StoreError> {
        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| StoreError::NoRuntime)?,
        };

        let store = Store::from_parts(self.cfg, runtime);
        for observer in self.observers {
            let _ = store.subscribe(observer);
        }
        tracing::debug!(
            capacity = store.config().capacity_clamped(),
            observers = store.observer_count(),
            "toast store built"
        );
        Ok(store)
    }
}
