//! # Store configuration.
//!
//! Provides [`Config`] centralized settings for a [`Store`](crate::Store).
//!
//! Config is used in two ways:
//! 1. **Store creation**: `Store::new(config)` / `Store::builder(config)`
//! 2. **Toast defaults**: a [`ToastSpec`](crate::ToastSpec) without a duration
//!    inherits [`Config::default_duration`].
//!
//! ## Sentinel values
//! - `capacity = 0` → clamped to 1 (a store always keeps the newest toast)
//! - `stream_capacity = 0` → clamped to 1

use std::time::Duration;

/// Maximum number of retained toasts before oldest-first eviction.
pub const CAPACITY: usize = 20;

/// Display duration applied when a toast does not set its own.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5_000);

/// Extra time after a toast's duration before its scheduled auto-close fires.
pub const GRACE_DELAY: Duration = Duration::from_millis(1_000);

/// Global configuration for a toast store.
///
/// ## Field semantics
/// - `capacity`: Retained toasts, oldest evicted first (min 1; clamped)
/// - `default_duration`: Duration for toasts that do not set one
/// - `grace`: Added to every toast's duration before auto-close
/// - `stream_capacity`: Ring buffer size of [`Store::stream`](crate::Store::stream) (min 1; clamped)
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks across the codebase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of toasts kept in the sequence.
    pub capacity: usize,

    /// Duration used when [`ToastSpec`](crate::ToastSpec) leaves it unset.
    pub default_duration: Duration,

    /// Fixed delay added after a toast's duration before it is closed.
    pub grace: Duration,

    /// Capacity of the async snapshot stream.
    ///
    /// Receivers that lag behind more than `stream_capacity` snapshots observe
    /// `Lagged` and skip older items. Synchronous observers are unaffected.
    pub stream_capacity: usize,
}

impl Config {
    /// Returns the capacity clamped to a minimum of 1.
    #[inline]
    pub fn capacity_clamped(&self) -> usize {
        self.capacity.max(1)
    }

    /// Returns a stream capacity clamped to a minimum of 1.
    #[inline]
    pub fn stream_capacity_clamped(&self) -> usize {
        self.stream_capacity.max(1)
    }

    /// Returns when a toast with the given duration should auto-close,
    /// measured from the moment it was enqueued.
    #[inline]
    pub fn expiry_delay(&self, duration: Duration) -> Duration {
        duration.saturating_add(self.grace)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `capacity = 20`
    /// - `default_duration = 5s`
    /// - `grace = 1s`
    /// - `stream_capacity = 64`
    fn default() -> Self {
        Self {
            capacity: CAPACITY,
            default_duration: DEFAULT_DURATION,
            grace: GRACE_DELAY,
            stream_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.capacity, 20);
        assert_eq!(cfg.default_duration, Duration::from_millis(5_000));
        assert_eq!(cfg.grace, Duration::from_millis(1_000));
    }

    #[test]
    fn zero_capacities_are_clamped() {
        let cfg = Config {
            capacity: 0,
            stream_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.capacity_clamped(), 1);
        assert_eq!(cfg.stream_capacity_clamped(), 1);
    }

    #[test]
    fn expiry_delay_adds_grace() {
        let cfg = Config::default();
        assert_eq!(
            cfg.expiry_delay(Duration::from_millis(5_000)),
            Duration::from_millis(6_000)
        );
        assert_eq!(cfg.expiry_delay(Duration::MAX), Duration::MAX);
    }
}
