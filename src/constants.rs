//! Constants used throughout the statistics tracker
//!
//! Centralizes magic numbers so the bounds chosen for the latency window
//! and reporting cadence live in one place.

use std::time::Duration;

/// Latency window configuration
pub mod latency {
    /// Maximum number of round-trip samples kept per link
    ///
    /// Once the window is full the oldest sample is evicted for each new
    /// one, so per-link memory stays O(1) regardless of call volume.
    pub const WINDOW_CAPACITY: usize = 100;
}

/// Reporter configuration defaults
pub mod reporter {
    use super::Duration;

    /// Default interval between snapshot reports
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

    /// Floor for the reporting interval
    ///
    /// A zero-period timer is invalid, so the reporter never ticks faster
    /// than this regardless of what the config says.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);
}
