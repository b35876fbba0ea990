//! Extension trait for optional statistics recording
//!
//! Transport code holds an `Option<Arc<StatsTracker>>` because statistics
//! collection can be disabled per connection. This trait encapsulates the
//! "Option check + forward" pattern so the send/receive paths record
//! unconditionally, with no-op behavior when tracking is off.

use crate::stats::StatsTracker;
use std::sync::Arc;

/// No-op forwarding of record operations for `Option<Arc<StatsTracker>>`
///
/// # Examples
///
/// ```
/// use linkstats::{LinkId, StatsSink, StatsTracker};
/// use std::sync::Arc;
///
/// let stats = Some(Arc::new(StatsTracker::new(LinkId::new("conn-1")?)));
/// stats.record_sent(128); // Records
///
/// let disabled: Option<Arc<StatsTracker>> = None;
/// disabled.record_sent(128); // No-op
/// # Ok::<(), linkstats::ValidationError>(())
/// ```
pub trait StatsSink {
    /// Record one transmitted frame
    fn record_sent(&self, bytes: u64);

    /// Record one received frame
    fn record_received(&self, bytes: u64);

    /// Record a round-trip latency sample in milliseconds
    fn record_latency(&self, sample_ms: f64);
}

impl StatsSink for Option<Arc<StatsTracker>> {
    #[inline]
    fn record_sent(&self, bytes: u64) {
        if let Some(tracker) = self {
            tracker.record_sent(bytes);
        }
    }

    #[inline]
    fn record_received(&self, bytes: u64) {
        if let Some(tracker) = self {
            tracker.record_received(bytes);
        }
    }

    #[inline]
    fn record_latency(&self, sample_ms: f64) {
        if let Some(tracker) = self {
            tracker.record_latency(sample_ms);
        }
    }
}
