//! Round-trip latency measurement
//!
//! The ping/ack path starts a timer when a probe goes out and finishes it
//! when the acknowledgement arrives; the elapsed time lands in the link's
//! latency window as a millisecond sample.

use crate::stats::StatsTracker;
use std::time::Instant;

/// One in-flight round-trip measurement
///
/// Consuming [`finish`](Self::finish) records the measurement, so a single
/// timer cannot be recorded twice.
///
/// # Examples
///
/// ```
/// use linkstats::{LinkId, RttTimer, StatsTracker};
///
/// let tracker = StatsTracker::new(LinkId::new("conn-1")?);
/// let timer = RttTimer::start();
/// // ... send ping, await ack ...
/// timer.finish(&tracker);
/// # Ok::<(), linkstats::ValidationError>(())
/// ```
#[derive(Debug)]
#[must_use = "an unfinished timer records nothing"]
pub struct RttTimer {
    started_at: Instant,
}

impl RttTimer {
    /// Start timing a round trip
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Elapsed time since start in fractional milliseconds
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }

    /// Stop the timer and record the elapsed time into `tracker`
    pub fn finish(self, tracker: &StatsTracker) {
        tracker.record_latency(self.elapsed_ms());
    }
}
