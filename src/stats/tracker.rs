//! Mutex-guarded accumulator of traffic counters and latency samples

use crate::constants::latency::WINDOW_CAPACITY;
use crate::stats::StatsSnapshot;
use crate::types::{BytesReceived, BytesSent, LinkId, PacketCount};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Mutable record guarded by the tracker's mutex
///
/// Counters and window live behind one lock so a snapshot never observes
/// a partially-updated state.
#[derive(Debug)]
struct TrackerState {
    packets_sent: u64,
    packets_received: u64,
    bytes_sent: u64,
    bytes_received: u64,
    latency_window: VecDeque<f64>,
}

impl TrackerState {
    fn new() -> Self {
        Self {
            packets_sent: 0,
            packets_received: 0,
            bytes_sent: 0,
            bytes_received: 0,
            latency_window: VecDeque::with_capacity(WINDOW_CAPACITY),
        }
    }

    /// Arithmetic mean over the current window, 0.0 when empty
    fn mean_latency_ms(&self) -> f64 {
        if self.latency_window.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.latency_window.iter().sum();
        sum / self.latency_window.len() as f64
    }
}

/// Thread-safe statistics tracker for a single RPC link
///
/// Accumulates four monotonic traffic counters and a bounded FIFO window
/// of the most recent round-trip latency samples. All operations are safe
/// to call concurrently from any thread and never fail: byte counts are
/// unsigned by construction and non-finite latency samples are ignored.
///
/// # Examples
///
/// ```
/// use linkstats::{LinkId, StatsTracker};
///
/// let tracker = StatsTracker::new(LinkId::new("conn-1")?);
/// tracker.record_sent(100);
/// tracker.record_received(200);
/// tracker.record_latency(15.0);
///
/// let snapshot = tracker.snapshot();
/// assert_eq!(snapshot.packets_sent.get(), 1);
/// assert_eq!(snapshot.bytes_received.get(), 200);
/// assert_eq!(snapshot.mean_latency_ms, 15.0);
/// # Ok::<(), linkstats::ValidationError>(())
/// ```
#[derive(Debug)]
pub struct StatsTracker {
    link: LinkId,
    state: Mutex<TrackerState>,
}

impl StatsTracker {
    /// Create a tracker for a link, with all counters at zero
    #[must_use]
    pub fn new(link: LinkId) -> Self {
        Self {
            link,
            state: Mutex::new(TrackerState::new()),
        }
    }

    /// Identity of the link this tracker belongs to
    #[must_use]
    #[inline]
    pub fn link(&self) -> &LinkId {
        &self.link
    }

    /// Acquire the state lock, recovering from poisoning
    ///
    /// The critical section only performs in-memory arithmetic, so state
    /// left behind by a panicking thread is still internally consistent.
    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one transmitted frame of `bytes` length
    #[inline]
    pub fn record_sent(&self, bytes: u64) {
        let mut state = self.lock();
        state.packets_sent += 1;
        state.bytes_sent += bytes;
    }

    /// Record one received frame of `bytes` length
    #[inline]
    pub fn record_received(&self, bytes: u64) {
        let mut state = self.lock();
        state.packets_received += 1;
        state.bytes_received += bytes;
    }

    /// Record a round-trip latency sample in milliseconds
    ///
    /// The sample is appended to the window tail; once the window holds
    /// [`WINDOW_CAPACITY`] samples the oldest is evicted first. NaN and
    /// infinite samples are ignored so they cannot poison the mean.
    pub fn record_latency(&self, sample_ms: f64) {
        if !sample_ms.is_finite() {
            debug!(link = %self.link, sample = sample_ms, "ignoring non-finite latency sample");
            return;
        }
        let mut state = self.lock();
        state.latency_window.push_back(sample_ms);
        while state.latency_window.len() > WINDOW_CAPACITY {
            state.latency_window.pop_front();
        }
    }

    /// Take a consistent point-in-time snapshot of this tracker
    ///
    /// The lock is held once for the whole read, so the counters and the
    /// mean all reflect a state that existed at a single instant. The
    /// capture timestamp is wall-clock UTC.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        let state = self.lock();
        StatsSnapshot {
            link: self.link.clone(),
            packets_sent: PacketCount::new(state.packets_sent),
            packets_received: PacketCount::new(state.packets_received),
            bytes_sent: BytesSent::new(state.bytes_sent),
            bytes_received: BytesReceived::new(state.bytes_received),
            mean_latency_ms: state.mean_latency_ms(),
            captured_at: Utc::now(),
        }
    }

    /// Zero all counters and clear the latency window
    ///
    /// Called on reconnect so the tracker starts the new session from a
    /// clean state under the same identity.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.packets_sent = 0;
        state.packets_received = 0;
        state.bytes_sent = 0;
        state.bytes_received = 0;
        state.latency_window.clear();
    }
}
