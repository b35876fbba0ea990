//! Immutable point-in-time snapshot of a link's statistics

use crate::types::{BytesReceived, BytesSent, LinkId, PacketCount};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Snapshot of one link's counters and rolling mean latency
///
/// Produced by [`StatsTracker::snapshot`](crate::StatsTracker::snapshot);
/// a value copy that never aliases the tracker's live state. The field set
/// (identity, four counters, mean latency, capture timestamp) is the
/// schema downstream telemetry consumers depend on, so it serializes flat:
///
/// ```json
/// {
///   "link": "conn-1",
///   "packets_sent": 2,
///   "packets_received": 1,
///   "bytes_sent": 150,
///   "bytes_received": 200,
///   "mean_latency_ms": 15.0,
///   "captured_at": "2026-08-28T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub link: LinkId,
    pub packets_sent: PacketCount,
    pub packets_received: PacketCount,
    pub bytes_sent: BytesSent,
    pub bytes_received: BytesReceived,
    /// Arithmetic mean over the latency window, 0.0 when no samples exist
    pub mean_latency_ms: f64,
    /// Wall-clock UTC time the snapshot was taken
    pub captured_at: DateTime<Utc>,
}

impl StatsSnapshot {
    /// Total bytes transferred in both directions
    #[must_use]
    #[inline]
    pub fn total_bytes(&self) -> u64 {
        self.bytes_sent.get().saturating_add(self.bytes_received.get())
    }

    /// Total packets transferred in both directions
    #[must_use]
    #[inline]
    pub fn total_packets(&self) -> u64 {
        self.packets_sent
            .get()
            .saturating_add(self.packets_received.get())
    }

    /// Whether the link has seen any traffic or latency samples
    #[must_use]
    #[inline]
    pub fn has_activity(&self) -> bool {
        self.total_packets() > 0 || self.mean_latency_ms > 0.0
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "link {}: sent {}/{}, received {}/{}, mean rtt {:.1}ms",
            self.link,
            self.packets_sent,
            self.bytes_sent,
            self.packets_received,
            self.bytes_received,
            self.mean_latency_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StatsSnapshot {
        StatsSnapshot {
            link: LinkId::new("conn-1").unwrap(),
            packets_sent: PacketCount::new(2),
            packets_received: PacketCount::new(1),
            bytes_sent: BytesSent::new(150),
            bytes_received: BytesReceived::new(200),
            mean_latency_ms: 15.0,
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_bytes() {
        assert_eq!(snapshot().total_bytes(), 350);
    }

    #[test]
    fn test_total_bytes_saturating() {
        let s = StatsSnapshot {
            bytes_sent: BytesSent::new(u64::MAX),
            bytes_received: BytesReceived::new(1),
            ..snapshot()
        };
        assert_eq!(s.total_bytes(), u64::MAX);
    }

    #[test]
    fn test_total_packets() {
        assert_eq!(snapshot().total_packets(), 3);
    }

    #[test]
    fn test_has_activity() {
        assert!(snapshot().has_activity());

        let idle = StatsSnapshot {
            packets_sent: PacketCount::ZERO,
            packets_received: PacketCount::ZERO,
            mean_latency_ms: 0.0,
            ..snapshot()
        };
        assert!(!idle.has_activity());
    }

    #[test]
    fn test_latency_only_counts_as_activity() {
        let s = StatsSnapshot {
            packets_sent: PacketCount::ZERO,
            packets_received: PacketCount::ZERO,
            mean_latency_ms: 3.5,
            ..snapshot()
        };
        assert!(s.has_activity());
    }

    #[test]
    fn test_display() {
        let rendered = snapshot().to_string();
        assert!(rendered.contains("conn-1"));
        assert!(rendered.contains("150 bytes"));
        assert!(rendered.contains("15.0ms"));
    }
}
