//! Per-connection traffic counters and rolling latency statistics for RPC
//! client transports.
//!
//! Each connection owns a [`StatsTracker`]: four monotonic traffic counters
//! plus a bounded FIFO window of recent round-trip latency samples, guarded
//! by a single mutex so concurrent send/receive paths and a periodic reader
//! never observe a torn state. Reads produce an immutable [`StatsSnapshot`]
//! carrying the link identity, the counters, the window's arithmetic mean,
//! and a UTC capture timestamp.
//!
//! The transport integrates through three small pieces:
//!
//! - [`StatsSink`] forwards record calls through `Option<Arc<StatsTracker>>`
//!   so per-connection tracking can be switched off without branching at
//!   every call site;
//! - [`RttTimer`] times one ping/ack round trip and records it on completion;
//! - [`TrackerRegistry`] + [`StatsReporter`] let a diagnostics layer
//!   enumerate live links and log their snapshots on an interval.
//!
//! ```
//! use linkstats::{LinkId, StatsTracker};
//!
//! let tracker = StatsTracker::new(LinkId::new("conn-1")?);
//! tracker.record_sent(100);
//! tracker.record_sent(50);
//! tracker.record_received(200);
//! tracker.record_latency(10.0);
//! tracker.record_latency(20.0);
//!
//! let snapshot = tracker.snapshot();
//! assert_eq!(snapshot.packets_sent.get(), 2);
//! assert_eq!(snapshot.bytes_sent.get(), 150);
//! assert_eq!(snapshot.mean_latency_ms, 15.0);
//! # Ok::<(), linkstats::ValidationError>(())
//! ```

pub mod constants;
pub mod latency;
pub mod logging;
pub mod registry;
pub mod reporter;
pub mod stats;
pub mod types;

pub use latency::RttTimer;
pub use registry::TrackerRegistry;
pub use reporter::{ReporterConfig, StatsReporter};
pub use stats::{StatsSink, StatsSnapshot, StatsTracker};
pub use types::{BytesReceived, BytesSent, LinkId, PacketCount, ValidationError};
