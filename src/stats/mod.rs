//! Per-link statistics tracking
//!
//! One [`StatsTracker`] is owned by each RPC connection/session. The
//! transport's send and receive paths, the round-trip ping logic, and a
//! periodic reporter all call into it concurrently; a single mutex around
//! the whole mutable record keeps every read and update consistent.

mod sink;
mod snapshot;
mod tracker;

pub use sink::StatsSink;
pub use snapshot::StatsSnapshot;
pub use tracker::StatsTracker;
