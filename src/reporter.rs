//! Periodic snapshot reporting through structured logs
//!
//! A background task snapshots every registered tracker on a fixed interval
//! and emits one `info!` event per link. This is the diagnostics consumer of
//! the tracker API; exporting snapshots anywhere else stays the host
//! application's job.

use crate::constants;
use crate::registry::TrackerRegistry;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::info;

/// Helper for serializing the interval as whole seconds
///
/// TOML/JSON configs specify durations in seconds, so custom serde converts
/// between u64 seconds and `Duration`. Zero is rejected at deserialization:
/// a zero-period timer is invalid and would kill the reporter task.
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        if secs == 0 {
            return Err(D::Error::custom("interval must be at least 1 second"));
        }
        Ok(Duration::from_secs(secs))
    }
}

/// Configuration for the periodic reporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Seconds between snapshot reports
    #[serde(with = "duration_serde", default = "default_interval")]
    pub interval: Duration,

    /// Also report links with no traffic and no latency samples
    #[serde(default)]
    pub include_idle: bool,
}

fn default_interval() -> Duration {
    constants::reporter::DEFAULT_INTERVAL
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            include_idle: false,
        }
    }
}

/// Periodic reporter over a tracker registry
#[derive(Debug, Clone)]
pub struct StatsReporter {
    registry: TrackerRegistry,
    config: ReporterConfig,
}

impl StatsReporter {
    /// Create a reporter over `registry`
    #[must_use]
    pub fn new(registry: TrackerRegistry, config: ReporterConfig) -> Self {
        Self { registry, config }
    }

    /// Spawn the background reporting task
    ///
    /// Ticks every `config.interval`; the first report fires one full
    /// interval after start. A zero interval in a hand-built config is
    /// floored to [`MIN_INTERVAL`](constants::reporter::MIN_INTERVAL)
    /// rather than killing the task. The returned handle lets the host
    /// abort the task at shutdown.
    pub fn start(self) -> JoinHandle<()> {
        let period = self
            .config
            .interval
            .max(constants::reporter::MIN_INTERVAL);
        tokio::spawn(async move {
            let mut interval = time::interval(period);
            // interval's first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                self.report_once();
            }
        })
    }

    /// Snapshot all registered links and log one event per link
    ///
    /// Returns how many links were reported, so callers (and tests) can
    /// observe the effect without capturing log output.
    pub fn report_once(&self) -> usize {
        let mut reported = 0;
        for snapshot in self.registry.snapshot_all() {
            if !self.config.include_idle && !snapshot.has_activity() {
                continue;
            }
            info!(
                link = %snapshot.link,
                packets_sent = snapshot.packets_sent.get(),
                packets_received = snapshot.packets_received.get(),
                bytes_sent = snapshot.bytes_sent.get(),
                bytes_received = snapshot.bytes_received.get(),
                mean_latency_ms = snapshot.mean_latency_ms,
                "link statistics"
            );
            reported += 1;
        }
        reported
    }
}
