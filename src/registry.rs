//! In-process registry of live link trackers
//!
//! Connection establishment registers a tracker under the link's identity;
//! teardown deregisters it. The registry exists so a diagnostics layer can
//! enumerate all live links and snapshot them in one pass without the
//! transport handing out its internals.

use crate::stats::{StatsSnapshot, StatsTracker};
use crate::types::LinkId;
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrent map of link identity → tracker
///
/// Cloning is cheap and shares the underlying map. Lookups and inserts are
/// lock-free; consistency of each tracker's values is still provided by the
/// tracker's own mutex.
#[derive(Debug, Clone, Default)]
pub struct TrackerRegistry {
    trackers: Arc<DashMap<LinkId, Arc<StatsTracker>>>,
}

impl TrackerRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tracker for a link, returning a shared handle
    ///
    /// Idempotent: registering an already-known link returns the existing
    /// tracker with its accumulated state intact.
    pub fn register(&self, link: LinkId) -> Arc<StatsTracker> {
        Arc::clone(
            &self
                .trackers
                .entry(link.clone())
                .or_insert_with(|| Arc::new(StatsTracker::new(link))),
        )
    }

    /// Remove a link's tracker at session teardown
    ///
    /// Returns the removed tracker so the caller can log a final snapshot.
    /// Other holders of the `Arc` keep their handle; the registry just
    /// stops enumerating the link.
    pub fn deregister(&self, link: &LinkId) -> Option<Arc<StatsTracker>> {
        self.trackers.remove(link).map(|(_, tracker)| tracker)
    }

    /// Look up the tracker for a link
    #[must_use]
    pub fn get(&self, link: &LinkId) -> Option<Arc<StatsTracker>> {
        self.trackers.get(link).map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot every live tracker
    ///
    /// Each snapshot is individually consistent; the collection as a whole
    /// is gathered while recorders keep running.
    #[must_use]
    pub fn snapshot_all(&self) -> Vec<StatsSnapshot> {
        self.trackers
            .iter()
            .map(|entry| entry.value().snapshot())
            .collect()
    }

    /// Number of live links
    #[must_use]
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    /// Whether any links are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}
