//! Session lifecycle tests: registry, sink, and RTT timer together

use anyhow::Result;
use linkstats::{LinkId, RttTimer, StatsSink, StatsTracker, TrackerRegistry};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_session_lifecycle() -> Result<()> {
    let registry = TrackerRegistry::new();

    // Connection established
    let link = LinkId::new("peer-9000")?;
    let tracker = registry.register(link.clone());

    // Transport records through the optional sink
    let sink = Some(Arc::clone(&tracker));
    sink.record_sent(512);
    sink.record_received(2048);

    // Ping/ack path measures a round trip
    let timer = RttTimer::start();
    thread::sleep(Duration::from_millis(1));
    timer.finish(&tracker);

    let snapshot = registry.get(&link).unwrap().snapshot();
    assert_eq!(snapshot.packets_sent.get(), 1);
    assert_eq!(snapshot.bytes_sent.get(), 512);
    assert_eq!(snapshot.bytes_received.get(), 2048);
    assert!(snapshot.mean_latency_ms >= 1.0);

    // Reconnect under the same identity
    tracker.reset();
    assert!(!registry.get(&link).unwrap().snapshot().has_activity());

    // Teardown
    registry.deregister(&link);
    assert!(registry.is_empty());
    Ok(())
}

#[test]
fn test_registry_handles_concurrent_sessions() -> Result<()> {
    let registry = TrackerRegistry::new();

    thread::scope(|s| {
        for i in 0..8 {
            let registry = registry.clone();
            s.spawn(move || {
                let link = LinkId::new(format!("peer-{i}")).unwrap();
                let tracker = registry.register(link);
                for _ in 0..100 {
                    tracker.record_sent(10);
                }
            });
        }
    });

    assert_eq!(registry.len(), 8);

    let snapshots = registry.snapshot_all();
    assert_eq!(snapshots.len(), 8);
    for snapshot in &snapshots {
        assert_eq!(snapshot.packets_sent.get(), 100);
        assert_eq!(snapshot.bytes_sent.get(), 1000);
    }
    Ok(())
}

#[test]
fn test_deregistered_tracker_stays_usable_for_holders() -> Result<()> {
    let registry = TrackerRegistry::new();
    let link = LinkId::new("peer-1")?;
    let tracker = registry.register(link.clone());

    registry.deregister(&link);

    // The transport still holds its Arc; recording keeps working
    tracker.record_sent(10);
    assert_eq!(tracker.snapshot().bytes_sent.get(), 10);

    // But the diagnostics layer no longer sees the link
    assert!(registry.snapshot_all().is_empty());
    Ok(())
}

#[test]
fn test_disabled_stats_sink_noop() {
    let sink: Option<Arc<StatsTracker>> = None;
    sink.record_sent(1);
    sink.record_received(1);
    sink.record_latency(1.0);
}
