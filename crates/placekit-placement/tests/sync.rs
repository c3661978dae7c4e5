mod support;

use placekit_core::{PlacementKey, PlacementRecord, PlacementSource};
use placekit_placement::PlacementSyncer;
use std::sync::Arc;
use support::{drain_spawned, MockRemote};

fn record() -> PlacementRecord {
    PlacementRecord {
        x: 12.0,
        y: -3.0,
        scale: Some(0.8),
        rotation: Some(0.0),
        design_width: Some(200.0),
        design_height: Some(150.0),
        design_scale: None,
        source: PlacementSource::LocalCache,
    }
}

#[tokio::test]
async fn push_writes_the_minimal_payload() {
    let remote = Arc::new(MockRemote::default());
    let syncer = PlacementSyncer::new(remote.clone());
    let key = PlacementKey::new(1, 2, 3);

    let handle = syncer.push(&key, &record()).expect("spawned inside runtime");
    handle.await.unwrap();

    let writes = remote.writes.lock();
    assert_eq!(writes.len(), 1);
    let (written_key, payload) = &writes[0];
    assert_eq!(*written_key, key);
    assert_eq!(payload.x, 12.0);
    assert_eq!(payload.y, -3.0);
    assert_eq!(payload.scale, Some(0.8));
    assert_eq!(payload.design_width, Some(200.0));
    assert_eq!(payload.design_height, Some(150.0));
}

#[tokio::test]
async fn write_failure_is_swallowed() {
    let remote = Arc::new(MockRemote::default());
    *remote.fail_writes.lock() = true;
    let syncer = PlacementSyncer::new(remote.clone());
    let key = PlacementKey::new(1, 2, 3);

    // The task completes without panicking; the failure is only logged.
    let handle = syncer.push(&key, &record()).unwrap();
    handle.await.unwrap();
    assert!(remote.writes.lock().is_empty());
}

#[tokio::test]
async fn disabled_syncer_drops_requests() {
    let remote = Arc::new(MockRemote::default());
    let syncer = PlacementSyncer::new(remote.clone()).with_sync_enabled(false);
    let key = PlacementKey::new(1, 2, 3);

    assert!(syncer.push(&key, &record()).is_none());
    assert!(syncer.delete(&key).is_none());
    drain_spawned().await;
    assert!(remote.writes.lock().is_empty());
    assert!(remote.deletes.lock().is_empty());
}

#[tokio::test]
async fn delete_is_best_effort() {
    let remote = Arc::new(MockRemote::default());
    let syncer = PlacementSyncer::new(remote.clone());
    let key = PlacementKey::new(1, 2, 3);

    syncer.delete(&key).unwrap().await.unwrap();
    assert_eq!(remote.deletes.lock().as_slice(), &[key]);
}

#[test]
fn no_runtime_means_skip_not_panic() {
    let remote = Arc::new(MockRemote::default());
    let syncer = PlacementSyncer::new(remote.clone());
    let key = PlacementKey::new(1, 2, 3);

    // Called from a plain thread with no tokio runtime.
    assert!(syncer.push(&key, &record()).is_none());
    assert!(remote.writes.lock().is_empty());
}
