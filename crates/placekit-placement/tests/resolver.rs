mod support;

use placekit_core::{DesignId, PlacementKey, PlacementRecord, PlacementSource};
use placekit_placement::{
    FallbackDefaults, PlacementResolver, PlacementSyncer, RemoteCandidates, RemotePosition,
    RemoteTransform, RemoteTransformSet,
};
use placekit_store::PositionCache;
use std::collections::HashMap;
use std::sync::Arc;
use support::{drain_spawned, MockRemote};
use tempfile::TempDir;

fn position(design: u64, x: f64) -> RemotePosition {
    RemotePosition {
        design_id: DesignId(design),
        x,
        y: 0.0,
        scale: Some(0.9),
        rotation: None,
        design_width: None,
        design_height: None,
    }
}

fn transform_set(x: f64) -> RemoteTransformSet {
    let mut transforms = HashMap::new();
    transforms.insert(
        0,
        RemoteTransform {
            x,
            y: 0.0,
            scale: None,
            rotation: Some(45.0),
            design_width: None,
            design_height: None,
            design_scale: Some(0.7),
        },
    );
    RemoteTransformSet {
        design_url: "https://assets.example/designs/3.png".to_string(),
        transforms,
    }
}

fn cached_record(x: f64) -> PlacementRecord {
    PlacementRecord {
        x,
        y: 4.0,
        scale: Some(0.5),
        rotation: Some(10.0),
        design_width: Some(140.0),
        design_height: Some(100.0),
        design_scale: None,
        source: PlacementSource::LocalCache,
    }
}

#[test]
fn position_candidate_beats_transform_candidate() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default());
    let key = PlacementKey::new(1, 2, 3);

    let candidates = RemoteCandidates {
        positions: vec![position(3, 11.0)],
        transform_sets: vec![transform_set(-99.0)],
    };
    let record = resolver.resolve(&key, &candidates);

    // Fields come from the position candidate, never a merge of both.
    assert_eq!(record.x, 11.0);
    assert_eq!(record.scale, Some(0.9));
    assert_eq!(record.rotation, None);
    assert_eq!(record.source, PlacementSource::RemotePosition);
}

#[test]
fn position_for_another_design_is_ignored() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default());
    let key = PlacementKey::new(1, 2, 3);

    let candidates = RemoteCandidates {
        positions: vec![position(777, 11.0)],
        transform_sets: vec![transform_set(-5.0)],
    };
    let record = resolver.resolve(&key, &candidates);
    assert_eq!(record.x, -5.0);
    assert_eq!(record.source, PlacementSource::RemoteTransform);
    assert_eq!(record.effective_scale(), 0.7);
}

#[test]
fn cache_hit_is_third_in_priority() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);
    cache.save(&key, &cached_record(21.0));

    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default());
    let record = resolver.resolve(&key, &RemoteCandidates::empty());
    assert_eq!(record.x, 21.0);
    assert_eq!(record.source, PlacementSource::LocalCache);
}

#[test]
fn defaults_are_the_last_resort() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let resolver = PlacementResolver::new(&cache, FallbackDefaults { scale: 0.6 });
    let key = PlacementKey::new(1, 2, 3);

    let record = resolver.resolve(&key, &RemoteCandidates::empty());
    assert_eq!(record.x, 0.0);
    assert_eq!(record.y, 0.0);
    assert_eq!(record.scale, Some(0.6));
    assert_eq!(record.rotation, Some(0.0));
    assert_eq!(record.source, PlacementSource::Default);
}

#[test]
fn explicit_zero_fields_survive_resolution() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);
    cache.save(&key, &cached_record(21.0));

    let mut remote = position(3, 0.0);
    remote.scale = Some(0.0);
    remote.design_width = Some(0.0);
    remote.design_height = Some(0.0);

    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default());
    let record = resolver.resolve(
        &key,
        &RemoteCandidates {
            positions: vec![remote],
            transform_sets: Vec::new(),
        },
    );

    // 0.0 is an explicit value, not "missing": nothing gets enriched over it.
    assert_eq!(record.scale, Some(0.0));
    assert_eq!(record.design_width, Some(0.0));
    assert_eq!(record.design_height, Some(0.0));
}

#[tokio::test]
async fn enrichment_fills_dimensions_and_syncs_back() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);
    cache.save(&key, &cached_record(21.0));

    let remote = Arc::new(MockRemote::default());
    let syncer = PlacementSyncer::new(remote.clone());
    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default()).with_syncer(&syncer);

    let candidates = RemoteCandidates {
        positions: vec![position(3, 11.0)],
        transform_sets: Vec::new(),
    };
    let record = resolver.resolve(&key, &candidates);

    // Dimensions came from the cache; remote fields were kept.
    assert_eq!(record.x, 11.0);
    assert_eq!(record.design_width, Some(140.0));
    assert_eq!(record.design_height, Some(100.0));
    assert_eq!(record.source, PlacementSource::RemotePosition);

    drain_spawned().await;
    let writes = remote.writes.lock();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, key);
    assert_eq!(writes[0].1.design_width, Some(140.0));
}

#[tokio::test]
async fn resolving_twice_syncs_at_most_once() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);
    cache.save(&key, &cached_record(21.0));

    let remote = Arc::new(MockRemote::default());
    let syncer = PlacementSyncer::new(remote.clone());
    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default()).with_syncer(&syncer);

    let candidates = RemoteCandidates {
        positions: vec![position(3, 11.0)],
        transform_sets: Vec::new(),
    };
    let first = resolver.resolve(&key, &candidates);
    drain_spawned().await;
    let second = resolver.resolve(&key, &candidates);
    drain_spawned().await;

    assert_eq!(first, second);
    assert_eq!(remote.writes.lock().len(), 1);
}

#[tokio::test]
async fn fetch_failure_falls_through_to_cache() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);
    cache.save(&key, &cached_record(33.0));

    let remote = MockRemote::failing_fetches();
    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default());
    let record = resolver.resolve_remote(&key, &remote).await;

    assert_eq!(record.x, 33.0);
    assert_eq!(record.source, PlacementSource::LocalCache);
}
