use placekit_core::{DesignId, PlacementKey, PlacementRecord, PlacementSource};
use placekit_store::{CacheKeyRef, EngineConfig, PositionCache};
use std::fs;
use tempfile::TempDir;

fn record(x: f64, y: f64) -> PlacementRecord {
    PlacementRecord {
        x,
        y,
        scale: Some(0.8),
        rotation: Some(0.0),
        design_width: Some(120.0),
        design_height: Some(90.0),
        design_scale: None,
        source: PlacementSource::LocalCache,
    }
}

#[test]
fn save_then_exact_load() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);

    cache.save(&key, &record(10.0, -5.0));
    let loaded = cache
        .load(key.design_id, Some(key.base_product_id), Some(key.vendor_id))
        .unwrap();
    assert_eq!(loaded.x, 10.0);
    assert_eq!(loaded.y, -5.0);
    assert_eq!(loaded.design_width, Some(120.0));
}

#[test]
fn save_is_an_upsert() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);

    cache.save(&key, &record(10.0, 0.0));
    cache.save(&key, &record(99.0, 1.0));

    let loaded = cache
        .load(key.design_id, Some(key.base_product_id), Some(key.vendor_id))
        .unwrap();
    assert_eq!(loaded.x, 99.0);
    assert_eq!(cache.list_all().len(), 1);
}

#[test]
fn design_only_lookup_scans_entries() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());

    cache.save(&PlacementKey::new(1, 2, 3), &record(10.0, 0.0));
    cache.save(&PlacementKey::new(1, 2, 4), &record(20.0, 0.0));

    let loaded = cache.load(DesignId(3), None, None).unwrap();
    assert_eq!(loaded.x, 10.0);
    assert!(cache.load(DesignId(777), None, None).is_none());
}

#[test]
fn legacy_entry_is_adapted_read_only() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());

    fs::write(
        dir.path().join("design-position-3-2.json"),
        r#"{"left": 14.0, "top": -6.0, "scale": 0.5, "angle": 30.0}"#,
    )
    .unwrap();

    // Exact triple lookup falls back to the legacy shape.
    let key = PlacementKey::new(1, 2, 3);
    let loaded = cache
        .load(key.design_id, Some(key.base_product_id), Some(key.vendor_id))
        .unwrap();
    assert_eq!(loaded.x, 14.0);
    assert_eq!(loaded.y, -6.0);
    assert_eq!(loaded.scale, Some(0.5));
    assert_eq!(loaded.rotation, Some(30.0));
    assert_eq!(loaded.source, PlacementSource::LocalCache);

    // The legacy file is still there, untouched.
    assert!(dir.path().join("design-position-3-2.json").exists());

    // And it shows up in enumeration under its legacy key.
    let all = cache.list_all();
    assert_eq!(all.len(), 1);
    assert!(matches!(all[0].key, CacheKeyRef::Legacy { .. }));
}

#[test]
fn corrupted_entry_is_skipped_and_removed() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());

    cache.save(&PlacementKey::new(1, 2, 3), &record(10.0, 0.0));
    let bad = dir.path().join("placement-9-9-9.json");
    fs::write(&bad, "not json at all {{{").unwrap();

    // load/list_all skip the corrupt entry without panicking...
    assert!(cache.load(DesignId(9), None, None).is_none());
    assert_eq!(cache.list_all().len(), 1);
    // ...and reading it already discarded the file.
    assert!(!bad.exists());
}

#[test]
fn ttl_sweep_counts_removed_entries() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());

    let fresh = PlacementKey::new(1, 2, 3);
    cache.save(&fresh, &record(1.0, 1.0));

    // A stale entry, backdated two days.
    let stale = dir.path().join("placement-1-2-4.json");
    let backdated = format!(
        r#"{{"record": {{"x": 5.0, "y": 5.0, "source": "local-cache"}}, "saved_at": "{}"}}"#,
        (chrono::Utc::now() - chrono::Duration::hours(48)).to_rfc3339()
    );
    fs::write(&stale, backdated).unwrap();

    // A corrupt entry is also swept.
    fs::write(dir.path().join("placement-1-2-5.json"), "garbage").unwrap();

    let removed = cache.expire_older_than(24);
    assert_eq!(removed, 2);

    // The fresh entry survives.
    assert!(cache
        .load(fresh.design_id, Some(fresh.base_product_id), Some(fresh.vendor_id))
        .is_some());
    assert_eq!(cache.list_all().len(), 1);
}

#[test]
fn ttl_sweep_leaves_foreign_files_alone() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());

    // A file that matches neither entry shape is not ours to delete, even
    // though its payload would never parse as an entry.
    let foreign = dir.path().join("notes.json");
    fs::write(&foreign, r#"{"todo": "re-shoot the mug photos"}"#).unwrap();
    let malformed_legacy = dir.path().join("design-position-abc-def.json");
    fs::write(&malformed_legacy, "{}").unwrap();

    let removed = cache.expire_older_than(24);
    assert_eq!(removed, 0);
    assert!(foreign.exists());
    assert!(malformed_legacy.exists());
}

#[test]
fn delete_removes_the_entry() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());
    let key = PlacementKey::new(1, 2, 3);

    cache.save(&key, &record(10.0, 0.0));
    cache.delete(&key);
    assert!(cache
        .load(key.design_id, Some(key.base_product_id), Some(key.vendor_id))
        .is_none());

    // Deleting a missing entry is a no-op, not an error.
    cache.delete(&key);
}

#[test]
fn list_all_sorts_by_recency() {
    let dir = TempDir::new().unwrap();
    let cache = PositionCache::new(dir.path());

    // Backdated first entry, fresh second one.
    let old = dir.path().join("placement-1-2-3.json");
    let backdated = format!(
        r#"{{"record": {{"x": 1.0, "y": 0.0, "source": "local-cache"}}, "saved_at": "{}"}}"#,
        (chrono::Utc::now() - chrono::Duration::hours(5)).to_rfc3339()
    );
    fs::write(&old, backdated).unwrap();
    cache.save(&PlacementKey::new(1, 2, 4), &record(2.0, 0.0));

    let all = cache.list_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].record.x, 2.0);
    assert_eq!(all[1].record.x, 1.0);
}

#[test]
fn config_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = EngineConfig::default();
    config.cache.max_age_hours = 48;
    config.placement.default_scale = 0.6;
    config.save_to_file(&path).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.cache.max_age_hours, 48);
    assert_eq!(loaded.placement.default_scale, 0.6);
}
