//! Write-through persistence for user edits.
//!
//! The repositioning surface is the only writer from the user-edit side.
//! Saves go through the cache first — the fast path stays correct even if
//! the network is down — and then fire an asynchronous remote write.
//! Resets clear the cache entry and issue a best-effort remote delete.

use placekit_core::{PlacementKey, PlacementRecord};
use placekit_geometry::{EditorPlacement, ScreenRect};
use placekit_placement::PlacementSyncer;
use placekit_store::PositionCache;
use tracing::debug;

/// Save/reset flows binding the editor to the cache and remote store.
pub struct PlacementSession<'a> {
    cache: &'a PositionCache,
    syncer: Option<&'a PlacementSyncer>,
}

impl<'a> PlacementSession<'a> {
    /// A session that persists locally only.
    pub fn new(cache: &'a PositionCache) -> Self {
        Self {
            cache,
            syncer: None,
        }
    }

    /// Also pushes saves and deletes to the remote store.
    pub fn with_syncer(mut self, syncer: &'a PlacementSyncer) -> Self {
        self.syncer = Some(syncer);
        self
    }

    /// Persists an editor save.
    ///
    /// Converts the percent-space placement into a placement record
    /// (anchored at the zone centre), writes it through the cache, then
    /// fires the remote write. Returns the record that was persisted.
    pub fn save_from_editor(
        &self,
        key: &PlacementKey,
        placement: &EditorPlacement,
        container: (f64, f64),
        zone: &ScreenRect,
    ) -> PlacementRecord {
        let record = placement.to_record(container, zone);
        self.cache.save(key, &record);
        debug!(%key, "editor placement saved to cache");
        if let Some(syncer) = self.syncer {
            syncer.push(key, &record);
        }
        record
    }

    /// Removes the placement for the triple: clears the cache entry and
    /// best-effort deletes the remote record.
    pub fn reset(&self, key: &PlacementKey) {
        self.cache.delete(key);
        if let Some(syncer) = self.syncer {
            syncer.delete(key);
        }
    }
}
