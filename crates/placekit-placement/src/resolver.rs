//! The position resolution chain.
//!
//! Multiple overlapping sources can describe where a design sits: a remote
//! "position" record, a remote "transform" record, the local cache, and
//! the design-application defaults. Rather than deep-merging all of them,
//! resolution is a linear priority chain over a tagged candidate — first
//! match wins, and the winner's provenance lands in the record's `source`
//! tag so the decision stays auditable.
//!
//! Remote winners additionally go through dimension enrichment: missing
//! `design_width`/`design_height` are copied from the cache entry for the
//! same triple, and if that actually changed anything the merged record is
//! written through the cache and handed to the synchronizer. That is the
//! mechanism by which locally-learned dimension data propagates back to
//! the durable store.

use crate::remote::{RemoteCandidates, RemotePositionStore};
use crate::sync::PlacementSyncer;
use placekit_core::constants::DEFAULT_DESIGN_SCALE;
use placekit_core::{PlacementKey, PlacementRecord};
use placekit_store::PositionCache;
use tracing::{debug, warn};

/// The design application's generic fallback, used when no position
/// record exists anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackDefaults {
    /// Fraction of the delimitation box the design occupies by default.
    pub scale: f64,
}

impl Default for FallbackDefaults {
    fn default() -> Self {
        Self {
            scale: DEFAULT_DESIGN_SCALE,
        }
    }
}

/// One source's claim on the placement, in priority order.
#[derive(Debug)]
enum Candidate {
    RemotePosition(PlacementRecord),
    RemoteTransform(PlacementRecord),
    Local(PlacementRecord),
    Fallback(f64),
}

/// Resolves one authoritative placement record per triple.
///
/// The cache is an injected dependency, never ambient state; the syncer is
/// optional so read-only contexts can resolve without wiring up a remote
/// store.
pub struct PlacementResolver<'a> {
    cache: &'a PositionCache,
    defaults: FallbackDefaults,
    syncer: Option<&'a PlacementSyncer>,
}

impl<'a> PlacementResolver<'a> {
    /// Creates a resolver over the given cache, with no sync-back.
    pub fn new(cache: &'a PositionCache, defaults: FallbackDefaults) -> Self {
        Self {
            cache,
            defaults,
            syncer: None,
        }
    }

    /// Enables sync-back of enriched records through the given syncer.
    pub fn with_syncer(mut self, syncer: &'a PlacementSyncer) -> Self {
        self.syncer = Some(syncer);
        self
    }

    /// Produces the authoritative record for the triple.
    ///
    /// Priority: remote position for this design, then the remote
    /// transform at delimitation index 0, then a cache hit, then the
    /// fallback defaults. A position candidate beats a transform candidate
    /// outright — the two remote shapes are never merged. `0.0` in a
    /// remote field is an explicit value; only absent fields trigger
    /// enrichment.
    ///
    /// Resolution runs synchronously against the supplied candidates, so
    /// callers always observe a fully enriched record.
    pub fn resolve(&self, key: &PlacementKey, candidates: &RemoteCandidates) -> PlacementRecord {
        match self.pick(key, candidates) {
            Candidate::RemotePosition(record) | Candidate::RemoteTransform(record) => {
                self.enrich(key, record)
            }
            Candidate::Local(record) => record,
            Candidate::Fallback(scale) => {
                debug!(%key, "no placement found anywhere, using defaults");
                PlacementRecord::fallback(scale)
            }
        }
    }

    /// Fetches candidates from the remote store, then resolves.
    ///
    /// Either fetch failing degrades to "no candidates of that shape" with
    /// a warning — resolution falls through to the next source and never
    /// surfaces the error.
    pub async fn resolve_remote(
        &self,
        key: &PlacementKey,
        remote: &dyn RemotePositionStore,
    ) -> PlacementRecord {
        let positions = match remote.fetch_positions(key.design_id).await {
            Ok(positions) => positions,
            Err(e) => {
                warn!(%key, "position fetch failed, falling through: {}", e);
                Vec::new()
            }
        };
        let transform_sets = match remote.fetch_transforms(key.design_id).await {
            Ok(sets) => sets,
            Err(e) => {
                warn!(%key, "transform fetch failed, falling through: {}", e);
                Vec::new()
            }
        };
        self.resolve(
            key,
            &RemoteCandidates {
                positions,
                transform_sets,
            },
        )
    }

    fn pick(&self, key: &PlacementKey, candidates: &RemoteCandidates) -> Candidate {
        if let Some(position) = candidates
            .positions
            .iter()
            .find(|p| p.design_id == key.design_id)
        {
            return Candidate::RemotePosition(position.to_record());
        }

        // Transform records are keyed by delimitation index; the design
        // overlay renders against index 0.
        if let Some(transform) = candidates
            .transform_sets
            .iter()
            .find_map(|set| set.transforms.get(&0))
        {
            return Candidate::RemoteTransform(transform.to_record());
        }

        if let Some(record) =
            self.cache
                .load(key.design_id, Some(key.base_product_id), Some(key.vendor_id))
        {
            return Candidate::Local(record);
        }

        Candidate::Fallback(self.defaults.scale)
    }

    /// Fills missing dimensions from the cache and, when that produced a
    /// record the cache did not already hold, writes it through and hands
    /// it to the syncer. Resolving the same inputs again finds the cache
    /// equal and does nothing — at most one sync-back per learned change.
    fn enrich(&self, key: &PlacementKey, mut record: PlacementRecord) -> PlacementRecord {
        if !record.missing_dimensions() {
            return record;
        }

        let Some(cached) =
            self.cache
                .load(key.design_id, Some(key.base_product_id), Some(key.vendor_id))
        else {
            return record;
        };

        if record.enrich_dimensions_from(&cached) && !record.same_geometry(&cached) {
            debug!(%key, "enriched remote record from cache, scheduling sync-back");
            self.cache.save(key, &record);
            if let Some(syncer) = self.syncer {
                syncer.sync_if_enriched(key, &record);
            }
        }
        record
    }
}
