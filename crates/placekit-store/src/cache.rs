//! The local position cache.
//!
//! One JSON file per placement triple under a cache directory. The cache
//! owns the fast-path read value; the remote store stays the durable
//! source of truth. Nothing in this API returns an error to callers:
//! write failures are logged and swallowed, and any entry that fails to
//! parse is treated as absent and deleted on sight.
//!
//! Two entry shapes exist on disk. The current shape is
//! `placement-{vendor}-{product}-{design}.json` holding a timestamped
//! [`PlacementRecord`]. An older shape,
//! `design-position-{design}-{product}.json`, predates vendor scoping and
//! stores `{left, top, scale?, angle?, ...}`; it is recognized read-only
//! and adapted into a `PlacementRecord` on the fly.

use chrono::{DateTime, Duration, Utc};
use placekit_core::{
    BaseProductId, DesignId, PlacementKey, PlacementRecord, PlacementSource, VendorId,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const LEGACY_PREFIX: &str = "design-position-";

/// On-disk shape of a current cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    record: PlacementRecord,
    saved_at: DateTime<Utc>,
}

/// On-disk shape of the legacy, pre-vendor-scoping entry.
#[derive(Debug, Clone, Deserialize)]
struct LegacyEntry {
    left: f64,
    top: f64,
    #[serde(default)]
    scale: Option<f64>,
    #[serde(default)]
    angle: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
}

impl LegacyEntry {
    fn into_record(self) -> PlacementRecord {
        PlacementRecord {
            x: self.left,
            y: self.top,
            scale: self.scale,
            rotation: self.angle,
            design_width: self.width,
            design_height: self.height,
            design_scale: None,
            source: PlacementSource::LocalCache,
        }
    }
}

/// Which key shape a cached entry was stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKeyRef {
    /// A current, fully vendor-scoped entry.
    Triple(PlacementKey),
    /// A legacy entry keyed by design and product only.
    Legacy {
        design_id: DesignId,
        base_product_id: BaseProductId,
    },
}

impl CacheKeyRef {
    fn design_id(&self) -> DesignId {
        match self {
            CacheKeyRef::Triple(key) => key.design_id,
            CacheKeyRef::Legacy { design_id, .. } => *design_id,
        }
    }

    fn base_product_id(&self) -> BaseProductId {
        match self {
            CacheKeyRef::Triple(key) => key.base_product_id,
            CacheKeyRef::Legacy {
                base_product_id, ..
            } => *base_product_id,
        }
    }

    fn vendor_id(&self) -> Option<VendorId> {
        match self {
            CacheKeyRef::Triple(key) => Some(key.vendor_id),
            CacheKeyRef::Legacy { .. } => None,
        }
    }
}

/// A cached record together with its key and recency.
#[derive(Debug, Clone)]
pub struct CachedPlacement {
    /// The key the entry was stored under.
    pub key: CacheKeyRef,
    /// The cached record.
    pub record: PlacementRecord,
    /// When the entry was last written. `None` only for legacy entries
    /// that predate timestamping.
    pub saved_at: Option<DateTime<Utc>>,
}

/// File-backed keyed store of placement records.
#[derive(Debug, Clone)]
pub struct PositionCache {
    dir: PathBuf,
}

impl PositionCache {
    /// Creates a cache rooted at the given directory.
    ///
    /// The directory is created lazily on first save, so constructing a
    /// cache never fails.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this cache reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Upserts the record under its triple.
    ///
    /// Storage failures (quota, permissions, serialization) are logged at
    /// warn and swallowed; callers proceed as if the save succeeded and
    /// the next read simply misses.
    pub fn save(&self, key: &PlacementKey, record: &PlacementRecord) {
        let entry = CacheEntry {
            record: record.clone(),
            saved_at: Utc::now(),
        };
        if let Err(e) = self.write_entry(key, &entry) {
            warn!(%key, "failed to cache placement record: {}", e);
        }
    }

    /// Looks up a record for a design.
    ///
    /// With the full triple supplied this is an exact lookup (falling back
    /// to the legacy entry for the same design/product pair). When the
    /// vendor or product is omitted — the legacy single-argument calling
    /// pattern — every entry is scanned for a design match and the most
    /// recently saved one wins.
    pub fn load(
        &self,
        design_id: DesignId,
        base_product_id: Option<BaseProductId>,
        vendor_id: Option<VendorId>,
    ) -> Option<PlacementRecord> {
        if let (Some(product), Some(vendor)) = (base_product_id, vendor_id) {
            let key = PlacementKey {
                vendor_id: vendor,
                base_product_id: product,
                design_id,
            };
            if let Some(entry) = self.read_entry(&self.entry_path(&key)) {
                return Some(entry.record);
            }
            return self.read_legacy(design_id, product).map(|(r, _)| r);
        }

        let mut best: Option<CachedPlacement> = None;
        for cached in self.scan() {
            if cached.key.design_id() != design_id {
                continue;
            }
            if let Some(product) = base_product_id {
                if cached.key.base_product_id() != product {
                    continue;
                }
            }
            if let Some(vendor) = vendor_id {
                if cached.key.vendor_id().is_some_and(|v| v != vendor) {
                    continue;
                }
            }
            let newer = match (&best, cached.saved_at) {
                (None, _) => true,
                (Some(b), at) => at > b.saved_at,
            };
            if newer {
                best = Some(cached);
            }
        }
        best.map(|c| c.record)
    }

    /// Removes the entry for the triple, if present.
    pub fn delete(&self, key: &PlacementKey) {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => debug!(%key, "deleted cached placement"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(%key, "failed to delete cached placement: {}", e),
        }
    }

    /// Enumerates every parseable entry, most recently saved first.
    ///
    /// Corrupted entries are skipped (and removed); entries without a
    /// timestamp sort last.
    pub fn list_all(&self) -> Vec<CachedPlacement> {
        let mut entries = self.scan();
        entries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        entries
    }

    /// Removes entries saved more than `max_age_hours` ago and any
    /// recognized entry that fails to parse. Returns the number of files
    /// removed.
    ///
    /// Files whose names match neither entry shape are not ours and are
    /// left alone, matching the read path. Legacy entries that carry no
    /// timestamp are treated as past the TTL.
    pub fn expire_older_than(&self, max_age_hours: u64) -> usize {
        let cutoff = Utc::now() - Duration::hours(max_age_hours as i64);
        let mut removed = 0;

        for path in self.entry_files() {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let saved_at = match Self::parse_stem(stem) {
                Some(CacheKeyRef::Triple(_)) => self.read_entry(&path).map(|e| Some(e.saved_at)),
                Some(CacheKeyRef::Legacy {
                    design_id,
                    base_product_id,
                }) => self.read_legacy(design_id, base_product_id).map(|(_, at)| at),
                None => {
                    debug!(path = %path.display(), "ignoring unrecognized cache file");
                    continue;
                }
            };
            let stale = match saved_at {
                Some(at) => at.map_or(true, |at| at < cutoff),
                // Recognized name, unparseable payload.
                None => true,
            };
            if stale {
                // Corrupt entries may already have been unlinked by the
                // read path; either way the file is gone and counts.
                let gone = fs::remove_file(&path).is_ok() || !path.exists();
                if gone {
                    debug!(path = %path.display(), "expired cache entry");
                    removed += 1;
                }
            }
        }
        removed
    }

    fn entry_path(&self, key: &PlacementKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.storage_key()))
    }

    fn legacy_path(&self, design_id: DesignId, product_id: BaseProductId) -> PathBuf {
        self.dir
            .join(format!("{LEGACY_PREFIX}{design_id}-{product_id}.json"))
    }

    fn write_entry(&self, key: &PlacementKey, entry: &CacheEntry) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(entry)?;
        fs::write(self.entry_path(key), json)
    }

    /// Reads a current-shape entry; corrupt files are deleted and treated
    /// as absent.
    fn read_entry(&self, path: &Path) -> Option<CacheEntry> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(path = %path.display(), "discarding corrupt cache entry: {}", e);
                let _ = fs::remove_file(path);
                None
            }
        }
    }

    fn read_legacy(
        &self,
        design_id: DesignId,
        product_id: BaseProductId,
    ) -> Option<(PlacementRecord, Option<DateTime<Utc>>)> {
        let path = self.legacy_path(design_id, product_id);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<LegacyEntry>(&content) {
            Ok(entry) => {
                let saved_at = entry.saved_at;
                Some((entry.into_record(), saved_at))
            }
            Err(e) => {
                warn!(path = %path.display(), "discarding corrupt legacy entry: {}", e);
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    fn entry_files(&self) -> Vec<PathBuf> {
        let Ok(read_dir) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        read_dir
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect()
    }

    /// Maps a file stem onto the entry shape it names. `None` means the
    /// file is not one of ours.
    fn parse_stem(stem: &str) -> Option<CacheKeyRef> {
        if let Some(key) = PlacementKey::from_storage_key(stem) {
            return Some(CacheKeyRef::Triple(key));
        }
        let rest = stem.strip_prefix(LEGACY_PREFIX)?;
        let mut parts = rest.splitn(2, '-');
        let design: u64 = parts.next()?.parse().ok()?;
        let product: u64 = parts.next()?.parse().ok()?;
        Some(CacheKeyRef::Legacy {
            design_id: DesignId(design),
            base_product_id: BaseProductId(product),
        })
    }

    fn scan(&self) -> Vec<CachedPlacement> {
        let mut out = Vec::new();
        for path in self.entry_files() {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match Self::parse_stem(stem) {
                Some(CacheKeyRef::Triple(key)) => {
                    if let Some(entry) = self.read_entry(&path) {
                        out.push(CachedPlacement {
                            key: CacheKeyRef::Triple(key),
                            record: entry.record,
                            saved_at: Some(entry.saved_at),
                        });
                    }
                }
                Some(CacheKeyRef::Legacy {
                    design_id,
                    base_product_id,
                }) => {
                    if let Some((record, saved_at)) = self.read_legacy(design_id, base_product_id) {
                        out.push(CachedPlacement {
                            key: CacheKeyRef::Legacy {
                                design_id,
                                base_product_id,
                            },
                            record,
                            saved_at,
                        });
                    }
                }
                None => debug!(path = %path.display(), "ignoring unrecognized cache file"),
            }
        }
        out
    }
}
