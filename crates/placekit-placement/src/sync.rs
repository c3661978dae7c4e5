//! Best-effort persistence synchronization.
//!
//! When enrichment produces a more complete record than the remote store
//! holds, or the vendor saves a new position in the editor, the record is
//! pushed back asynchronously. The local cache has already been written by
//! then and stays authoritative for subsequent reads regardless of the
//! remote outcome: failures are logged and swallowed, there is no retry
//! queue, and the next resolution cycle simply tries again if the
//! condition recurs.

use crate::remote::{RemotePositionStore, RemotePositionWrite};
use placekit_core::{PlacementKey, PlacementRecord};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Fire-and-forget writer to the remote position store.
#[derive(Clone)]
pub struct PlacementSyncer {
    remote: Arc<dyn RemotePositionStore>,
    enabled: bool,
}

impl PlacementSyncer {
    /// Creates a syncer over the given remote store.
    pub fn new(remote: Arc<dyn RemotePositionStore>) -> Self {
        Self {
            remote,
            enabled: true,
        }
    }

    /// Enables or disables remote writes (the `sync_enabled` config flag).
    /// A disabled syncer logs and drops every request.
    pub fn with_sync_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Pushes a record that gained fields through enrichment.
    ///
    /// The returned handle may be ignored; the write completes (or fails)
    /// on its own.
    pub fn sync_if_enriched(
        &self,
        key: &PlacementKey,
        record: &PlacementRecord,
    ) -> Option<JoinHandle<()>> {
        self.spawn_write(key, record, "enrichment sync-back")
    }

    /// Pushes a record freshly produced by an editor save.
    pub fn push(&self, key: &PlacementKey, record: &PlacementRecord) -> Option<JoinHandle<()>> {
        self.spawn_write(key, record, "editor save")
    }

    /// Best-effort remote delete, used when a placement is reset or the
    /// design-product association is removed.
    pub fn delete(&self, key: &PlacementKey) -> Option<JoinHandle<()>> {
        if !self.enabled {
            debug!(%key, "remote sync disabled, skipping delete");
            return None;
        }
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!(%key, "no async runtime, skipping remote delete");
            return None;
        };
        let remote = Arc::clone(&self.remote);
        let key = *key;
        Some(handle.spawn(async move {
            match remote.delete_position(&key).await {
                Ok(()) => debug!(%key, "remote placement deleted"),
                Err(e) => warn!(%key, "remote placement delete failed: {}", e),
            }
        }))
    }

    fn spawn_write(
        &self,
        key: &PlacementKey,
        record: &PlacementRecord,
        reason: &'static str,
    ) -> Option<JoinHandle<()>> {
        if !self.enabled {
            debug!(%key, "remote sync disabled, skipping {}", reason);
            return None;
        }
        // Outside a runtime there is nowhere to run the write; the cache
        // is already authoritative, so skipping is the correct degradation.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!(%key, "no async runtime, skipping {}", reason);
            return None;
        };

        let remote = Arc::clone(&self.remote);
        let key = *key;
        let payload = RemotePositionWrite::from(record);
        Some(handle.spawn(async move {
            match remote.write_position(&key, &payload).await {
                Ok(()) => debug!(%key, "remote position written ({})", reason),
                Err(e) => warn!(%key, "remote position write failed ({}): {}", reason, e),
            }
        }))
    }
}

impl std::fmt::Debug for PlacementSyncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementSyncer")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
