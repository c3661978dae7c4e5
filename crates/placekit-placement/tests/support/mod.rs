//! In-process remote store double for resolver and syncer tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use placekit_core::{DesignId, PlacementKey, RemoteError};
use placekit_placement::{
    RemotePosition, RemotePositionStore, RemotePositionWrite, RemoteTransformSet,
};

#[derive(Default)]
pub struct MockRemote {
    pub positions: Mutex<Vec<RemotePosition>>,
    pub transform_sets: Mutex<Vec<RemoteTransformSet>>,
    pub writes: Mutex<Vec<(PlacementKey, RemotePositionWrite)>>,
    pub deletes: Mutex<Vec<PlacementKey>>,
    pub fail_fetches: Mutex<bool>,
    pub fail_writes: Mutex<bool>,
}

impl MockRemote {
    pub fn failing_fetches() -> Self {
        let remote = Self::default();
        *remote.fail_fetches.lock() = true;
        remote
    }
}

#[async_trait]
impl RemotePositionStore for MockRemote {
    async fn fetch_positions(
        &self,
        design_id: DesignId,
    ) -> Result<Vec<RemotePosition>, RemoteError> {
        if *self.fail_fetches.lock() {
            return Err(RemoteError::Unavailable);
        }
        Ok(self
            .positions
            .lock()
            .iter()
            .filter(|p| p.design_id == design_id)
            .cloned()
            .collect())
    }

    async fn fetch_transforms(
        &self,
        _design_id: DesignId,
    ) -> Result<Vec<RemoteTransformSet>, RemoteError> {
        if *self.fail_fetches.lock() {
            return Err(RemoteError::Unavailable);
        }
        Ok(self.transform_sets.lock().clone())
    }

    async fn write_position(
        &self,
        key: &PlacementKey,
        write: &RemotePositionWrite,
    ) -> Result<(), RemoteError> {
        if *self.fail_writes.lock() {
            return Err(RemoteError::RequestFailed {
                reason: "injected failure".to_string(),
            });
        }
        self.writes.lock().push((*key, write.clone()));
        Ok(())
    }

    async fn delete_position(&self, key: &PlacementKey) -> Result<(), RemoteError> {
        self.deletes.lock().push(*key);
        Ok(())
    }
}

/// Lets fire-and-forget tasks spawned on the current-thread test runtime
/// run to completion.
pub async fn drain_spawned() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
