//! Remote position store interface and wire shapes.
//!
//! The remote store is an external collaborator: the engine consumes two
//! read shapes (a flat list of per-design "position" records and a map of
//! per-delimitation "transform" records) and emits one minimal write
//! payload. Asset URLs are opaque strings; the engine never touches image
//! bytes.

use async_trait::async_trait;
use placekit_core::{DesignId, PlacementKey, PlacementRecord, PlacementSource, RemoteError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A remote "position" record tied to a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePosition {
    /// The design this position belongs to.
    pub design_id: DesignId,
    /// Horizontal offset from the delimitation centre, screen pixels.
    pub x: f64,
    /// Vertical offset from the delimitation centre, screen pixels.
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_height: Option<f64>,
}

impl RemotePosition {
    /// Adapts the wire shape into a placement record.
    pub fn to_record(&self) -> PlacementRecord {
        PlacementRecord {
            x: self.x,
            y: self.y,
            scale: self.scale,
            rotation: self.rotation,
            design_width: self.design_width,
            design_height: self.design_height,
            design_scale: None,
            source: PlacementSource::RemotePosition,
        }
    }
}

/// A remote "transform" record, keyed by delimitation index within a
/// [`RemoteTransformSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTransform {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_height: Option<f64>,
    /// Some transform rows carry their scale under this older name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_scale: Option<f64>,
}

impl RemoteTransform {
    /// Adapts the wire shape into a placement record.
    pub fn to_record(&self) -> PlacementRecord {
        PlacementRecord {
            x: self.x,
            y: self.y,
            scale: self.scale,
            rotation: self.rotation,
            design_width: self.design_width,
            design_height: self.design_height,
            design_scale: self.design_scale,
            source: PlacementSource::RemoteTransform,
        }
    }
}

/// One design's transform records, keyed by delimitation index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTransformSet {
    /// Opaque URL of the design asset.
    pub design_url: String,
    /// Transform per delimitation index.
    pub transforms: HashMap<u32, RemoteTransform>,
}

/// The candidate records a resolution cycle works from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteCandidates {
    /// Per-design position records.
    pub positions: Vec<RemotePosition>,
    /// Per-design transform sets.
    pub transform_sets: Vec<RemoteTransformSet>,
}

impl RemoteCandidates {
    /// No remote data at all; resolution falls through to the cache.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Minimal write payload pushed back to the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePositionWrite {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_height: Option<f64>,
}

impl From<&PlacementRecord> for RemotePositionWrite {
    fn from(record: &PlacementRecord) -> Self {
        Self {
            x: record.x,
            y: record.y,
            scale: record.scale,
            rotation: record.rotation,
            design_width: record.design_width,
            design_height: record.design_height,
        }
    }
}

/// The durable position store behind the platform API.
///
/// Implementations live outside this engine (HTTP client, test double).
/// All methods are failable; the engine degrades on every failure rather
/// than propagating it.
#[async_trait]
pub trait RemotePositionStore: Send + Sync {
    /// Fetches the per-design position records.
    async fn fetch_positions(
        &self,
        design_id: DesignId,
    ) -> Result<Vec<RemotePosition>, RemoteError>;

    /// Fetches the per-design transform sets.
    async fn fetch_transforms(
        &self,
        design_id: DesignId,
    ) -> Result<Vec<RemoteTransformSet>, RemoteError>;

    /// Writes one position record for the triple.
    async fn write_position(
        &self,
        key: &PlacementKey,
        write: &RemotePositionWrite,
    ) -> Result<(), RemoteError>;

    /// Deletes the position record for the triple.
    async fn delete_position(&self, key: &PlacementKey) -> Result<(), RemoteError>;
}
