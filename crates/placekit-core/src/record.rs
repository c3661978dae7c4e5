//! The placement record: the central entity of the engine.
//!
//! A record describes how one design is overlaid on one delimitation:
//! translation from the zone centre (screen pixels), the fraction of the
//! zone the design occupies, rotation, and the design's learned on-screen
//! dimensions. Records are mutated in place, never versioned.

use crate::constants::DEFAULT_DESIGN_SCALE;
use serde::{Deserialize, Serialize};

/// Where a resolved record came from.
///
/// Diagnostic provenance only: nothing dispatches business logic on this
/// tag, it exists so logs and debugging views can say which source won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementSource {
    /// A remote "position" record tied to the design.
    RemotePosition,
    /// A remote "transform" record keyed by delimitation index.
    RemoteTransform,
    /// A local cache hit.
    LocalCache,
    /// The design-application fallback defaults.
    Default,
}

/// How a design sits inside its delimitation zone.
///
/// `x`/`y` are screen-pixel offsets from the zone centre, not
/// image-absolute coordinates. `scale` is the ratio of the zone's box the
/// design consumes. Optional fields distinguish "never recorded" (`None`)
/// from explicit values: `Some(0.0)` is a real zero and is never treated
/// as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Horizontal offset from the delimitation centre, screen pixels.
    pub x: f64,
    /// Vertical offset from the delimitation centre, screen pixels.
    pub y: f64,
    /// Fraction of the delimitation box consumed by the design.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Rotation in degrees about the design's own centre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Learned on-screen design width, pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_width: Option<f64>,
    /// Learned on-screen design height, pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_height: Option<f64>,
    /// Secondary scale some remote transform records carry; consulted only
    /// when `scale` itself is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_scale: Option<f64>,
    /// Provenance of this record.
    pub source: PlacementSource,
}

impl PlacementRecord {
    /// A centred, unrotated record at the given fallback scale.
    pub fn fallback(scale: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: Some(scale),
            rotation: Some(0.0),
            design_width: None,
            design_height: None,
            design_scale: None,
            source: PlacementSource::Default,
        }
    }

    /// The scale to render at, falling back to the secondary scale and
    /// finally the engine default of 0.8.
    pub fn effective_scale(&self) -> f64 {
        self.scale
            .or(self.design_scale)
            .unwrap_or(DEFAULT_DESIGN_SCALE)
    }

    /// The rotation to render at, in degrees. Absent means no rotation.
    pub fn effective_rotation(&self) -> f64 {
        self.rotation.unwrap_or(0.0)
    }

    /// True when either learned design dimension is absent.
    pub fn missing_dimensions(&self) -> bool {
        self.design_width.is_none() || self.design_height.is_none()
    }

    /// Whether two records describe the same placement, ignoring the
    /// diagnostic `source` tag.
    pub fn same_geometry(&self, other: &PlacementRecord) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.scale == other.scale
            && self.rotation == other.rotation
            && self.design_width == other.design_width
            && self.design_height == other.design_height
            && self.design_scale == other.design_scale
    }

    /// Copies dimension fields from `other` into any that are absent here.
    ///
    /// Present fields are never overwritten; an explicit `Some(0.0)` stays.
    /// Returns `true` when at least one field was filled in.
    pub fn enrich_dimensions_from(&mut self, other: &PlacementRecord) -> bool {
        let mut enriched = false;
        if self.design_width.is_none() && other.design_width.is_some() {
            self.design_width = other.design_width;
            enriched = true;
        }
        if self.design_height.is_none() && other.design_height.is_some() {
            self.design_height = other.design_height;
            enriched = true;
        }
        enriched
    }
}
