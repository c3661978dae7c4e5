//! The repositioning editor's coordinate space.
//!
//! The editor manipulates the design placeholder in percent-of-container
//! units on a normalized `[0,100] x [0,100]` canvas. This is a different
//! space from the container-relative pixel space used by
//! [`ScreenRect`](crate::screen::ScreenRect); the types are kept distinct
//! so the two can only meet through the explicit conversion in
//! [`EditorPlacement::to_record`].

use crate::screen::ScreenRect;
use placekit_core::{PlacementRecord, PlacementSource};
use serde::{Deserialize, Serialize};

/// A rectangle in percent-of-container units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorRect {
    /// Left edge, percent of container width.
    pub x: f64,
    /// Top edge, percent of container height.
    pub y: f64,
    /// Width, percent of container width.
    pub width: f64,
    /// Height, percent of container height.
    pub height: f64,
}

impl EditorRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamps the position so the rect stays on the normalized canvas:
    /// each coordinate lands in `[0, 100 - size]`.
    pub fn clamp_to_canvas(&mut self) {
        self.x = self.x.clamp(0.0, (100.0 - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (100.0 - self.height).max(0.0));
    }
}

/// What the repositioning editor hands back on save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorPlacement {
    /// The placeholder box, percent-of-container.
    pub rect: EditorRect,
    /// Design scale carried through from the record being edited.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl EditorPlacement {
    /// Converts the editor-space placement into a placement record.
    ///
    /// This is the single crossing point between the two coordinate
    /// spaces, so both the container size (to leave percent space) and the
    /// on-screen delimitation (to anchor at the zone centre) are explicit
    /// arguments. The resulting `design_width`/`design_height` are screen
    /// pixels, the same unit enrichment uses everywhere else.
    pub fn to_record(&self, container: (f64, f64), zone: &ScreenRect) -> PlacementRecord {
        let (container_width, container_height) = container;
        let design_width = self.rect.width / 100.0 * container_width;
        let design_height = self.rect.height / 100.0 * container_height;
        let center_x = (self.rect.x + self.rect.width / 2.0) / 100.0 * container_width;
        let center_y = (self.rect.y + self.rect.height / 2.0) / 100.0 * container_height;
        let (zone_cx, zone_cy) = zone.center();

        let scale = if zone.is_renderable() {
            design_width / zone.width
        } else {
            self.scale
        };

        PlacementRecord {
            x: center_x - zone_cx,
            y: center_y - zone_cy,
            scale: Some(scale),
            rotation: Some(self.rotation),
            design_width: Some(design_width),
            design_height: Some(design_height),
            design_scale: None,
            source: PlacementSource::LocalCache,
        }
    }
}
