//! The placement constraint engine.
//!
//! Turns a resolved record plus an on-screen delimitation into the actual
//! design box. The design is anchored at the zone centre, translated by a
//! clamped offset, and rotated about its own centre.
//!
//! Clamp formula:
//! ```text
//! actual   = zone_dim * scale
//! bound    = |zone_dim - actual| / 2
//! offset   = clamp(requested, -bound, +bound)
//! ```
//!
//! The bound is symmetric because the anchor is the zone centre: the
//! design can never be dragged fully outside its printable zone, and a
//! design larger than the zone (`scale > 1`) may overflow by at most half
//! the excess per side.

use placekit_core::PlacementRecord;
use placekit_geometry::ScreenRect;

/// The computed on-screen design box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignTransform {
    /// Design width, screen pixels.
    pub width: f64,
    /// Design height, screen pixels.
    pub height: f64,
    /// Clamped horizontal offset from the zone centre.
    pub offset_x: f64,
    /// Clamped vertical offset from the zone centre.
    pub offset_y: f64,
    /// Rotation in degrees about the design's own centre.
    pub rotation: f64,
}

impl DesignTransform {
    /// The design's bounding rect in container-relative pixels, before
    /// rotation.
    pub fn screen_box(&self, zone: &ScreenRect) -> ScreenRect {
        let (cx, cy) = zone.center();
        ScreenRect::new(
            cx + self.offset_x - self.width / 2.0,
            cy + self.offset_y - self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Computes the constrained design box for a record inside a zone.
///
/// Returns `None` when the computed design size is zero or negative
/// (degenerate delimitation) — a valid "nothing to draw" outcome, not an
/// error.
pub fn compute_transform(record: &PlacementRecord, zone: &ScreenRect) -> Option<DesignTransform> {
    let scale = record.effective_scale();
    let width = zone.width * scale;
    let height = zone.height * scale;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let bound_x = ((zone.width - width) / 2.0).abs();
    let bound_y = ((zone.height - height) / 2.0).abs();

    Some(DesignTransform {
        width,
        height,
        offset_x: record.x.clamp(-bound_x, bound_x),
        offset_y: record.y.clamp(-bound_y, bound_y),
        rotation: record.effective_rotation(),
    })
}
