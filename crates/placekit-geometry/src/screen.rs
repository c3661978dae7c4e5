//! Container-relative screen rectangles.
//!
//! The delimitation → screen transform: normalize the zone to percentages
//! of the natural image, then project it through the contain-fit metrics.
//!
//! Formula:
//! ```text
//! left   = offset_x + pct_x / 100 * display_width
//! top    = offset_y + pct_y / 100 * display_height
//! width  = pct_w / 100 * display_width
//! height = pct_h / 100 * display_height
//! ```

use crate::delimitation::DelimitationRect;
use crate::metrics::ImageMetrics;
use serde::{Deserialize, Serialize};

/// A rectangle in container-relative screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    /// The zero rect, returned when metrics are not yet available.
    pub const ZERO: ScreenRect = ScreenRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether there is anything to draw. Zero-or-negative dimensions mean
    /// "do not render the overlay" — a valid outcome, not an error.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// The rect's centre point.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl ImageMetrics {
    /// Projects a delimitation into container-relative screen pixels.
    pub fn screen_rect(&self, delimitation: &DelimitationRect) -> ScreenRect {
        let pct = delimitation.to_percentages(self.original_width, self.original_height);
        ScreenRect {
            left: self.offset_x + pct.x / 100.0 * self.display_width,
            top: self.offset_y + pct.y / 100.0 * self.display_height,
            width: pct.width / 100.0 * self.display_width,
            height: pct.height / 100.0 * self.display_height,
        }
    }
}

/// Projects a delimitation through metrics that may not exist yet.
///
/// Returns [`ScreenRect::ZERO`] while the container is unmeasured or the
/// image unloaded; callers gate rendering on
/// [`ScreenRect::is_renderable`].
pub fn screen_rect_or_zero(
    delimitation: &DelimitationRect,
    metrics: Option<&ImageMetrics>,
) -> ScreenRect {
    match metrics {
        Some(m) => m.screen_rect(delimitation),
        None => ScreenRect::ZERO,
    }
}
