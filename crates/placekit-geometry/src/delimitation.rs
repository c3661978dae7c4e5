//! Delimitation rectangles: admin-defined printable zones.
//!
//! A delimitation is owned by the base product and immutable from the
//! placement engine's perspective. Historical data means its coordinates
//! arrive in one of two units — percentages of the natural image, or
//! absolute pixels of the natural image — and some legacy rows carry no
//! unit tag at all.

use placekit_core::constants::PIXEL_COORD_THRESHOLD;
use serde::{Deserialize, Serialize};

/// The unit a delimitation's coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateType {
    /// Absolute pixels of the natural image.
    Pixel,
    /// Percentages of the natural image.
    Percentage,
}

/// A printable zone on the natural product image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelimitationRect {
    /// Left edge, in the rect's coordinate unit.
    pub x: f64,
    /// Top edge, in the rect's coordinate unit.
    pub y: f64,
    /// Width, in the rect's coordinate unit.
    pub width: f64,
    /// Height, in the rect's coordinate unit.
    pub height: f64,
    /// Declared unit; `None` on legacy/ambiguous rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate_type: Option<CoordinateType>,
}

/// A delimitation normalized to percentages of the natural image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DelimitationRect {
    /// A percentage-space rect.
    pub fn percentage(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            coordinate_type: Some(CoordinateType::Percentage),
        }
    }

    /// A pixel-space rect.
    pub fn pixel(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            coordinate_type: Some(CoordinateType::Pixel),
        }
    }

    /// Whether this rect's values are pixels of the natural image.
    ///
    /// An explicit `Pixel` tag decides immediately. Untagged rects are
    /// treated as pixel-space when any raw value exceeds 100, since no
    /// percentage coordinate can — defensive detection for legacy rows
    /// that were stored without a unit.
    pub fn is_pixel_space(&self) -> bool {
        match self.coordinate_type {
            Some(CoordinateType::Pixel) => true,
            Some(CoordinateType::Percentage) => false,
            None => {
                self.x > PIXEL_COORD_THRESHOLD
                    || self.y > PIXEL_COORD_THRESHOLD
                    || self.width > PIXEL_COORD_THRESHOLD
                    || self.height > PIXEL_COORD_THRESHOLD
            }
        }
    }

    /// Normalizes to percentages of the given natural image size.
    ///
    /// Pixel rects divide by the natural dimension and multiply by 100
    /// (`x`/`width` against the width, `y`/`height` against the height);
    /// percentage rects pass through unchanged.
    pub fn to_percentages(&self, natural_width: f64, natural_height: f64) -> PercentRect {
        if self.is_pixel_space() && natural_width > 0.0 && natural_height > 0.0 {
            PercentRect {
                x: self.x / natural_width * 100.0,
                y: self.y / natural_height * 100.0,
                width: self.width / natural_width * 100.0,
                height: self.height / natural_height * 100.0,
            }
        } else {
            PercentRect {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_tags_win_over_heuristics() {
        let tagged_pct = DelimitationRect::percentage(25.0, 25.0, 50.0, 50.0);
        assert!(!tagged_pct.is_pixel_space());

        let tagged_px = DelimitationRect::pixel(10.0, 10.0, 20.0, 20.0);
        assert!(tagged_px.is_pixel_space());
    }

    #[test]
    fn untagged_rect_over_100_is_pixel_space() {
        let rect = DelimitationRect {
            x: 150.0,
            y: 10.0,
            width: 300.0,
            height: 200.0,
            coordinate_type: None,
        };
        assert!(rect.is_pixel_space());

        let small = DelimitationRect {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 50.0,
            coordinate_type: None,
        };
        assert!(!small.is_pixel_space());
    }

    #[test]
    fn pixel_rect_normalizes_against_natural_size() {
        let rect = DelimitationRect::pixel(200.0, 100.0, 400.0, 300.0);
        let pct = rect.to_percentages(800.0, 600.0);
        assert_eq!(pct.x, 25.0);
        assert_eq!(pct.y, 100.0 / 600.0 * 100.0);
        assert_eq!(pct.width, 50.0);
        assert_eq!(pct.height, 50.0);
    }

    #[test]
    fn percentage_rect_passes_through() {
        let rect = DelimitationRect::percentage(25.0, 25.0, 50.0, 50.0);
        let pct = rect.to_percentages(800.0, 600.0);
        assert_eq!(pct.x, 25.0);
        assert_eq!(pct.width, 50.0);
    }
}
