//! Contain-fit metrics for the base product image.
//!
//! The mockup photo is rendered with "contain" letterboxing: scaled to fit
//! entirely within its container, aspect ratio preserved, centred along
//! the slack axis. Everything downstream (zone rectangles, design
//! transforms) is positioned against these metrics, so they are recomputed
//! on every container resize and every image load.

use serde::{Deserialize, Serialize};

/// The display geometry of a contain-fitted image.
///
/// Derived state, never persisted. Invariant: `display_width <=
/// container_width` and `display_height <= container_height`, with exactly
/// one of the two equal to its container dimension (barring aspect ratios
/// that match exactly, where both are).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageMetrics {
    /// Natural image width, pixels.
    pub original_width: f64,
    /// Natural image height, pixels.
    pub original_height: f64,
    /// On-screen image width, pixels.
    pub display_width: f64,
    /// On-screen image height, pixels.
    pub display_height: f64,
    /// `display_width / original_width`.
    pub scale: f64,
    /// Left letterbox margin, pixels.
    pub offset_x: f64,
    /// Top letterbox margin, pixels.
    pub offset_y: f64,
}

/// Computes contain-fit metrics for an image inside a container.
///
/// Returns `None` when any dimension is non-positive — the container has
/// not been measured yet or the image has not loaded. Callers treat that
/// as "not ready", not as an error.
///
/// If the image is relatively wider than the container
/// (`nw/nh > cw/ch`) it fills the container width and is letterboxed
/// top/bottom; otherwise it fills the height and is pillarboxed
/// left/right.
///
/// Formula for the letterboxed case:
/// ```text
/// display_width  = container_width
/// display_height = container_width * nh / nw
/// offset_x       = 0
/// offset_y       = (container_height - display_height) / 2
/// ```
///
/// Pure function of its four inputs; cheap and safe to call redundantly.
pub fn compute_metrics(
    natural_width: f64,
    natural_height: f64,
    container_width: f64,
    container_height: f64,
) -> Option<ImageMetrics> {
    if natural_width <= 0.0
        || natural_height <= 0.0
        || container_width <= 0.0
        || container_height <= 0.0
    {
        return None;
    }

    let image_ratio = natural_width / natural_height;
    let container_ratio = container_width / container_height;

    let (display_width, display_height) = if image_ratio > container_ratio {
        (container_width, container_width / image_ratio)
    } else {
        (container_height * image_ratio, container_height)
    };

    Some(ImageMetrics {
        original_width: natural_width,
        original_height: natural_height,
        display_width,
        display_height,
        scale: display_width / natural_width,
        offset_x: (container_width - display_width) / 2.0,
        offset_y: (container_height - display_height) / 2.0,
    })
}
