//! # PlaceKit Geometry
//!
//! Coordinate handling for the placement engine. Two screen-side concerns
//! live here:
//!
//! - **Contain-fit metrics**: given a natural image size and a container
//!   size, where does the letterboxed image actually sit on screen?
//! - **Delimitation transform**: given an admin-defined printable zone in
//!   pixel or percentage coordinates of the natural image, what
//!   container-relative pixel rectangle does it occupy?
//!
//! A third, deliberately separate coordinate space — the repositioning
//! editor's percent-of-container space — gets its own types in
//! [`editor_space`] so the two can never be mixed implicitly.

pub mod delimitation;
pub mod editor_space;
pub mod metrics;
pub mod screen;

pub use delimitation::{CoordinateType, DelimitationRect, PercentRect};
pub use editor_space::{EditorPlacement, EditorRect};
pub use metrics::{compute_metrics, ImageMetrics};
pub use screen::{screen_rect_or_zero, ScreenRect};
