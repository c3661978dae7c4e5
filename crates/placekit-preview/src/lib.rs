//! # PlaceKit Preview
//!
//! The front-facing half of the engine:
//!
//! - [`MockupPreview`] — the read-only live preview: gates the design
//!   overlay on image-load and container-measure readiness, recomputes
//!   layout idempotently on every resize, and composes geometry,
//!   resolution, and constraints into a drawable overlay.
//! - [`RepositionEditor`] — the drag/resize state machine the vendor uses
//!   to move the design placeholder, in normalized percent space.
//! - [`PlacementSession`] — write-through persistence for editor saves and
//!   placement resets (cache first, then the asynchronous remote write).
//!
//! None of this knows about any particular UI toolkit: callers feed in
//! pointer positions and size observations and read back rectangles.

pub mod editor;
pub mod renderer;
pub mod session;

pub use editor::{DragState, HitTarget, RepositionEditor};
pub use renderer::{DesignOverlay, MockupPreview, PreviewState};
pub use session::PlacementSession;
