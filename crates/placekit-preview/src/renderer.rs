//! The live preview renderer.
//!
//! Two readiness flags gate the overlay: the base image must have loaded
//! (for its natural size) and the container must have been measured. Both
//! arrive as observer events; each one recomputes the contain-fit metrics,
//! which is cheap, side-effect-free, and safe to call redundantly, so a
//! resize re-lays-out the overlay without any remount.
//!
//! Multiple delimitations per view are supported, but the design overlay
//! renders against delimitation index 0 only; later indices are exposed as
//! display-only rectangles.

use placekit_core::{PlacementKey, PlacementRecord};
use placekit_geometry::{
    compute_metrics, screen_rect_or_zero, DelimitationRect, ImageMetrics, ScreenRect,
};
use placekit_placement::{compute_transform, DesignTransform, PlacementResolver, RemoteCandidates};
use tracing::debug;

/// What the preview is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// Waiting for the image or the container measurement; show a
    /// placeholder, not an error.
    Pending,
    /// Both readiness flags set; the overlay can render.
    Ready,
    /// The base image failed to load — the one user-visible error state.
    ImageError {
        /// Human-readable load failure.
        message: String,
    },
}

/// Everything needed to draw the design over the product photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignOverlay {
    /// The printable zone in container-relative pixels.
    pub zone: ScreenRect,
    /// The constrained design transform within that zone.
    pub transform: DesignTransform,
    /// The design's unrotated bounding box in container-relative pixels.
    pub design_box: ScreenRect,
}

/// Read-only preview of a product mockup with a design overlaid.
#[derive(Debug, Clone)]
pub struct MockupPreview {
    delimitations: Vec<DelimitationRect>,
    natural: Option<(f64, f64)>,
    container: Option<(f64, f64)>,
    metrics: Option<ImageMetrics>,
    record: Option<PlacementRecord>,
    image_error: Option<String>,
}

impl MockupPreview {
    /// Creates a preview over the product view's delimitations.
    pub fn new(delimitations: Vec<DelimitationRect>) -> Self {
        Self {
            delimitations,
            natural: None,
            container: None,
            metrics: None,
            record: None,
            image_error: None,
        }
    }

    /// The base image finished loading; its natural size is now known.
    pub fn image_loaded(&mut self, natural_width: f64, natural_height: f64) {
        self.image_error = None;
        self.natural = Some((natural_width, natural_height));
        self.recompute();
    }

    /// The base image failed to load.
    pub fn image_failed(&mut self, message: impl Into<String>) {
        self.image_error = Some(message.into());
        self.natural = None;
        self.metrics = None;
    }

    /// The container was measured or resized.
    pub fn container_resized(&mut self, width: f64, height: f64) {
        self.container = Some((width, height));
        self.recompute();
    }

    /// Sets the resolved placement record to render.
    pub fn set_record(&mut self, record: PlacementRecord) {
        self.record = Some(record);
    }

    /// Resolves the record from candidates and adopts it.
    pub fn resolve_record(
        &mut self,
        resolver: &PlacementResolver<'_>,
        key: &PlacementKey,
        candidates: &RemoteCandidates,
    ) {
        self.record = Some(resolver.resolve(key, candidates));
    }

    /// Whether the base image has loaded.
    pub fn is_image_loaded(&self) -> bool {
        self.natural.is_some()
    }

    /// Whether contain-fit metrics are available.
    pub fn is_metrics_ready(&self) -> bool {
        self.metrics.is_some()
    }

    /// The current contain-fit metrics, if ready.
    pub fn metrics(&self) -> Option<&ImageMetrics> {
        self.metrics.as_ref()
    }

    /// The currently adopted record, if any.
    pub fn record(&self) -> Option<&PlacementRecord> {
        self.record.as_ref()
    }

    /// Current preview state.
    pub fn state(&self) -> PreviewState {
        if let Some(message) = &self.image_error {
            return PreviewState::ImageError {
                message: message.clone(),
            };
        }
        if self.is_image_loaded() && self.is_metrics_ready() {
            PreviewState::Ready
        } else {
            PreviewState::Pending
        }
    }

    /// Every delimitation projected to screen space, display-only.
    ///
    /// Rects are zero while metrics are unavailable; callers skip
    /// non-renderable ones.
    pub fn zone_rects(&self) -> Vec<ScreenRect> {
        self.delimitations
            .iter()
            .map(|d| screen_rect_or_zero(d, self.metrics.as_ref()))
            .collect()
    }

    /// The drawable design overlay, if everything is ready.
    ///
    /// `None` while pending, when no record is adopted, or when the
    /// primary zone is degenerate — all valid "draw nothing yet" outcomes.
    pub fn overlay(&self) -> Option<DesignOverlay> {
        if self.image_error.is_some() {
            return None;
        }
        let metrics = self.metrics.as_ref()?;
        let record = self.record.as_ref()?;
        let zone = metrics.screen_rect(self.delimitations.first()?);
        if !zone.is_renderable() {
            return None;
        }
        let transform = compute_transform(record, &zone)?;
        Some(DesignOverlay {
            zone,
            transform,
            design_box: transform.screen_box(&zone),
        })
    }

    /// Idempotent metric recomputation; runs on every observer event.
    fn recompute(&mut self) {
        self.metrics = match (self.natural, self.container) {
            (Some((nw, nh)), Some((cw, ch))) => {
                let metrics = compute_metrics(nw, nh, cw, ch);
                if metrics.is_none() {
                    debug!("container not measurable yet, overlay stays hidden");
                }
                metrics
            }
            _ => None,
        };
    }
}
