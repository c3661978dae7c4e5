//! placekit - design placement engine for product mockup previews
//!
//! Computes where a design sits on a product mockup image: contain-fit
//! geometry for the mockup itself, placement zones mapped into screen
//! space, and a placement record resolved from remote data, the local
//! cache, or defaults. The workspace crates layer as:
//!
//! - `placekit-core` — identifiers, the placement record, errors
//! - `placekit-geometry` — contain-fit metrics and coordinate spaces
//! - `placekit-store` — file-backed position cache and configuration
//! - `placekit-placement` — resolution chain, constraints, remote sync
//! - `placekit-preview` — preview renderer and repositioning editor
//!
//! This crate re-exports the public surface of all of them.

pub use placekit_core::{
    constants, BaseProductId, CacheError, DesignId, Error, PlacementKey, PlacementRecord,
    PlacementSource, RemoteError, Result, VendorId,
};

pub use placekit_geometry::{
    compute_metrics, screen_rect_or_zero, CoordinateType, DelimitationRect, EditorPlacement,
    EditorRect, ImageMetrics, PercentRect, ScreenRect,
};

pub use placekit_store::{
    CacheKeyRef, CacheSettings, CachedPlacement, EngineConfig, PlacementSettings, PositionCache,
};

pub use placekit_placement::{
    compute_transform, DesignTransform, FallbackDefaults, PlacementResolver, PlacementSyncer,
    RemoteCandidates, RemotePosition, RemotePositionStore, RemotePositionWrite, RemoteTransform,
    RemoteTransformSet,
};

pub use placekit_preview::{
    DesignOverlay, DragState, HitTarget, MockupPreview, PlacementSession, PreviewState,
    RepositionEditor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Console output with compact formatting, filtered through the
/// `RUST_LOG` environment variable (default level: info).
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
