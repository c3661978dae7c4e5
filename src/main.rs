//! Demo binary: runs one full placement cycle against a temporary cache.
//!
//! Resolves a placement for a design/product/vendor triple from an
//! in-memory remote store, lays out a mockup preview, simulates a drag
//! in the repositioning editor, saves the result, and resolves again to
//! show the cache taking over.

use async_trait::async_trait;
use placekit::{
    init_logging, DelimitationRect, DesignId, EditorPlacement, EditorRect, FallbackDefaults,
    HitTarget, MockupPreview, PlacementKey, PlacementResolver, PlacementSession, PositionCache,
    RemoteError, RemotePosition, RemotePositionStore, RemotePositionWrite, RemoteTransformSet,
    RepositionEditor, ScreenRect,
};
use tracing::info;

/// Remote store seeded with a single saved position.
struct DemoRemote {
    position: RemotePosition,
}

#[async_trait]
impl RemotePositionStore for DemoRemote {
    async fn fetch_positions(&self, design_id: DesignId) -> Result<Vec<RemotePosition>, RemoteError> {
        if design_id == self.position.design_id {
            Ok(vec![self.position.clone()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn fetch_transforms(&self, _: DesignId) -> Result<Vec<RemoteTransformSet>, RemoteError> {
        Ok(Vec::new())
    }

    async fn write_position(
        &self,
        key: &PlacementKey,
        write: &RemotePositionWrite,
    ) -> Result<(), RemoteError> {
        info!(%key, x = write.x, y = write.y, "remote write");
        Ok(())
    }

    async fn delete_position(&self, key: &PlacementKey) -> Result<(), RemoteError> {
        info!(%key, "remote delete");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cache_dir = std::env::temp_dir().join("placekit-demo-cache");
    std::fs::create_dir_all(&cache_dir)?;
    let cache = PositionCache::new(&cache_dir);
    let key = PlacementKey::new(7, 42, 1001);

    let remote = DemoRemote {
        position: RemotePosition {
            design_id: key.design_id,
            x: 12.0,
            y: -8.0,
            scale: Some(0.6),
            rotation: None,
            design_width: Some(96.0),
            design_height: Some(96.0),
        },
    };

    // First resolve: the remote saved position wins over the cold cache.
    let resolver = PlacementResolver::new(&cache, FallbackDefaults::default());
    let record = resolver.resolve_remote(&key, &remote).await;
    info!(source = ?record.source, scale = record.effective_scale(), "resolved placement");

    // Lay out a 800x600 mockup in a 400x300 viewport with a centered zone.
    let mut preview = MockupPreview::new(vec![DelimitationRect::percentage(25.0, 25.0, 50.0, 50.0)]);
    preview.set_record(record);
    preview.image_loaded(800.0, 600.0);
    preview.container_resized(400.0, 300.0);
    if let Some(overlay) = preview.overlay() {
        info!(zone = ?overlay.zone, design = ?overlay.design_box, "preview layout");
    }

    // Drag the placeholder 10% right and save through the cache.
    let container = (400.0, 300.0);
    let mut editor = RepositionEditor::new(
        container,
        EditorPlacement {
            rect: EditorRect::new(37.5, 37.5, 25.0, 25.0),
            scale: 1.0,
            rotation: 0.0,
        },
    );
    editor.pointer_down(HitTarget::Body, (200.0, 150.0));
    editor.pointer_move((240.0, 150.0));
    let placement = editor.save();

    let zone = preview
        .zone_rects()
        .first()
        .copied()
        .unwrap_or(ScreenRect::ZERO);
    let session = PlacementSession::new(&cache);
    let saved = session.save_from_editor(&key, &placement, container, &zone);
    info!(x = saved.x, y = saved.y, "placement saved");

    // Resolve without the remote: the cache answers now.
    let record = resolver.resolve(&key, &placekit::RemoteCandidates::empty());
    info!(source = ?record.source, x = record.x, y = record.y, "re-resolved placement");

    Ok(())
}
