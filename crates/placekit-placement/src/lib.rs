//! # PlaceKit Placement
//!
//! The decision-making half of the engine:
//!
//! - [`PlacementResolver`] — reconciles remote position records, remote
//!   transform records, the local cache, and fallback defaults into one
//!   authoritative [`PlacementRecord`](placekit_core::PlacementRecord)
//!   per triple, enriching missing dimension fields from the cache.
//! - [`compute_transform`] — turns a resolved record plus an on-screen
//!   delimitation into the actual design box, clamped so the design can
//!   never be dragged fully outside its zone.
//! - [`PlacementSyncer`] — best-effort, fire-and-forget push of enriched
//!   or freshly saved records back to the remote store.
//!
//! Resolution is synchronous against already-fetched candidate data, so a
//! frame never observes a partially enriched record; only the remote
//! writes are spawned.

pub mod constraint;
pub mod remote;
pub mod resolver;
pub mod sync;

pub use constraint::{compute_transform, DesignTransform};
pub use remote::{
    RemoteCandidates, RemotePosition, RemotePositionStore, RemotePositionWrite, RemoteTransform,
    RemoteTransformSet,
};
pub use resolver::{FallbackDefaults, PlacementResolver};
pub use sync::PlacementSyncer;
