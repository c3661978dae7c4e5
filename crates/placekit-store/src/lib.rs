//! # PlaceKit Store
//!
//! Local persistence for the placement engine:
//!
//! - [`PositionCache`] — the fast-path keyed store of placement records,
//!   one JSON file per (vendor, base product, design) triple, with TTL
//!   sweeps and defensive handling of corrupted entries.
//! - [`EngineConfig`] — engine configuration loaded from the platform
//!   config directory (TOML or JSON).
//!
//! The cache is always an explicitly injected dependency: components
//! receive a `PositionCache` rooted at a concrete directory rather than
//! reaching for ambient global state, which keeps the engine testable
//! against temp directories.

pub mod cache;
pub mod config;

pub use cache::{CacheKeyRef, CachedPlacement, PositionCache};
pub use config::{CacheSettings, EngineConfig, PlacementSettings};
