//! Shared constants for the placement engine.

/// Fraction of the delimitation box a design occupies when no explicit
/// scale has been recorded anywhere.
pub const DEFAULT_DESIGN_SCALE: f64 = 0.8;

/// A delimitation coordinate above this value cannot be a percentage, so
/// rects with an unset coordinate type are treated as pixel-space when any
/// raw value exceeds it.
pub const PIXEL_COORD_THRESHOLD: f64 = 100.0;

/// Default TTL for cached placement entries (30 days).
pub const DEFAULT_CACHE_TTL_HOURS: u64 = 720;

/// Smallest design placeholder size the repositioning editor allows, in
/// percent of the container.
pub const MIN_EDITOR_SIZE_PCT: f64 = 5.0;
