//! # PlaceKit Core
//!
//! Core types for the PlaceKit design-placement engine: identity newtypes,
//! the placement record data model, the error taxonomy, and shared
//! constants. Every other PlaceKit crate builds on these.

pub mod constants;
pub mod error;
pub mod ids;
pub mod record;

pub use error::{CacheError, Error, RemoteError, Result};
pub use ids::{BaseProductId, DesignId, PlacementKey, VendorId};
pub use record::{PlacementRecord, PlacementSource};
