//! Identity types for placement records.
//!
//! A placement is addressed by the (vendor, base product, design) triple.
//! The ids are numeric platform ids wrapped in newtypes so the three can
//! never be swapped at a call site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vendor (shop owner) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub u64);

/// Admin-defined base product (mockup) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseProductId(pub u64);

/// Uploaded design identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(pub u64);

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BaseProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The triple uniquely addressing one placement record.
///
/// At most one authoritative record exists per key at any time; the
/// resolution chain's job is to pick or merge one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementKey {
    /// The vendor who owns the customized product.
    pub vendor_id: VendorId,
    /// The admin base product the design is placed on.
    pub base_product_id: BaseProductId,
    /// The design being placed.
    pub design_id: DesignId,
}

impl PlacementKey {
    /// Creates a key from the three raw ids.
    pub fn new(vendor_id: u64, base_product_id: u64, design_id: u64) -> Self {
        Self {
            vendor_id: VendorId(vendor_id),
            base_product_id: BaseProductId(base_product_id),
            design_id: DesignId(design_id),
        }
    }

    /// Canonical file stem for this key in the position cache:
    /// `placement-{vendor}-{product}-{design}`.
    pub fn storage_key(&self) -> String {
        format!(
            "placement-{}-{}-{}",
            self.vendor_id, self.base_product_id, self.design_id
        )
    }

    /// Parses a storage key produced by [`storage_key`](Self::storage_key).
    pub fn from_storage_key(stem: &str) -> Option<Self> {
        let rest = stem.strip_prefix("placement-")?;
        let mut parts = rest.splitn(3, '-');
        let vendor = parts.next()?.parse().ok()?;
        let product = parts.next()?.parse().ok()?;
        let design = parts.next()?.parse().ok()?;
        Some(Self::new(vendor, product, design))
    }
}

impl fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vendor {} / product {} / design {}",
            self.vendor_id, self.base_product_id, self.design_id
        )
    }
}
