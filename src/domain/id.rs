//! Domain identifier types.
//!
//! Two kinds of identifier live here:
//!
//! - **Keys** ([`VendorKey`], [`AssetKey`]) are opaque, process-unique handles
//!   allocated when an entity is constructed. Entity equality is defined on
//!   keys only, so two vendors built from identical field values are still
//!   two different vendors.
//! - **Ids** ([`VendorId`], [`AssetId`]) are the caller-facing string names
//!   that arrive with the data. They are labels, never identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_VENDOR_KEY: AtomicU64 = AtomicU64::new(1);
static NEXT_ASSET_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity handle for a [`Vendor`](super::vendor::Vendor).
///
/// The inner u64 is private; the only way to obtain a key is
/// [`VendorKey::next`], which never hands out the same value twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorKey(u64);

impl VendorKey {
    /// Allocate a fresh key.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_VENDOR_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VendorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vendor#{}", self.0)
    }
}

/// Identity handle for an [`Asset`](super::asset::Asset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetKey(u64);

impl AssetKey {
    /// Allocate a fresh key.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ASSET_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

/// Vendor identifier as supplied by the catalog.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorId(String);

impl VendorId {
    /// Create a new `VendorId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the vendor ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VendorId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VendorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Asset identifier as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(String);

impl AssetId {
    /// Create a new `AssetId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the asset ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
