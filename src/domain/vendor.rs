//! Vendors and their commercial relationship tier.

use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{VendorId, VendorKey};

/// Commercial relationship between the catalog and a vendor.
///
/// Only `Partner`, `Gold` and `Silver` take part in hotspot placement.
/// `Basic` vendors are inert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipTier {
    Partner,
    Gold,
    Silver,
    #[default]
    #[serde(alias = "none")]
    Basic,
}

impl RelationshipTier {
    /// Lowercase name as used in configuration and fixtures.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Partner => "partner",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for RelationshipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vendor owning one or more assets.
///
/// Equality and hashing use the [`VendorKey`] allocated at construction, so
/// two vendors with identical ids, names and tiers are distinct. Share a
/// vendor between assets by cloning its `Arc`, not by rebuilding it.
#[derive(Debug, Clone)]
pub struct Vendor {
    key: VendorKey,
    id: VendorId,
    display_name: String,
    tier: RelationshipTier,
    royalty_rate: Decimal,
}

impl Vendor {
    /// Create a new vendor with a fresh identity.
    pub fn new(
        id: impl Into<VendorId>,
        display_name: impl Into<String>,
        tier: RelationshipTier,
        royalty_rate: Decimal,
    ) -> Self {
        Self {
            key: VendorKey::next(),
            id: id.into(),
            display_name: display_name.into(),
            tier,
            royalty_rate,
        }
    }

    /// Create a new vendor with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `id` must not be blank
    /// - `royalty_rate` must lie in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        id: impl Into<VendorId>,
        display_name: impl Into<String>,
        tier: RelationshipTier,
        royalty_rate: Decimal,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyId { entity: "vendor" });
        }
        if royalty_rate < Decimal::ZERO || royalty_rate > Decimal::ONE {
            return Err(DomainError::InvalidRoyaltyRate { rate: royalty_rate });
        }
        Ok(Self::new(id, display_name, tier, royalty_rate))
    }

    /// Identity handle of this vendor.
    #[must_use]
    pub const fn key(&self) -> VendorKey {
        self.key
    }

    #[must_use]
    pub const fn id(&self) -> &VendorId {
        &self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub const fn tier(&self) -> RelationshipTier {
        self.tier
    }

    #[must_use]
    pub const fn royalty_rate(&self) -> Decimal {
        self.royalty_rate
    }
}

impl PartialEq for Vendor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Vendor {}

impl Hash for Vendor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
