//! Wire shapes of a result-set document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{PurchaseInfo, RelationshipTier};

/// A complete result set as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSetDocument {
    /// Every vendor entry becomes its own vendor, even if two entries are
    /// field-for-field identical.
    #[serde(default)]
    pub vendors: Vec<VendorDto>,

    /// Found assets, in ranking order.
    #[serde(default)]
    pub assets: Vec<AssetDto>,

    /// Asset ids already placed in the showcase by an earlier stage.
    #[serde(default)]
    pub showcase: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorDto {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub tier: RelationshipTier,
    #[serde(default)]
    pub royalty_rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDto {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Id of the owning vendor entry.
    pub vendor: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub purchase_info: PurchaseInfo,
}
