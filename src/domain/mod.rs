//! Search-result domain: vendors, assets, hotspots and result sets.

pub mod asset;
pub mod error;
pub mod hotspot;
pub mod id;
pub mod money;
pub mod results;
pub mod summary;
pub mod vendor;

pub use asset::{Asset, AssetBuilder};
pub use hotspot::{Hotspot, HotspotKey};
pub use id::{AssetId, AssetKey, VendorId, VendorKey};
pub use money::{Money, PurchaseInfo};
pub use results::ResultSet;
pub use summary::PlacementSummary;
pub use vendor::{RelationshipTier, Vendor};
