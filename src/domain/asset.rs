//! Search-result assets.
//!
//! An [`Asset`] is one item in the ordered result stream. It is immutable
//! once built and always owned by exactly one [`Vendor`]. Like vendors,
//! assets compare by identity: two assets built from the same fields are
//! different assets.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::error::DomainError;
use super::id::{AssetId, AssetKey};
use super::money::PurchaseInfo;
use super::vendor::{RelationshipTier, Vendor};

/// A single search-result item eligible for hotspot placement.
#[derive(Debug, Clone)]
pub struct Asset {
    key: AssetKey,
    id: AssetId,
    title: String,
    url: Option<String>,
    thumbnail_url: Option<String>,
    purchase_info: PurchaseInfo,
    topics: Vec<String>,
    vendor: Arc<Vendor>,
}

impl Asset {
    /// Create an asset with only the required fields.
    pub fn new(id: impl Into<AssetId>, title: impl Into<String>, vendor: Arc<Vendor>) -> Self {
        Self {
            key: AssetKey::next(),
            id: id.into(),
            title: title.into(),
            url: None,
            thumbnail_url: None,
            purchase_info: PurchaseInfo::default(),
            topics: Vec::new(),
            vendor,
        }
    }

    /// Create a new builder.
    #[must_use]
    pub fn builder() -> AssetBuilder {
        AssetBuilder::new()
    }

    /// Identity handle of this asset.
    #[must_use]
    pub const fn key(&self) -> AssetKey {
        self.key
    }

    #[must_use]
    pub const fn id(&self) -> &AssetId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    #[must_use]
    pub const fn purchase_info(&self) -> &PurchaseInfo {
        &self.purchase_info
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// The owning vendor.
    #[must_use]
    pub fn vendor(&self) -> &Arc<Vendor> {
        &self.vendor
    }

    /// Shorthand for the owning vendor's tier.
    #[must_use]
    pub fn tier(&self) -> RelationshipTier {
        self.vendor.tier()
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Builder for constructing [`Asset`] instances.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hotspots::domain::{Asset, RelationshipTier, Vendor};
/// use rust_decimal_macros::dec;
///
/// let vendor = Arc::new(Vendor::new("v1", "Acme", RelationshipTier::Gold, dec!(0.2)));
/// let asset = Asset::builder()
///     .id("a1")
///     .title("Harbor at dawn")
///     .vendor(vendor)
///     .topic("sea")
///     .build()
///     .unwrap();
/// assert_eq!(asset.tier(), RelationshipTier::Gold);
/// ```
#[derive(Debug, Default)]
pub struct AssetBuilder {
    id: Option<AssetId>,
    title: Option<String>,
    url: Option<String>,
    thumbnail_url: Option<String>,
    purchase_info: PurchaseInfo,
    topics: Vec<String>,
    vendor: Option<Arc<Vendor>>,
}

impl AssetBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<AssetId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn purchase_info(mut self, info: PurchaseInfo) -> Self {
        self.purchase_info = info;
        self
    }

    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.push(topic.into());
        self
    }

    #[must_use]
    pub fn topics(mut self, topics: impl IntoIterator<Item = String>) -> Self {
        self.topics.extend(topics);
        self
    }

    #[must_use]
    pub fn vendor(mut self, vendor: Arc<Vendor>) -> Self {
        self.vendor = Some(vendor);
        self
    }

    /// Build the asset.
    ///
    /// A missing title defaults to the empty string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the id or vendor is missing, or the id is blank.
    pub fn build(self) -> Result<Asset, DomainError> {
        let id = self.id.ok_or(DomainError::MissingField { field: "id" })?;
        if id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyId { entity: "asset" });
        }
        let vendor = self.vendor.ok_or(DomainError::MissingField { field: "vendor" })?;

        Ok(Asset {
            key: AssetKey::next(),
            id,
            title: self.title.unwrap_or_default(),
            url: self.url,
            thumbnail_url: self.thumbnail_url,
            purchase_info: self.purchase_info,
            topics: self.topics,
            vendor,
        })
    }
}
