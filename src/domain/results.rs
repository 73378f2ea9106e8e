//! The result set handed from retrieval to the placement rules.

use std::sync::Arc;

use super::asset::Asset;
use super::hotspot::{Hotspot, HotspotKey};
use super::id::AssetId;

/// Ordered stream of found assets plus one hotspot per [`HotspotKey`].
///
/// The found order is the ranking order and is never changed by placement
/// rules. All hotspots exist from construction and start empty.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    found: Vec<Arc<Asset>>,
    hotspots: [Hotspot; 4],
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a result set from an already-ordered stream.
    pub fn from_found<I>(assets: I) -> Self
    where
        I: IntoIterator<Item = Arc<Asset>>,
    {
        Self {
            found: assets.into_iter().collect(),
            hotspots: Default::default(),
        }
    }

    /// Append an asset to the end of the found stream.
    pub fn add_found(&mut self, asset: Arc<Asset>) {
        self.found.push(asset);
    }

    /// Found assets in ranking order.
    #[must_use]
    pub fn found(&self) -> &[Arc<Asset>] {
        &self.found
    }

    /// Look up a found asset by its catalog id (first match in stream order).
    #[must_use]
    pub fn find(&self, id: &AssetId) -> Option<&Arc<Asset>> {
        self.found.iter().find(|a| a.id() == id)
    }

    #[must_use]
    pub fn hotspot(&self, key: HotspotKey) -> &Hotspot {
        &self.hotspots[key.index()]
    }

    pub fn hotspot_mut(&mut self, key: HotspotKey) -> &mut Hotspot {
        &mut self.hotspots[key.index()]
    }

    /// Hotspots in page order.
    pub fn hotspots(&self) -> impl Iterator<Item = (HotspotKey, &Hotspot)> {
        HotspotKey::ALL.into_iter().map(move |key| (key, self.hotspot(key)))
    }
}
