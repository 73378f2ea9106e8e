//! Hotspots: named, ordered display slots on a results page.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::asset::Asset;

/// Identifier of a display slot.
///
/// The set is closed; every [`ResultSet`](super::results::ResultSet) carries
/// exactly one hotspot per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HotspotKey {
    /// Featured slot, owned by at most one Partner vendor per pass.
    Showcase,
    /// Competing Partner assets once the showcase is full.
    TopPicks,
    /// Catch-all for Partner, Gold and Silver assets.
    Fold,
    /// Gold assets, only when no Partner is present.
    HighValue,
}

impl HotspotKey {
    /// All keys in page order.
    pub const ALL: [HotspotKey; 4] = [
        HotspotKey::Showcase,
        HotspotKey::TopPicks,
        HotspotKey::Fold,
        HotspotKey::HighValue,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Showcase => 0,
            Self::TopPicks => 1,
            Self::Fold => 2,
            Self::HighValue => 3,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Showcase => "Showcase",
            Self::TopPicks => "TopPicks",
            Self::Fold => "Fold",
            Self::HighValue => "HighValue",
        }
    }
}

impl fmt::Display for HotspotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, append-only list of assets.
///
/// Members keep the order in which they were added. The same asset may be
/// present more than once; no deduplication happens here.
#[derive(Debug, Clone, Default)]
pub struct Hotspot {
    members: Vec<Arc<Asset>>,
}

impl Hotspot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[Arc<Asset>] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Identity membership check.
    #[must_use]
    pub fn contains(&self, asset: &Asset) -> bool {
        self.members.iter().any(|m| m.key() == asset.key())
    }

    /// Number of times `asset` appears.
    #[must_use]
    pub fn occurrences(&self, asset: &Asset) -> usize {
        self.members.iter().filter(|m| m.key() == asset.key()).count()
    }

    /// First member, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Arc<Asset>> {
        self.members.first()
    }

    /// Append a member at the end.
    pub fn add_member(&mut self, asset: Arc<Asset>) {
        self.members.push(asset);
    }

    /// Append every member of `assets`, in order.
    pub fn extend<I>(&mut self, assets: I)
    where
        I: IntoIterator<Item = Arc<Asset>>,
    {
        self.members.extend(assets);
    }

    /// Replace all members at once.
    pub fn replace_members<I>(&mut self, assets: I)
    where
        I: IntoIterator<Item = Arc<Asset>>,
    {
        self.members.clear();
        self.members.extend(assets);
    }
}
