//! Observational summary of one rule pass.

use std::sync::Arc;

use super::hotspot::HotspotKey;
use super::vendor::Vendor;

/// What a single rule pass did to a result set.
///
/// Purely informational: the mutated [`ResultSet`](super::results::ResultSet)
/// is the actual output of a pass. The summary feeds logging and the CLI.
#[derive(Debug, Clone, Default)]
pub struct PlacementSummary {
    appended: [usize; 4],
    showcase_owner: Option<Arc<Vendor>>,
    showcase_preclaimed: bool,
}

impl PlacementSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` members appended to `key`.
    pub fn record(&mut self, key: HotspotKey, count: usize) {
        self.appended[key.index()] += count;
    }

    /// Members appended to `key` during the pass.
    #[must_use]
    pub fn appended(&self, key: HotspotKey) -> usize {
        self.appended[key.index()]
    }

    /// Total members appended across all hotspots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.appended.iter().sum()
    }

    /// Vendor whose assets were committed to the showcase by this pass.
    #[must_use]
    pub fn showcase_owner(&self) -> Option<&Arc<Vendor>> {
        self.showcase_owner.as_ref()
    }

    pub fn set_showcase_owner(&mut self, vendor: Arc<Vendor>) {
        self.showcase_owner = Some(vendor);
    }

    /// True when the showcase was already filled before the pass began.
    #[must_use]
    pub const fn showcase_preclaimed(&self) -> bool {
        self.showcase_preclaimed
    }

    pub fn set_showcase_preclaimed(&mut self, preclaimed: bool) {
        self.showcase_preclaimed = preclaimed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_per_key() {
        let mut summary = PlacementSummary::new();
        summary.record(HotspotKey::Fold, 3);
        summary.record(HotspotKey::Fold, 2);
        summary.record(HotspotKey::TopPicks, 1);

        assert_eq!(summary.appended(HotspotKey::Fold), 5);
        assert_eq!(summary.appended(HotspotKey::TopPicks), 1);
        assert_eq!(summary.appended(HotspotKey::Showcase), 0);
        assert_eq!(summary.total(), 6);
    }
}
