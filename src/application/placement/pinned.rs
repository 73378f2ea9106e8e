//! Editorial showcase pinning.

use tracing::{debug, warn};

use crate::domain::{AssetId, HotspotKey, PlacementSummary, ResultSet};
use crate::port::inbound::rule::HotspotRule;

/// Fills the showcase with a fixed list of assets chosen by an editor.
///
/// Runs ahead of relationship placement so that a pinned showcase takes
/// precedence. Does nothing if the showcase already has members or none of
/// the pinned ids are in the result set.
#[derive(Debug, Clone, Default)]
pub struct PinnedShowcaseRule {
    pinned: Vec<AssetId>,
}

impl PinnedShowcaseRule {
    #[must_use]
    pub fn new(pinned: Vec<AssetId>) -> Self {
        Self { pinned }
    }
}

impl HotspotRule for PinnedShowcaseRule {
    fn name(&self) -> &'static str {
        "pinned_showcase"
    }

    fn apply(&self, results: &mut ResultSet) -> PlacementSummary {
        let mut summary = PlacementSummary::new();
        if !results.hotspot(HotspotKey::Showcase).is_empty() {
            summary.set_showcase_preclaimed(true);
            debug!("Showcase already filled, skipping pins");
            return summary;
        }

        let mut selected = Vec::with_capacity(self.pinned.len());
        for id in &self.pinned {
            match results.find(id) {
                Some(asset) => selected.push(asset.clone()),
                None => warn!(asset = %id, "Pinned asset not in result set"),
            }
        }

        if let Some(first) = selected.first() {
            summary.set_showcase_owner(first.vendor().clone());
        }
        summary.record(HotspotKey::Showcase, selected.len());
        results.hotspot_mut(HotspotKey::Showcase).extend(selected);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Asset, RelationshipTier, Vendor};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn results_with(ids: &[&str]) -> ResultSet {
        let vendor = Arc::new(Vendor::new("v", "V", RelationshipTier::Basic, dec!(0)));
        ResultSet::from_found(
            ids.iter()
                .map(|id| Arc::new(Asset::new(*id, *id, vendor.clone()))),
        )
    }

    #[test]
    fn pins_in_given_order() {
        let mut results = results_with(&["a", "b", "c"]);
        let rule = PinnedShowcaseRule::new(vec!["c".into(), "a".into()]);

        let summary = rule.apply(&mut results);

        let ids: Vec<&str> = results
            .hotspot(HotspotKey::Showcase)
            .members()
            .iter()
            .map(|a| a.id().as_str())
            .collect();
        assert_eq!(ids, ["c", "a"]);
        assert_eq!(summary.appended(HotspotKey::Showcase), 2);
    }

    #[test]
    fn skips_unknown_ids() {
        let mut results = results_with(&["a"]);
        let rule = PinnedShowcaseRule::new(vec!["missing".into(), "a".into()]);
        rule.apply(&mut results);
        assert_eq!(results.hotspot(HotspotKey::Showcase).len(), 1);
    }

    #[test]
    fn leaves_filled_showcase_alone() {
        let mut results = results_with(&["a", "b"]);
        let first = results.found()[0].clone();
        results.hotspot_mut(HotspotKey::Showcase).add_member(first);

        let summary = PinnedShowcaseRule::new(vec!["b".into()]).apply(&mut results);

        assert_eq!(results.hotspot(HotspotKey::Showcase).len(), 1);
        assert!(summary.showcase_preclaimed());
        assert_eq!(summary.total(), 0);
    }
}
